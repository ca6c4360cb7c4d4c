/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Macros used by service crates to declare their shapes and enumerations.

/// Define a request or response shape, its builder, and its constraints.
///
/// Every field is declared as `setter_name, field_name: Type => "WireName"`, optionally
/// followed by a bracketed constraint list. The generated struct stores each field as
/// `Option<Type>`; the builder lives in the named companion module and offers a fluent setter
/// (`field_name`) and a plain setter (`setter_name`) with the same effect.
///
/// Constraints: `required`, `length(min, max)`, `range(min, max)`, `one_of(EnumType)`,
/// `pattern(predicate)`, `nested`, `nested_list`.
///
/// A trailing `sensitive [field, ...]` list keeps those fields out of `Debug` and `Display`.
///
/// The calling crate must depend on `serde` with the `derive` feature.
///
/// ```rust
/// smithy_types::shape! {
///     /// A tag attached to a domain
///     pub struct Tag in tag {
///         set_key, key: String => "Key" [required, length(1, 128)],
///         set_value, value: String => "Value",
///     }
/// }
///
/// # fn main() {
/// let tag = Tag::builder().key("team").build();
/// assert_eq!(tag.key(), Some(&"team".to_string()));
/// assert_eq!(tag.to_string(), "{Key: team}");
/// # }
/// ```
#[macro_export]
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident in $module:ident {
            $(
                $(#[$field_meta:meta])*
                $setter:ident, $field:ident: $ty:ty => $wire:literal $([$($constraint:tt)*])?
            ),* $(,)?
        }
        $(sensitive [$($sensitive:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl $name {
            /// Creates a new builder-style object to manufacture this shape
            pub fn builder() -> $module::Builder {
                $module::Builder::default()
            }

            $(
                $(#[$field_meta])*
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }
            )*
        }

        impl ::std::fmt::Display for $name {
            #[allow(unused_mut, unused_variables, unused_assignments, dead_code)]
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                const SENSITIVE: &[&str] = &[$($(stringify!($sensitive)),*)?];
                f.write_str("{")?;
                let mut first = true;
                $(
                    if let Some(value) = &self.$field {
                        if !first {
                            f.write_str(", ")?;
                        }
                        first = false;
                        f.write_str($wire)?;
                        f.write_str(": ")?;
                        if SENSITIVE.contains(&stringify!($field)) {
                            f.write_str($crate::shape::REDACTED)?;
                        } else {
                            $crate::shape::Render::render(value, f)?;
                        }
                    }
                )*
                f.write_str("}")
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(stringify!($name))?;
                f.write_str(" ")?;
                ::std::fmt::Display::fmt(self, f)
            }
        }

        impl ::std::hash::Hash for $name {
            #[allow(unused_variables)]
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                $(
                    $crate::shape::HashField::hash_field(&self.$field, state);
                )*
            }
        }

        impl $crate::shape::Render for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }

        impl $crate::shape::HashField for $name {
            fn hash_field<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self, state)
            }
        }

        impl $crate::constraint::Validate for $name {
            fn validate(&self) -> Result<(), $crate::constraint::ValidationError> {
                $(
                    $crate::__check_field!(self.$field, $wire, $($($constraint)*)?);
                )*
                Ok(())
            }
        }

        #[allow(missing_docs)]
        pub mod $module {
            #[allow(unused_imports)]
            use super::*;

            /// A builder for the enclosing shape
            #[derive(Clone, Default, PartialEq)]
            pub struct Builder {
                $(
                    $field: Option<$ty>,
                )*
            }

            impl Builder {
                $(
                    $(#[$field_meta])*
                    pub fn $field(mut self, input: impl Into<$ty>) -> Self {
                        self.$field = Some(input.into());
                        self
                    }

                    $(#[$field_meta])*
                    pub fn $setter(&mut self, input: Option<$ty>) -> &mut Self {
                        self.$field = input;
                        self
                    }
                )*

                /// Consumes the builder and constructs the shape
                pub fn build(self) -> super::$name {
                    super::$name {
                        $(
                            $field: self.$field,
                        )*
                    }
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __check_field {
    ($value:expr, $wire:expr, ) => {};
    ($value:expr, $wire:expr, required $(, $($rest:tt)*)?) => {
        $crate::constraint::required(&$value, $wire)?;
        $crate::__check_field!($value, $wire, $($($rest)*)?);
    };
    ($value:expr, $wire:expr, length($min:expr, $max:expr) $(, $($rest:tt)*)?) => {
        $crate::constraint::length(&$value, $min, $max, $wire)?;
        $crate::__check_field!($value, $wire, $($($rest)*)?);
    };
    ($value:expr, $wire:expr, range($min:expr, $max:expr) $(, $($rest:tt)*)?) => {
        $crate::constraint::range(&$value, $min, $max, $wire)?;
        $crate::__check_field!($value, $wire, $($($rest)*)?);
    };
    ($value:expr, $wire:expr, one_of($enum:ty) $(, $($rest:tt)*)?) => {
        $crate::constraint::one_of::<$enum>(&$value, $wire)?;
        $crate::__check_field!($value, $wire, $($($rest)*)?);
    };
    ($value:expr, $wire:expr, pattern($allowed:path) $(, $($rest:tt)*)?) => {
        $crate::constraint::pattern(&$value, $allowed, $wire)?;
        $crate::__check_field!($value, $wire, $($($rest)*)?);
    };
    ($value:expr, $wire:expr, nested $(, $($rest:tt)*)?) => {
        if let Some(inner) = &$value {
            $crate::constraint::Validate::validate(inner)?;
        }
        $crate::__check_field!($value, $wire, $($($rest)*)?);
    };
    ($value:expr, $wire:expr, nested_list $(, $($rest:tt)*)?) => {
        if let Some(items) = &$value {
            for item in items {
                $crate::constraint::Validate::validate(item)?;
            }
        }
        $crate::__check_field!($value, $wire, $($($rest)*)?);
    };
}

/// Define a closed enumeration of string values.
///
/// Each member has exactly one canonical string. Lookups by string fail with
/// [`UnknownVariantError`](crate::UnknownVariantError) for absent, empty or unrecognized
/// input; they never fall back to a default member.
///
/// ```rust
/// use std::str::FromStr;
/// smithy_types::closed_enum! {
///     pub enum PolicyType {
///         StepScaling => "StepScaling",
///         TargetTrackingScaling => "TargetTrackingScaling",
///     }
/// }
///
/// assert_eq!(PolicyType::StepScaling.as_str(), "StepScaling");
/// assert_eq!(PolicyType::from_str("StepScaling"), Ok(PolicyType::StepScaling));
/// assert!(PolicyType::from_str("").is_err());
/// assert!(PolicyType::from_value(None).is_err());
/// ```
#[macro_export]
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Returns the canonical string for this member
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(
                        $name::$variant => $value,
                    )+
                }
            }

            /// Every canonical string, in declaration order
            pub fn values() -> &'static [&'static str] {
                &[$($value),+]
            }

            /// Every member, in declaration order
            pub fn variants() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            /// Looks up the member for `value`, failing on `None`
            pub fn from_value(value: Option<&str>) -> Result<Self, $crate::UnknownVariantError> {
                match value {
                    $(
                        Some($value) => Ok($name::$variant),
                    )+
                    other => Err($crate::UnknownVariantError::new(stringify!($name), other)),
                }
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::UnknownVariantError;

            fn from_str(s: &str) -> Result<Self, $crate::UnknownVariantError> {
                $name::from_value(Some(s))
            }
        }

        impl<'a> ::std::convert::TryFrom<&'a str> for $name {
            type Error = $crate::UnknownVariantError;

            fn try_from(s: &'a str) -> Result<Self, $crate::UnknownVariantError> {
                $name::from_value(Some(s))
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_owned()
            }
        }
    };
}
