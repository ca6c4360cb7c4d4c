/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Support traits for types generated by [`shape!`](crate::shape).

use crate::Instant;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Placeholder written in place of fields that must not appear in logs
pub const REDACTED: &str = "*** Sensitive Data Redacted ***";

/// Renders a field value for diagnostic output
///
/// Strings are written without quotes and lists as `[a, b]`, so a rendered shape reads like
/// `{DomainName: example.com, Nameservers: [{Name: ns1.example.com}]}`.
pub trait Render {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Render for String {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

macro_rules! render_with_display {
    ($($ty:ty),*) => {
        $(
            impl Render for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

render_with_display!(bool, i32, i64, f64);

impl Render for Instant {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fmt(crate::instant::Format::DateTime))
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, item) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

/// Hashing that stays consistent with the derived `PartialEq` of a shape
///
/// `f64` has no `Hash` implementation, so shapes hash their fields through this trait.
/// Floating point values hash by bit pattern.
pub trait HashField {
    fn hash_field<H: Hasher>(&self, state: &mut H);
}

macro_rules! hash_with_hash {
    ($($ty:ty),*) => {
        $(
            impl HashField for $ty {
                fn hash_field<H: Hasher>(&self, state: &mut H) {
                    Hash::hash(self, state)
                }
            }
        )*
    };
}

hash_with_hash!(String, bool, i32, i64, Instant);

impl HashField for f64 {
    fn hash_field<H: Hasher>(&self, state: &mut H) {
        // -0.0 == 0.0 so both must land in the same bucket
        let normalized = if *self == 0.0 { 0.0_f64 } else { *self };
        normalized.to_bits().hash(state)
    }
}

impl<T: HashField> HashField for Vec<T> {
    fn hash_field<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for item in self {
            item.hash_field(state);
        }
    }
}

impl<T: HashField> HashField for Option<T> {
    fn hash_field<H: Hasher>(&self, state: &mut H) {
        match self {
            Some(value) => {
                1_u8.hash(state);
                value.hash_field(state);
            }
            None => 0_u8.hash(state),
        }
    }
}
