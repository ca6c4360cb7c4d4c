/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Field constraints checked before a request is serialized.
//!
//! Each check takes the field as stored on the shape (`&Option<T>`) and the wire name used in
//! the error message. Absent fields only fail the `required` check.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was not set
    MissingField { field: &'static str },
    /// A string or list field was outside its length bounds
    Length {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },
    /// A numeric field was outside its bounds
    Range { field: &'static str, detail: String },
    /// An enum-typed field held a value outside of its closed set
    UnknownValue { field: &'static str, value: String },
    /// A string field contained characters its pattern rejects
    Pattern { field: &'static str },
}

impl ValidationError {
    /// Wire name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField { field }
            | ValidationError::Length { field, .. }
            | ValidationError::Range { field, .. }
            | ValidationError::UnknownValue { field, .. }
            | ValidationError::Pattern { field } => field,
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField { field } => write!(f, "{} is required", field),
            ValidationError::Length {
                field,
                min,
                max,
                actual,
            } => write!(
                f,
                "{} must have length between {} and {}, got {}",
                field, min, max, actual
            ),
            ValidationError::Range { field, detail } => write!(f, "{} {}", field, detail),
            ValidationError::UnknownValue { field, value } => {
                write!(f, "`{}` is not a valid value for {}", value, field)
            }
            ValidationError::Pattern { field } => {
                write!(f, "{} contains characters that are not allowed", field)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Implemented by shapes that can check their own constraints
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

pub fn required<T>(value: &Option<T>, field: &'static str) -> Result<(), ValidationError> {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationError::MissingField { field }),
    }
}

/// Anything with a length: strings count characters, lists count items
///
/// String lengths are Unicode scalar values, not UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts once.
pub trait Length {
    fn length(&self) -> usize;
}

impl Length for String {
    fn length(&self) -> usize {
        self.chars().count()
    }
}

impl<T> Length for Vec<T> {
    fn length(&self) -> usize {
        self.len()
    }
}

pub fn length<T: Length>(
    value: &Option<T>,
    min: usize,
    max: usize,
    field: &'static str,
) -> Result<(), ValidationError> {
    match value {
        Some(value) => {
            let actual = value.length();
            if actual < min || actual > max {
                Err(ValidationError::Length {
                    field,
                    min,
                    max,
                    actual,
                })
            } else {
                Ok(())
            }
        }
        None => Ok(()),
    }
}

pub fn range<T>(
    value: &Option<T>,
    min: T,
    max: T,
    field: &'static str,
) -> Result<(), ValidationError>
where
    T: PartialOrd + Display + Copy,
{
    match value {
        Some(value) if *value < min || *value > max => Err(ValidationError::Range {
            field,
            detail: format!("must be between {} and {}, got {}", min, max, value),
        }),
        _ => Ok(()),
    }
}

/// The field must parse as a member of the closed enumeration `E`
pub fn one_of<E: FromStr>(value: &Option<String>, field: &'static str) -> Result<(), ValidationError> {
    match value {
        Some(value) if value.parse::<E>().is_err() => Err(ValidationError::UnknownValue {
            field,
            value: value.clone(),
        }),
        _ => Ok(()),
    }
}

pub fn pattern(
    value: &Option<String>,
    allowed: fn(char) -> bool,
    field: &'static str,
) -> Result<(), ValidationError> {
    match value {
        Some(value) if !value.chars().all(allowed) => Err(ValidationError::Pattern { field }),
        _ => Ok(()),
    }
}

/// Characters allowed by `[\u0020-\uD7FF\uE000-\uFFFD\u10000-\u10FFFF\r\n\t]`
///
/// This is the XML 1.0 character range: everything except most ASCII control characters and
/// the non-characters U+FFFE and U+FFFF. Surrogates cannot occur in a Rust `char`.
pub fn xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Characters matched by the POSIX `\p{Print}` class: ASCII space through `~`
pub fn printable(c: char) -> bool {
    matches!(c, ' '..='~')
}
