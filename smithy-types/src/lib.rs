/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol agnostic types used by generated service clients.
//!
//! Service crates build their request and response shapes with [`shape!`] and their closed
//! string sets with [`closed_enum!`]. Both macros lean on the helper traits in [`shape`] and
//! the validators in [`constraint`].

#[macro_use]
mod macros;

pub mod constraint;
pub mod instant;
pub mod retry;
pub mod shape;

pub use crate::instant::Instant;

use crate::retry::{ErrorKind, ProvideErrorKind};

use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Generic Error type
///
/// For many services, Errors are modeled. However, many services only partially model errors or don't
/// model errors at all. In these cases, the SDK will return this generic error type to expose the
/// `code`, `message` and `request_id`.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    extras: HashMap<&'static str, String>,
}

/// Builder for [`Error`].
#[derive(Default)]
pub struct Builder {
    inner: Error,
}

impl Builder {
    /// Sets the error message.
    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the error code.
    pub fn code(&mut self, code: impl Into<String>) -> &mut Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the request ID the error happened for.
    pub fn request_id(&mut self, request_id: impl Into<String>) -> &mut Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Set a custom field on the error metadata
    ///
    /// Typically, these will be accessed with an extension trait:
    /// ```rust
    /// use smithy_types::Error;
    /// const HOST_ID: &str = "host_id";
    /// trait S3ErrorExt {
    ///     fn extended_request_id(&self) -> Option<&str>;
    /// }
    ///
    /// impl S3ErrorExt for Error {
    ///     fn extended_request_id(&self) -> Option<&str> {
    ///         self.extra(HOST_ID)
    ///     }
    /// }
    ///
    /// fn main() {
    ///     let sdk_response: Result<(), Error> = Err(Error::builder().custom(HOST_ID, "x-1234").build());
    ///     if let Err(err) = sdk_response {
    ///         println!("request id: {:?}, extended request id: {:?}", err.request_id(), err.extended_request_id());
    ///     }
    /// }
    /// ```
    pub fn custom(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.inner.extras.insert(key, value.into());
        self
    }

    /// Creates the error.
    pub fn build(&mut self) -> Error {
        std::mem::take(&mut self.inner)
    }
}

impl Error {
    /// Returns the error code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
    /// Returns the request ID the error occurred for, if it's available.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
    /// Returns additional information about the error if it's present.
    pub fn extra(&self, key: &'static str) -> Option<&str> {
        self.extras.get(key).map(|k| k.as_str())
    }

    /// Creates an `Error` builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Converts an `Error` into a builder.
    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(req_id) = &self.request_id {
            fmt.field("request_id", req_id);
        }
        for (k, v) in &self.extras {
            fmt.field(k, &v);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

/// Returned when a string is not one of the values of a closed enumeration.
///
/// Lookups never fall back to a default: absent, empty and unrecognized inputs all produce
/// this error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariantError {
    enum_name: &'static str,
    value: Option<String>,
}

impl UnknownVariantError {
    pub fn new(enum_name: &'static str, value: Option<&str>) -> Self {
        UnknownVariantError {
            enum_name,
            value: value.map(|v| v.to_owned()),
        }
    }

    /// Name of the enumeration the lookup was made against
    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    /// The rejected value, `None` if no value was given
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl Display for UnknownVariantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) if value.is_empty() => {
                write!(f, "empty string is not a valid {}", self.enum_name)
            }
            Some(value) => write!(f, "`{}` is not a valid {}", value, self.enum_name),
            None => write!(f, "a value is required for {}", self.enum_name),
        }
    }
}

impl std::error::Error for UnknownVariantError {}
