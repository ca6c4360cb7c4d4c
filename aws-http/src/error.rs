/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Macros for declaring the errors of a service
//!
//! [`modeled_error!`](crate::modeled_error) declares one named error of the service vocabulary.
//! [`operation_error!`](crate::operation_error) declares the error type of one operation: the
//! subset of named errors the operation can return plus an `Unhandled` fallback.

/// Declare a named service error
///
/// `client` errors report [`ErrorKind::ClientError`](smithy_types::retry::ErrorKind) and are
/// never retried. `server` errors leave the decision to the response status.
///
/// ```rust
/// aws_http::modeled_error! {
///     /// The requested item is not acceptable
///     InvalidInput = "InvalidInput", client
/// }
///
/// let err = InvalidInput { message: Some("bad domain".to_string()) };
/// assert_eq!(err.to_string(), "InvalidInput: bad domain");
/// ```
#[macro_export]
macro_rules! modeled_error {
    (@kind client) => {
        Some(::smithy_types::retry::ErrorKind::ClientError)
    };
    (@kind server) => {
        None
    };
    (
        $(#[$meta:meta])*
        $name:ident = $code:literal, $fault:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            pub message: Option<String>,
        }

        impl $name {
            /// The error discriminator sent by the service
            pub const CODE: &'static str = $code;

            pub fn message(&self) -> Option<&str> {
                self.message.as_deref()
            }

            pub fn retryable_error_kind(&self) -> Option<::smithy_types::retry::ErrorKind> {
                $crate::modeled_error!(@kind $fault)
            }

            /// Build this error from the generic error of a response, keeping its message
            pub fn from_generic(err: &::smithy_types::Error) -> Self {
                $name {
                    message: err.message().map(|msg| msg.to_owned()),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($code)?;
                if let Some(message) = &self.message {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
        }

        impl ::std::error::Error for $name {}
    };
}

/// Declare the error type of an operation
///
/// Generates `$name { kind: $kind, meta }` and the `$kind` enum with one variant per listed
/// named error and an `Unhandled` variant. Responses whose discriminator is not listed, including
/// named errors of the service that this operation does not declare, become `Unhandled`.
#[macro_export]
macro_rules! operation_error {
    (
        $(#[$meta:meta])*
        pub struct $name:ident, $kind:ident {
            $(
                $variant:ident($ty:ty) => $predicate:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            pub kind: $kind,
            pub(crate) meta: ::smithy_types::Error,
        }

        #[derive(Debug)]
        pub enum $kind {
            $(
                $variant($ty),
            )*
            /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
            Unhandled(Box<dyn ::std::error::Error + Send + Sync + 'static>),
        }

        impl $name {
            pub fn new(kind: $kind, meta: ::smithy_types::Error) -> Self {
                Self { kind, meta }
            }

            pub fn unhandled(err: impl Into<Box<dyn ::std::error::Error + Send + Sync + 'static>>) -> Self {
                Self {
                    kind: $kind::Unhandled(err.into()),
                    meta: Default::default(),
                }
            }

            pub fn generic(err: ::smithy_types::Error) -> Self {
                Self {
                    meta: err.clone(),
                    kind: $kind::Unhandled(Box::new(err)),
                }
            }

            /// Error code, message and request id of the failed response
            pub fn meta(&self) -> &::smithy_types::Error {
                &self.meta
            }

            pub fn message(&self) -> Option<&str> {
                self.meta.message()
            }

            pub fn request_id(&self) -> Option<&str> {
                self.meta.request_id()
            }

            pub fn code(&self) -> Option<&str> {
                self.meta.code()
            }

            $(
                pub fn $predicate(&self) -> bool {
                    matches!(&self.kind, $kind::$variant(_))
                }
            )*

            pub fn is_unhandled(&self) -> bool {
                matches!(&self.kind, $kind::Unhandled(_))
            }
        }

        impl $crate::json::FromGenericError for $name {
            fn from_generic(err: ::smithy_types::Error) -> Self {
                let kind = match err.code() {
                    $(
                        Some(code) if code == <$ty>::CODE => $kind::$variant(<$ty>::from_generic(&err)),
                    )*
                    _ => return Self::generic(err),
                };
                Self { kind, meta: err }
            }
        }

        impl ::smithy_types::retry::ProvideErrorKind for $name {
            fn retryable_error_kind(&self) -> Option<::smithy_types::retry::ErrorKind> {
                match &self.kind {
                    $(
                        $kind::$variant(inner) => inner.retryable_error_kind(),
                    )*
                    $kind::Unhandled(_) => None,
                }
            }

            fn code(&self) -> Option<&str> {
                $name::code(self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match &self.kind {
                    $(
                        $kind::$variant(inner) => ::std::fmt::Display::fmt(inner, f),
                    )*
                    $kind::Unhandled(inner) => ::std::fmt::Display::fmt(inner, f),
                }
            }
        }

        impl ::std::error::Error for $name {
            fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
                match &self.kind {
                    $(
                        $kind::$variant(inner) => Some(inner),
                    )*
                    $kind::Unhandled(inner) => Some(inner.as_ref()),
                }
            }
        }
    };
}

#[cfg(test)]
mod test {
    use crate::json::FromGenericError;
    use smithy_types::retry::{ErrorKind, ProvideErrorKind};

    modeled_error! {
        DuplicateRequest = "DuplicateRequest", client
    }

    modeled_error! {
        InternalServiceException = "InternalServiceException", server
    }

    operation_error! {
        pub struct RegisterDomainError, RegisterDomainErrorKind {
            DuplicateRequest(DuplicateRequest) => is_duplicate_request,
            InternalServiceException(InternalServiceException) => is_internal_service_exception,
        }
    }

    fn generic(code: &str, message: &str) -> smithy_types::Error {
        smithy_types::Error::builder()
            .code(code)
            .message(message)
            .request_id("req-42")
            .build()
    }

    #[test]
    fn declared_errors_are_named() {
        let err = RegisterDomainError::from_generic(generic("DuplicateRequest", "already sent"));
        assert!(err.is_duplicate_request());
        assert!(!err.is_unhandled());
        assert_eq!(err.message(), Some("already sent"));
        assert_eq!(err.request_id(), Some("req-42"));
        assert_eq!(err.to_string(), "DuplicateRequest: already sent");
        assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ClientError));
        match &err.kind {
            RegisterDomainErrorKind::DuplicateRequest(inner) => {
                assert_eq!(inner.message(), Some("already sent"))
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn undeclared_codes_are_unhandled() {
        let err = RegisterDomainError::from_generic(generic("UnsupportedTLD", "no .invalid"));
        assert!(err.is_unhandled());
        assert_eq!(ProvideErrorKind::code(&err), Some("UnsupportedTLD"));
        assert_eq!(err.retryable_error_kind(), None);
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn server_faults_defer_to_status() {
        let err = RegisterDomainError::from_generic(generic("InternalServiceException", "oops"));
        assert!(err.is_internal_service_exception());
        assert_eq!(err.retryable_error_kind(), None);
    }
}
