/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};

type BoxError = Box<dyn Error + Send + Sync>;

/// Successful Sdk Result
#[derive(Debug)]
pub struct SdkSuccess<O, B = Bytes> {
    pub raw: http::Response<B>,
    pub parsed: O,
}

/// Failing Sdk Result
///
/// `ConstructionFailure` and `DispatchFailure` are local failures: the service never saw the
/// request, or it is unknown whether it did. `ResponseError` and `ServiceError` carry the raw
/// response that was received.
#[derive(Debug)]
pub enum SdkError<E, B = Bytes> {
    /// The request failed during construction. It was not dispatched over the network.
    ConstructionFailure(BoxError),

    /// The request failed during dispatch. An HTTP response was not received. The request MAY
    /// have been sent.
    DispatchFailure(ConnectorError),

    /// A response was received but it was not parseable according the the protocol (for example
    /// the server hung up while the body was being read)
    ResponseError {
        raw: http::Response<B>,
        err: BoxError,
    },

    /// An error response was received from the service
    ServiceError { raw: http::Response<B>, err: E },
}

impl<E, B> SdkError<E, B> {
    /// The operation error, if the service responded with one
    pub fn service_error(&self) -> Option<&E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// Consumes the error, returning the operation error if the service responded with one
    pub fn into_service_error(self) -> Option<E> {
        match self {
            SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// `true` if the failure happened before a response was received
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            SdkError::ConstructionFailure(_) | SdkError::DispatchFailure(_)
        )
    }

    /// The raw HTTP response, if one was received
    pub fn raw_response(&self) -> Option<&http::Response<B>> {
        match self {
            SdkError::ResponseError { raw, .. } | SdkError::ServiceError { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

impl<E, B> Display for SdkError<E, B>
where
    E: Error,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => write!(f, "failed to construct request: {}", err),
            SdkError::DispatchFailure(err) => write!(f, "dispatch failure: {}", err),
            SdkError::ResponseError { err, .. } => write!(f, "response could not be parsed: {}", err),
            SdkError::ServiceError { err, .. } => write!(f, "service error: {}", err),
        }
    }
}

impl<E, B> Error for SdkError<E, B>
where
    E: Error + 'static,
    B: Debug,
{
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err) | SdkError::ResponseError { err, .. } => {
                Some(err.as_ref())
            }
            SdkError::DispatchFailure(err) => Some(err),
            SdkError::ServiceError { err, .. } => Some(err),
        }
    }
}

/// Broad categories of dispatch failures, used to decide whether they can be retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorErrorKind {
    /// A connect or read timeout elapsed
    Timeout,
    /// The connection could not be established or was dropped
    Io,
    /// The request could not be sent for another reason
    Other,
}

/// Error returned by an HTTP connector when no response was received
#[derive(Debug)]
pub struct ConnectorError {
    kind: ConnectorErrorKind,
    source: BoxError,
}

impl ConnectorError {
    pub fn timeout(source: BoxError) -> Self {
        ConnectorError {
            kind: ConnectorErrorKind::Timeout,
            source,
        }
    }

    pub fn io(source: BoxError) -> Self {
        ConnectorError {
            kind: ConnectorErrorKind::Io,
            source,
        }
    }

    pub fn other(source: BoxError) -> Self {
        ConnectorError {
            kind: ConnectorErrorKind::Other,
            source,
        }
    }

    pub fn kind(&self) -> ConnectorErrorKind {
        self.kind
    }

    pub fn is_timeout(&self) -> bool {
        self.kind == ConnectorErrorKind::Timeout
    }

    pub fn is_io(&self) -> bool {
        self.kind == ConnectorErrorKind::Io
    }
}

impl Display for ConnectorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            ConnectorErrorKind::Timeout => write!(f, "timeout: {}", self.source),
            ConnectorErrorKind::Io => write!(f, "io error: {}", self.source),
            ConnectorErrorKind::Other => write!(f, "{}", self.source),
        }
    }
}

impl Error for ConnectorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

#[cfg(test)]
mod test {
    use super::{ConnectorError, SdkError};
    use std::io;

    #[derive(Debug)]
    struct ModeledError;

    impl std::fmt::Display for ModeledError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "InvalidInput")
        }
    }

    impl std::error::Error for ModeledError {}

    #[test]
    fn local_failures() {
        let err: SdkError<ModeledError> = SdkError::DispatchFailure(ConnectorError::timeout(
            Box::new(io::Error::new(io::ErrorKind::TimedOut, "read timed out")),
        ));
        assert!(err.is_local());
        assert!(err.service_error().is_none());
        assert_eq!(err.to_string(), "dispatch failure: timeout: read timed out");
    }

    #[test]
    fn service_errors_expose_the_modeled_error() {
        let raw = http::Response::builder()
            .status(400)
            .body(bytes::Bytes::new())
            .unwrap();
        let err: SdkError<ModeledError> = SdkError::ServiceError {
            raw,
            err: ModeledError,
        };
        assert!(!err.is_local());
        assert_eq!(err.raw_response().map(|r| r.status().as_u16()), Some(400));
        assert_eq!(err.to_string(), "service error: InvalidInput");
    }
}
