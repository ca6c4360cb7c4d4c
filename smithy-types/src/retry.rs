/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! This module defines types that describe when to retry given a response.

use std::time::Duration;

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// This is a connection level error such as a socket timeout, socket connect error,
    /// tls negotiation timeout etc...
    ///
    /// TransientErrors are not modeled by services. They are determined based on specific
    /// error codes, response status codes, and failures reported by the connector.
    TransientError,

    /// An error where the server explicitly told the client to back off, such as a 429 or 503 HTTP error.
    ThrottlingError,

    /// Server error that isn't explicitly throttling but is considered by the client
    /// to be something that should be retried.
    ServerError,

    /// The request itself was rejected. Retrying it unchanged will not help.
    ClientError,
}

pub trait ProvideErrorKind {
    /// Returns the `ErrorKind` when the error is modeled as retryable
    ///
    /// If the error kind cannot be determined (eg. the error is unmodeled at the error kind depends
    /// on an HTTP status code, return `None`.
    fn retryable_error_kind(&self) -> Option<ErrorKind>;

    /// Returns the `code` for this error if one exists
    fn code(&self) -> Option<&str>;
}

/// `RetryKind` describes how a request MAY be retried for a given response
///
/// A `RetryKind` describes how a request MAY be retried; it does not mandate that it be retried.
/// Retry policies are free to ignore it (for example, when no retry tokens remain).
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum RetryKind {
    /// Retry due to a specific `ErrorKind`
    Error(ErrorKind),

    /// An Explicit retry (eg. from `x-amz-retry-after`).
    ///
    /// Note: The specified `Duration` is considered a suggestion and may be ignored. For example:
    /// - No retry tokens are available.
    /// - The retry duration exceeds that maximum backoff configured by the client.
    Explicit(Duration),

    /// The response was a failure that should not be retried
    NotRetryable,

    /// The response was successful, so no retry is necessary
    Unnecessary,
}

impl RetryKind {
    /// `true` when a policy is allowed to make another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, RetryKind::Error(_) | RetryKind::Explicit(_))
    }
}

#[cfg(test)]
mod test {
    use super::{ErrorKind, RetryKind};
    use std::time::Duration;

    #[test]
    fn retryable_kinds() {
        assert!(RetryKind::Error(ErrorKind::ThrottlingError).is_retryable());
        assert!(RetryKind::Explicit(Duration::from_millis(50)).is_retryable());
        assert!(!RetryKind::NotRetryable.is_retryable());
        assert!(!RetryKind::Unnecessary.is_retryable());
    }
}
