/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

#[macro_use]
pub mod error;
pub mod json;
pub mod user_agent;

use smithy_http::result::{SdkError, SdkSuccess};
use smithy_http::retry::ClassifyResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
use std::time::Duration;

/// A retry policy that models AWS error codes as outlined in the SEP
///
/// In order of priority:
/// 1. Dispatch failures that timed out or lost their connection are transient
/// 2. Modeled client errors are never retried
/// 3. The `x-amz-retry-after` header is checked
/// 4. The remaining modeled error retry modes are checked
/// 5. The code is checked against a predetermined list of throttling errors & transient error codes
/// 6. The status code is checked against a predetermined list of status codes
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct AwsErrorRetryPolicy;

const TRANSIENT_ERROR_STATUS_CODES: [u16; 1] = [408];
const THROTTLING_ERRORS: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ThrottledException",
    "RequestThrottledException",
    "TooManyRequestsException",
    "ProvisionedThroughputExceededException",
    "TransactionInProgressException",
    "RequestLimitExceeded",
    "BandwidthLimitExceeded",
    "LimitExceededException",
    "RequestThrottled",
    "SlowDown",
    "PriorRequestNotComplete",
    "EC2ThrottledException",
];
const TRANSIENT_ERRORS: &[&str] = &["RequestTimeout", "RequestTimeoutException"];

impl AwsErrorRetryPolicy {
    /// Create an `AwsErrorRetryPolicy` with the default set of known error & status codes
    pub fn new() -> Self {
        AwsErrorRetryPolicy
    }

    /// Classify a service error together with the response it arrived on
    pub fn classify_error<E, B>(&self, err: &E, response: &http::Response<B>) -> RetryKind
    where
        E: ProvideErrorKind,
    {
        let modeled_kind = err.retryable_error_kind();
        if modeled_kind == Some(ErrorKind::ClientError) {
            return RetryKind::NotRetryable;
        }
        if let Some(retry_after_delay) = response
            .headers()
            .get("x-amz-retry-after")
            .and_then(|header| header.to_str().ok())
            .and_then(|header| header.parse::<u64>().ok())
        {
            return RetryKind::Explicit(Duration::from_millis(retry_after_delay));
        }
        if let Some(kind) = modeled_kind {
            return RetryKind::Error(kind);
        }
        if let Some(code) = err.code() {
            if THROTTLING_ERRORS.contains(&code) {
                return RetryKind::Error(ErrorKind::ThrottlingError);
            }
            if TRANSIENT_ERRORS.contains(&code) {
                return RetryKind::Error(ErrorKind::TransientError);
            }
        };
        let status = response.status();
        if TRANSIENT_ERROR_STATUS_CODES.contains(&status.as_u16()) {
            return RetryKind::Error(ErrorKind::TransientError);
        };
        if status.is_server_error() {
            return RetryKind::Error(ErrorKind::ServerError);
        }
        RetryKind::NotRetryable
    }
}

impl Default for AwsErrorRetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> ClassifyResponse<SdkSuccess<T>, SdkError<E>> for AwsErrorRetryPolicy
where
    E: ProvideErrorKind,
{
    fn classify(&self, result: Result<&SdkSuccess<T>, &SdkError<E>>) -> RetryKind {
        match result {
            Ok(_) => RetryKind::Unnecessary,
            Err(SdkError::ServiceError { err, raw }) => self.classify_error(err, raw),
            Err(SdkError::DispatchFailure(err)) if err.is_timeout() || err.is_io() => {
                RetryKind::Error(ErrorKind::TransientError)
            }
            Err(SdkError::ResponseError { raw, .. }) if raw.status().is_server_error() => {
                RetryKind::Error(ErrorKind::ServerError)
            }
            Err(_) => RetryKind::NotRetryable,
        }
    }
}
