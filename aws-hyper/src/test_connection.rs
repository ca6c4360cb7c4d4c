/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::conn::HttpConnector;
use bytes::Bytes;
use http::header::{HeaderName, CONTENT_TYPE};
use smithy_http::body::SdkBody;
use smithy_http::result::ConnectorError;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard};

type ConnectVec<B> = Vec<(http::Request<SdkBody>, http::Response<B>)>;

#[derive(Debug)]
pub struct ValidateRequest {
    pub expected: http::Request<SdkBody>,
    pub actual: http::Request<SdkBody>,
}

impl ValidateRequest {
    /// Assert that the recorded request matches the expected one
    ///
    /// Every header on the expected request must be present with the same value, unless it is
    /// listed in `ignore_headers`. JSON bodies are compared semantically; other bodies must match
    /// byte for byte.
    pub fn assert_matches(&self, ignore_headers: Vec<HeaderName>) {
        let (actual, expected) = (&self.actual, &self.expected);
        for (name, value) in expected.headers() {
            if !ignore_headers.contains(name) {
                let actual_header = actual
                    .headers()
                    .get(name)
                    .unwrap_or_else(|| panic!("Header {:?} missing", name));
                assert_eq!(actual_header, value, "Header mismatch for {:?}", name);
            }
        }
        let actual_body = actual.body().bytes().unwrap_or(&[]);
        let expected_body = expected.body().bytes().unwrap_or(&[]);
        let is_json = expected
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .map(|ct| ct.contains("json"))
            .unwrap_or(false);
        match std::str::from_utf8(expected_body) {
            Ok(expected_str) if is_json => {
                protocol_test_helpers::assert_ok(protocol_test_helpers::validate_body(
                    actual_body,
                    expected_str,
                ))
            }
            _ => assert_eq!(actual_body, expected_body),
        }
        assert_eq!(actual.method(), expected.method());
        assert_eq!(actual.uri(), expected.uri());
    }
}

/// TestConnection for use with a [`aws_hyper::Client`](crate::Client)
///
/// A basic test connection. It will:
/// - Respond to requests with a preloaded series of responses
/// - Record requests for future examination
///
/// Once the canned responses run out every further request fails with a dispatch error.
///
/// Usage example:
/// ```rust
/// use aws_hyper::test_connection::TestConnection;
/// use smithy_http::body::SdkBody;
/// let events = vec![(
///    http::Request::new(SdkBody::from("request body")),
///    http::Response::builder()
///        .status(200)
///        .body("response body")
///        .unwrap(),
/// )];
/// let conn = TestConnection::new(events);
/// let client = aws_hyper::Client::new(conn);
/// ```
#[derive(Debug)]
pub struct TestConnection<B> {
    data: Arc<Mutex<ConnectVec<B>>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

// derived Clone would needlessly require `B: Clone`
impl<B> Clone for TestConnection<B> {
    fn clone(&self) -> Self {
        TestConnection {
            data: self.data.clone(),
            requests: self.requests.clone(),
        }
    }
}

impl<B> TestConnection<B> {
    pub fn new(mut data: ConnectVec<B>) -> Self {
        data.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(data)),
            requests: Default::default(),
        }
    }

    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        lock(&self.requests)
    }

    /// Assert that every canned response was used and every request matches its expectation
    #[track_caller]
    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        for req in self.requests().iter() {
            req.assert_matches(ignore_headers.to_vec())
        }
        let remaining = lock(&self.data).len();
        assert_eq!(remaining, 0, "{} canned responses were never used", remaining);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl<B> HttpConnector for TestConnection<B>
where
    B: Into<Bytes> + Send,
{
    fn call(&self, actual: http::Request<SdkBody>) -> Result<http::Response<Bytes>, ConnectorError> {
        let next = lock(&self.data).pop();
        match next {
            Some((expected, resp)) => {
                lock(&self.requests).push(ValidateRequest { expected, actual });
                Ok(resp.map(|body| body.into()))
            }
            None => Err(ConnectorError::other("No more data".into())),
        }
    }
}
