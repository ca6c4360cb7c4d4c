/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Blocking client for AWS services
//!
//! [`Client`] runs an [`Operation`] through the standard middleware stages (endpoint
//! resolution, user agent, SigV4 signing), hands the signed request to an [`HttpConnector`],
//! parses the response and retries according to the operation's retry policy.

pub mod conn;
pub mod retry;
#[cfg(feature = "test-util")]
pub mod test_connection;

pub use crate::conn::{HttpConnector, Https, TimeoutConfig};
pub use crate::retry::RetryConfig;

use crate::retry::{RetryCtx, StandardRetryStrategy};
use aws_endpoint::AwsEndpointStage;
use aws_http::user_agent::UserAgentStage;
use aws_sig_auth::middleware::SigV4SigningStage;
use aws_sig_auth::signer::SigV4Signer;
use smithy_http::middleware::{load_response, MapRequest};
use smithy_http::operation;
use smithy_http::operation::Operation;
use smithy_http::response::{ParseFailure, ParseStrictResponse};
use smithy_http::result::{ConnectorError, SdkError, SdkSuccess};
use smithy_http::retry::ClassifyResponse;
use std::fmt;
use std::sync::{Arc, Mutex};

/// AWS Service Client
///
/// Hyper-based AWS Service Client. Most customers will want to construct a client with
/// [`Client::https`](Client::https), however, for testing purposes it may be useful to
/// construct a client with a [`TestConnection`](crate::test_connection::TestConnection).
///
/// Calls block the current thread until the final attempt completes. A client can be shared
/// between threads; every call on a client draws from the same retry token bucket.
///
/// The endpoint, credentials and region used for a call all come from the operation's property
/// bag. A client holds no per-service configuration.
pub struct Client<C = Https> {
    connector: C,
    retry_ctx: Arc<Mutex<RetryCtx>>,
    endpoint_stage: AwsEndpointStage,
    user_agent_stage: UserAgentStage,
    signing_stage: SigV4SigningStage,
}

impl<C> fmt::Debug for Client<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("retry_ctx", &self.retry_ctx)
            .finish()
    }
}

impl<C> Client<C> {
    pub fn new(connector: C) -> Self {
        Client {
            connector,
            retry_ctx: Arc::new(Mutex::new(RetryCtx::new(RetryConfig::default()))),
            endpoint_stage: AwsEndpointStage,
            user_agent_stage: UserAgentStage::new(),
            signing_stage: SigV4SigningStage::new(SigV4Signer::new()),
        }
    }

    /// Replace the retry configuration. This resets the retry token bucket.
    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_ctx = Arc::new(Mutex::new(RetryCtx::new(retry_config)));
        self
    }
}

impl Client<Https> {
    /// Construct an HTTPS client with the given timeouts
    pub fn https(timeouts: &TimeoutConfig) -> Result<Self, ConnectorError> {
        Ok(Client::new(Https::new(timeouts)?))
    }
}

impl<C> Client<C>
where
    C: HttpConnector,
{
    /// Dispatch this request to the network
    ///
    /// For ergonomics, this does not include the raw response for successful responses. To
    /// access the raw response use `call_raw`.
    pub fn call<H, R, T, E>(&self, input: Operation<H, R>) -> Result<T, SdkError<E>>
    where
        H: ParseStrictResponse<Output = Result<T, ParseFailure<E>>>,
        R: ClassifyResponse<SdkSuccess<T>, SdkError<E>>,
    {
        self.call_raw(input).map(|res| res.parsed)
    }

    /// Dispatch this request to the network
    ///
    /// The returned result contains the raw HTTP response which can be useful for debugging or
    /// implementing unsupported features.
    pub fn call_raw<H, R, T, E>(&self, input: Operation<H, R>) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        H: ParseStrictResponse<Output = Result<T, ParseFailure<E>>>,
        R: ClassifyResponse<SdkSuccess<T>, SdkError<E>>,
    {
        let (mut request, parts) = input.into_request_response();
        let span = tracing::debug_span!(
            "dispatch",
            operation = tracing::field::Empty,
            service = tracing::field::Empty
        );
        if let Some(metadata) = &parts.metadata {
            span.record("operation", &metadata.name());
            span.record("service", &metadata.service());
        }
        let _enter = span.enter();

        let mut strategy = StandardRetryStrategy::new(self.retry_ctx.clone());
        loop {
            // the body is fully buffered, so only a malformed request fails to clone
            let next_request = request.try_clone();
            let result = self.attempt(request, &parts.response_handler);
            let retry_kind = parts.retry_policy.classify(result.as_ref());
            match (next_request, strategy.should_retry(retry_kind)) {
                (Some(next_request), Some((next_strategy, backoff))) => {
                    tracing::debug!(
                        attempt = next_strategy.attempts() + 1,
                        backoff = ?backoff,
                        kind = ?retry_kind,
                        "retrying request"
                    );
                    std::thread::sleep(backoff);
                    request = next_request;
                    strategy = next_strategy;
                }
                _ => return result,
            }
        }
    }

    fn attempt<H, T, E>(
        &self,
        request: operation::Request,
        handler: &H,
    ) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        H: ParseStrictResponse<Output = Result<T, ParseFailure<E>>>,
    {
        let request = self
            .endpoint_stage
            .apply(request)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        let request = self
            .user_agent_stage
            .apply(request)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        let request = self
            .signing_stage
            .apply(request)
            .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        let (request, _config) = request.into_parts();
        tracing::trace!(request = ?request, "dispatching request");
        let response = self
            .connector
            .call(request)
            .map_err(SdkError::DispatchFailure)?;
        load_response(response, handler)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_connection::TestConnection;
    use crate::{Client, RetryConfig};
    use aws_endpoint::{set_endpoint_resolver, DefaultAwsEndpointResolver};
    use aws_http::json::{serialize_request, FromGenericError, JsonResponseHandler};
    use aws_http::user_agent::AwsUserAgent;
    use aws_http::AwsErrorRetryPolicy;
    use aws_sig_auth::signer::OperationSigningConfig;
    use aws_types::region::Region;
    use aws_types::{Credentials, SharedCredentialsProvider, SigningService};
    use serde::{Deserialize, Serialize};
    use smithy_http::body::SdkBody;
    use smithy_http::operation::{self, Metadata, Operation};
    use smithy_http::result::SdkError;
    use smithy_types::retry::{ErrorKind, ProvideErrorKind};
    use std::fmt;
    use std::sync::Arc;
    use std::time::{Duration, UNIX_EPOCH};

    #[derive(Debug, Default, Serialize)]
    struct ListDomainsInput {
        #[serde(rename = "MaxItems")]
        max_items: i32,
    }

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct ListDomainsOutput {
        #[serde(rename = "NextPageMarker", default)]
        next_page_marker: Option<String>,
    }

    #[derive(Debug)]
    struct ListDomainsError(smithy_types::Error);

    impl fmt::Display for ListDomainsError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            fmt::Display::fmt(&self.0, f)
        }
    }

    impl std::error::Error for ListDomainsError {}

    impl FromGenericError for ListDomainsError {
        fn from_generic(err: smithy_types::Error) -> Self {
            ListDomainsError(err)
        }
    }

    impl ProvideErrorKind for ListDomainsError {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            match self.0.code() {
                Some("InvalidInput") => Some(ErrorKind::ClientError),
                _ => None,
            }
        }

        fn code(&self) -> Option<&str> {
            self.0.code()
        }
    }

    type TestOperation =
        Operation<JsonResponseHandler<ListDomainsOutput, ListDomainsError>, AwsErrorRetryPolicy>;

    fn test_operation(region: Option<&'static str>) -> TestOperation {
        let request = serialize_request(
            "Route53Domains_v20140515",
            "ListDomains",
            &ListDomainsInput { max_items: 5 },
        )
        .expect("serializable input");
        let mut request = operation::Request::new(request);
        {
            let mut conf = request.config_mut();
            set_endpoint_resolver(
                &mut conf,
                Arc::new(DefaultAwsEndpointResolver::for_service("route53domains")),
            );
            if let Some(region) = region {
                conf.insert(Region::new(region));
            }
            conf.insert(SigningService::from_static("route53domains"));
            conf.insert(SharedCredentialsProvider::new(Credentials::from_keys(
                "access_key",
                "secret_key",
                None,
            )));
            conf.insert(OperationSigningConfig::default_config());
            conf.insert(UNIX_EPOCH + Duration::from_secs(1613414417));
            conf.insert(AwsUserAgent::for_tests());
        }
        Operation::new(request, JsonResponseHandler::new())
            .with_metadata(Metadata::new("ListDomains", "route53domains"))
            .with_retry_policy(AwsErrorRetryPolicy::new())
    }

    fn canned(status: u16, body: &'static str) -> (http::Request<SdkBody>, http::Response<&'static str>) {
        (
            http::Request::new(SdkBody::from(r#"{"MaxItems":5}"#)),
            http::Response::builder().status(status).body(body).unwrap(),
        )
    }

    fn client(conn: &TestConnection<&'static str>) -> Client<TestConnection<&'static str>> {
        Client::new(conn.clone()).with_retry_config(RetryConfig::new().with_static_base(|| 0_f64))
    }

    #[test]
    fn client_is_send_sync() {
        fn is_send_sync<T: Send + Sync>(_: &T) {}
        let conn = TestConnection::<&'static str>::new(vec![]);
        is_send_sync(&client(&conn));
    }

    #[test]
    fn server_errors_are_retried() {
        let conn = TestConnection::new(vec![
            canned(500, r#"{"__type": "InternalFailure"}"#),
            canned(200, r#"{"NextPageMarker": "abc"}"#),
        ]);
        let output = client(&conn)
            .call(test_operation(Some("us-east-1")))
            .expect("second attempt succeeds");
        assert_eq!(output.next_page_marker.as_deref(), Some("abc"));
        assert_eq!(conn.requests().len(), 2);
        for req in conn.requests().iter() {
            assert_eq!(
                req.actual.uri(),
                "https://route53domains.us-east-1.amazonaws.com/"
            );
            assert!(req.actual.headers().contains_key("authorization"));
        }
    }

    #[test]
    fn retries_stop_after_max_attempts() {
        let conn = TestConnection::new(vec![
            canned(503, "{}"),
            canned(503, "{}"),
            canned(503, "{}"),
            canned(200, "{}"),
        ]);
        let err = client(&conn)
            .call(test_operation(Some("us-east-1")))
            .expect_err("every attempt fails");
        assert!(matches!(err, SdkError::ServiceError { .. }));
        assert_eq!(conn.requests().len(), 3);
    }

    #[test]
    fn client_errors_are_not_retried() {
        let conn = TestConnection::new(vec![
            canned(400, r#"{"__type": "InvalidInput", "message": "bad marker"}"#),
            canned(200, "{}"),
        ]);
        let err = client(&conn)
            .call(test_operation(Some("us-east-1")))
            .expect_err("invalid input");
        let service_err = err.into_service_error().expect("service error");
        assert_eq!(service_err.0.message(), Some("bad marker"));
        assert_eq!(conn.requests().len(), 1);
    }

    #[test]
    fn construction_failures_are_not_dispatched() {
        let conn = TestConnection::new(vec![canned(200, "{}")]);
        let err = client(&conn)
            .call(test_operation(None))
            .expect_err("no region");
        assert!(matches!(err, SdkError::ConstructionFailure(_)));
        assert_eq!(conn.requests().len(), 0);
    }

    #[test]
    fn exhausted_connection_is_a_dispatch_failure() {
        let conn = TestConnection::<&'static str>::new(vec![]);
        let err = client(&conn)
            .call(test_operation(Some("us-east-1")))
            .expect_err("no canned responses");
        assert!(matches!(err, SdkError::DispatchFailure(_)));
    }

    #[test]
    fn unparseable_success_is_a_response_error() {
        let conn = TestConnection::new(vec![canned(200, "<html>")]);
        let err = client(&conn)
            .call_raw(test_operation(Some("us-east-1")))
            .expect_err("not json");
        match err {
            SdkError::ResponseError { raw, .. } => assert_eq!(raw.status(), 200),
            other => panic!("expected response error, got {:?}", other),
        }
        assert_eq!(conn.requests().len(), 1);
    }
}
