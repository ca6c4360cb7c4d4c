/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_endpoint::{set_endpoint_resolver, DefaultAwsEndpointResolver};
use aws_http::json::{serialize_request, FromGenericError, JsonResponseHandler};
use aws_http::user_agent::AwsUserAgent;
use aws_http::AwsErrorRetryPolicy;
use aws_hyper::test_connection::{TestConnection, ValidateRequest};
use aws_hyper::Client;
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::region::Region;
use aws_types::{Credentials, SharedCredentialsProvider, SigningService};
use http::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::Uri;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use smithy_http::body::SdkBody;
use smithy_http::operation;
use smithy_http::operation::{Metadata, Operation};
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

#[derive(Debug, Deserialize, PartialEq)]
struct CheckDomainAvailabilityOutput {
    #[serde(rename = "Availability")]
    availability: Option<String>,
}

#[derive(Debug)]
struct CheckDomainAvailabilityError(smithy_types::Error);

impl FromGenericError for CheckDomainAvailabilityError {
    fn from_generic(err: smithy_types::Error) -> Self {
        CheckDomainAvailabilityError(err)
    }
}

impl ProvideErrorKind for CheckDomainAvailabilityError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        self.0.code()
    }
}

fn test_operation() -> Operation<
    JsonResponseHandler<CheckDomainAvailabilityOutput, CheckDomainAvailabilityError>,
    AwsErrorRetryPolicy,
> {
    let request = serialize_request(
        "Route53Domains_v20140515",
        "CheckDomainAvailability",
        &serde_json::json!({ "DomainName": "example.com" }),
    )
    .expect("valid input");
    let req = operation::Request::new(request)
        .augment(|req, conf| {
            set_endpoint_resolver(
                conf,
                Arc::new(DefaultAwsEndpointResolver::for_service("route53domains")),
            );
            conf.insert(SharedCredentialsProvider::new(Credentials::from_keys(
                "access_key",
                "secret_key",
                None,
            )));
            conf.insert(Region::new("us-east-1"));
            conf.insert(SigningService::from_static("route53domains"));
            conf.insert(OperationSigningConfig::default_config());
            conf.insert(UNIX_EPOCH + Duration::from_secs(1613414417));
            conf.insert(AwsUserAgent::for_tests());
            Result::<_, std::convert::Infallible>::Ok(req)
        })
        .unwrap();
    Operation::new(req, JsonResponseHandler::new())
        .with_metadata(Metadata::new("CheckDomainAvailability", "route53domains"))
        .with_retry_policy(AwsErrorRetryPolicy::new())
}

#[test]
fn e2e_test() {
    let expected_req = http::Request::builder()
        .header(USER_AGENT, "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
        .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0")
        .header(AUTHORIZATION, "AWS4-HMAC-SHA256 Credential=access_key/20210215/us-east-1/route53domains/aws4_request, SignedHeaders=content-type;host;x-amz-date;x-amz-target;x-amz-user-agent, Signature=83e223fe7e7f587a763b175eba2aa8ec6577bda286cbe72c8581eac59cc87514")
        .header("x-amz-date", "20210215T184017Z")
        .header("x-amz-target", "Route53Domains_v20140515.CheckDomainAvailability")
        .header(CONTENT_TYPE, "application/x-amz-json-1.1")
        .method("POST")
        .uri(Uri::from_static("https://route53domains.us-east-1.amazonaws.com/"))
        .body(SdkBody::from(r#"{"DomainName":"example.com"}"#))
        .unwrap();
    let events = vec![(
        expected_req,
        http::Response::builder()
            .status(200)
            .body(r#"{"Availability":"AVAILABLE"}"#)
            .unwrap(),
    )];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone());
    let resp = client.call(test_operation());
    let resp = resp.expect("successful operation");
    assert_eq!(
        resp,
        CheckDomainAvailabilityOutput {
            availability: Some("AVAILABLE".to_string())
        }
    );

    assert_eq!(conn.requests().len(), 1);
    let ValidateRequest { expected, actual } = &conn.requests()[0];
    assert_eq!(actual.headers(), expected.headers());
    assert_eq!(actual.body().bytes(), expected.body().bytes());
    assert_eq!(actual.uri(), expected.uri());
}

#[test]
fn throttled_requests_are_resigned() {
    let throttled = || {
        http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "ThrottlingException")
            .body("{}")
            .unwrap()
    };
    let conn = TestConnection::new(vec![
        (http::Request::new(SdkBody::empty()), throttled()),
        (
            http::Request::new(SdkBody::empty()),
            http::Response::builder()
                .status(200)
                .body(r#"{"Availability":"UNAVAILABLE"}"#)
                .unwrap(),
        ),
    ]);
    let client = Client::new(conn.clone())
        .with_retry_config(aws_hyper::RetryConfig::new().with_static_base(|| 0_f64));
    let resp = client.call(test_operation()).expect("retry succeeds");
    assert_eq!(resp.availability.as_deref(), Some("UNAVAILABLE"));

    let requests = conn.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].actual.headers()[AUTHORIZATION],
        requests[1].actual.headers()[AUTHORIZATION]
    );
    assert_eq!(requests[1].actual.headers().get_all(AUTHORIZATION).iter().count(), 1);
}
