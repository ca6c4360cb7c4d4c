/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_http::user_agent::AwsUserAgent;
use aws_hyper::test_connection::TestConnection;
use http::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::Uri;
use pretty_assertions::assert_eq;
use route53domains::error::{GetDomainSuggestionsErrorKind, ListDomainsError};
use protocol_test_helpers::{assert_ok, validate_body};
use route53domains::input::{
    CheckDomainAvailabilityInput, GetDomainSuggestionsInput, ListDomainsInput,
    RegisterDomainInput, RetrieveDomainAuthCodeInput,
};
use route53domains::model::{ContactDetail, ContactType, CountryCode, DomainAvailability};
use route53domains::{Client, Config, Credentials, RetryConfig, SdkError};
use smithy_http::body::SdkBody;
use std::time::{Duration, UNIX_EPOCH};

fn test_config() -> Config {
    Config::builder()
        .credentials_provider(Credentials::from_keys("access_key", "secret_key", None))
        .retry_config(RetryConfig::new().with_static_base(|| 0_f64))
        .build()
}

fn response(status: u16, body: &'static str) -> http::Response<&'static str> {
    http::Response::builder().status(status).body(body).unwrap()
}

fn any_request() -> http::Request<SdkBody> {
    http::Request::new(SdkBody::empty())
}

fn assert_body(conn: &TestConnection<&'static str>, idx: usize, expected: &str) {
    let requests = conn.requests();
    let body = requests[idx].actual.body().bytes().expect("buffered body");
    assert_ok(validate_body(body, expected));
}

#[test]
fn check_domain_availability_is_signed() {
    let expected = http::Request::builder()
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
    let conn = TestConnection::new(vec![(
        expected,
        response(200, r#"{"Availability":"UNAVAILABLE_PREMIUM"}"#),
    )]);
    let conf = test_config();
    let mut op = CheckDomainAvailabilityInput::builder()
        .domain_name("example.com")
        .build()
        .make_operation(&conf)
        .expect("valid input");
    op.config_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1613414417));
    op.config_mut().insert(AwsUserAgent::for_tests());

    let output = aws_hyper::Client::new(conn.clone())
        .call(op)
        .expect("request succeeds");
    assert_eq!(
        output.availability().map(|a| a.parse::<DomainAvailability>()),
        Some(Ok(DomainAvailability::UnavailablePremium))
    );
    conn.assert_requests_match(&[]);
}

#[test]
fn pagination_markers_are_opaque() {
    let conn = TestConnection::new(vec![
        (
            any_request(),
            response(
                200,
                r#"{"Domains":[{"DomainName":"example.com","AutoRenew":true,"Expiry":1.6409952E9}],"NextPageMarker":"AYADeM+1/page=2"}"#,
            ),
        ),
        (
            any_request(),
            response(200, r#"{"Domains":[{"DomainName":"example.org"}]}"#),
        ),
    ]);
    let client = Client::from_conf_conn(test_config(), conn.clone());

    let first = client
        .list_domains(ListDomainsInput::builder().max_items(1).build())
        .expect("first page");
    let marker = first.next_page_marker().cloned();
    assert_eq!(marker.as_deref(), Some("AYADeM+1/page=2"));
    let summary = &first.domains().expect("domains")[0];
    assert_eq!(summary.auto_renew(), Some(&true));
    assert_eq!(summary.expiry().map(|e| e.epoch_seconds()), Some(1_640_995_200));

    let mut next = ListDomainsInput::builder().max_items(1);
    next.set_marker(marker);
    let second = client.list_domains(next.build()).expect("second page");
    assert_eq!(second.next_page_marker(), None);

    assert_body(&conn, 0, r#"{"MaxItems":1}"#);
    assert_body(&conn, 1, r#"{"Marker":"AYADeM+1/page=2","MaxItems":1}"#);
}

#[test]
fn declared_errors_are_named() {
    let conn = TestConnection::new(vec![(
        any_request(),
        http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "6e5b9a4c-0000")
            .body(r#"{"__type":"UnsupportedTLD","message":"TLD .invalid is not supported"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_config(), conn.clone());
    let err = client
        .get_domain_suggestions(
            GetDomainSuggestionsInput::builder()
                .domain_name("example.invalid")
                .suggestion_count(5)
                .only_available(true)
                .build(),
        )
        .expect_err("service error");
    match err {
        SdkError::ServiceError { err, raw } => {
            assert_eq!(raw.status(), 400);
            assert!(err.is_unsupported_tld());
            assert_eq!(err.request_id(), Some("6e5b9a4c-0000"));
            match err.kind {
                GetDomainSuggestionsErrorKind::UnsupportedTld(inner) => {
                    assert_eq!(inner.message(), Some("TLD .invalid is not supported"))
                }
                other => panic!("unexpected error kind: {:?}", other),
            }
        }
        other => panic!("expected a service error, got {:?}", other),
    }
    assert_eq!(conn.requests().len(), 1);
}

#[test]
fn undeclared_errors_are_unhandled() {
    let conn = TestConnection::new(vec![(
        any_request(),
        http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "DuplicateRequest:http://internal.amazon.com/coral/")
            .body(r#"{"message":"in progress"}"#)
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(test_config(), conn.clone());
    let err: ListDomainsError = client
        .list_domains(ListDomainsInput::default())
        .expect_err("service error")
        .into_service_error()
        .expect("service error");
    assert!(err.is_unhandled());
    assert_eq!(err.code(), Some("DuplicateRequest"));
    assert_eq!(err.message(), Some("in progress"));
}

#[test]
fn invalid_input_is_never_sent() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::from_conf_conn(test_config(), conn.clone());
    let err = client
        .get_domain_suggestions(
            GetDomainSuggestionsInput::builder()
                .domain_name("example.com")
                .only_available(true)
                .build(),
        )
        .expect_err("SuggestionCount is required");
    assert!(err.is_local());
    match err {
        SdkError::ConstructionFailure(err) => {
            assert!(err.to_string().contains("SuggestionCount"), "{}", err)
        }
        other => panic!("expected a construction failure, got {:?}", other),
    }
    assert_eq!(conn.requests().len(), 0);
}

#[test]
fn server_errors_are_retried() {
    let conn = TestConnection::new(vec![
        (any_request(), response(500, r#"{"__type":"InternalFailure"}"#)),
        (any_request(), response(200, r#"{"AuthCode":"s3cr3t"}"#)),
    ]);
    let client = Client::from_conf_conn(test_config(), conn.clone());
    let output = client
        .retrieve_domain_auth_code(
            RetrieveDomainAuthCodeInput::builder()
                .domain_name("example.com")
                .build(),
        )
        .expect("second attempt succeeds");
    assert_eq!(output.auth_code().map(String::as_str), Some("s3cr3t"));
    assert!(!format!("{:?}", output).contains("s3cr3t"));
    assert_eq!(conn.requests().len(), 2);
}

fn registrant() -> ContactDetail {
    ContactDetail::builder()
        .first_name("Ada")
        .last_name("Lovelace")
        .contact_type(ContactType::Person)
        .country_code(CountryCode::Gb)
        .email("ada@example.com")
        .build()
}

#[test]
fn named_client_errors_ignore_retry_after() {
    let duplicate = || {
        http::Response::builder()
            .status(400)
            .header("x-amz-retry-after", "0")
            .body(r#"{"__type":"DuplicateRequest","message":"already submitted"}"#)
            .unwrap()
    };
    let conn = TestConnection::new(vec![
        (any_request(), duplicate()),
        (any_request(), duplicate()),
        (any_request(), duplicate()),
    ]);
    let client = Client::from_conf_conn(test_config(), conn.clone());
    let err = client
        .register_domain(
            RegisterDomainInput::builder()
                .domain_name("example.com")
                .duration_in_years(1)
                .admin_contact(registrant())
                .registrant_contact(registrant())
                .tech_contact(registrant())
                .build(),
        )
        .expect_err("duplicate request")
        .into_service_error()
        .expect("service error");
    assert!(err.is_duplicate_request());
    assert_eq!(conn.requests().len(), 1);
}

#[test]
fn backoff_is_bounded_for_many_attempts() {
    let unavailable = || response(503, r#"{"__type":"ServiceUnavailable"}"#);
    let conn = TestConnection::new((0..40).map(|_| (any_request(), unavailable())).collect());
    let conf = Config::builder()
        .credentials_provider(Credentials::from_keys("access_key", "secret_key", None))
        .retry_config(
            RetryConfig::new()
                .with_static_base(|| 0_f64)
                .with_max_attempts(40),
        )
        .build();
    let client = Client::from_conf_conn(conf, conn.clone());
    let err = client
        .list_domains(ListDomainsInput::default())
        .expect_err("every attempt fails");
    assert!(!err.is_local(), "{:?}", err);
    assert_eq!(conn.requests().len(), 40);
}

#[test]
fn endpoint_override() {
    let conn = TestConnection::new(vec![(any_request(), response(200, "{}"))]);
    let conf = Config::builder()
        .credentials_provider(Credentials::from_keys("access_key", "secret_key", None))
        .endpoint(Uri::from_static("http://localhost:8443"))
        .build();
    let client = Client::from_conf_conn(conf, conn.clone());
    client
        .list_domains(ListDomainsInput::default())
        .expect("empty body reads as an empty output");
    assert_eq!(
        conn.requests()[0].actual.uri(),
        &Uri::from_static("http://localhost:8443/")
    );
}
