/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The awsJson 1.1 protocol
//!
//! Every operation is a `POST /` whose body is the JSON form of the input. The operation is
//! selected by the `X-Amz-Target` header. Errors are discriminated by the `x-amzn-errortype`
//! header, falling back to the `__type` and `code` members of the body.

use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use crate::AwsErrorRetryPolicy;
use smithy_http::body::SdkBody;
use smithy_http::operation::{self, BuildError, Metadata, Operation};
use smithy_http::response::{ParseFailure, ParseStrictResponse};
use smithy_types::constraint::Validate;
use smithy_types::retry::ProvideErrorKind;
use std::fmt;
use std::marker::PhantomData;
use thiserror::Error;

pub const CONTENT_TYPE_AWS_JSON_1_1: &str = "application/x-amz-json-1.1";
pub const X_AMZ_TARGET: &str = "x-amz-target";
const X_AMZN_ERROR_TYPE: &str = "x-amzn-errortype";
const X_AMZN_REQUEST_ID: &str = "x-amzn-requestid";

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("input could not be serialized to JSON")]
    Json(#[from] serde_json::Error),
    #[error("failed to build HTTP request")]
    Http(#[from] http::Error),
}

/// Build the HTTP request for an awsJson 1.1 operation
///
/// The URI is relative; the endpoint stage fills in the scheme and authority.
pub fn serialize_request<T>(
    target_prefix: &str,
    operation_name: &str,
    input: &T,
) -> Result<http::Request<SdkBody>, SerializationError>
where
    T: Serialize,
{
    let body = serde_json::to_vec(input)?;
    let request = http::Request::builder()
        .method("POST")
        .uri("/")
        .header(
            CONTENT_TYPE,
            HeaderValue::from_static(CONTENT_TYPE_AWS_JSON_1_1),
        )
        .header(X_AMZ_TARGET, format!("{}.{}", target_prefix, operation_name))
        .body(SdkBody::from(body))?;
    Ok(request)
}

/// Reduce a raw error type to the bare error name
///
/// A trailing URL beginning with `:` is removed, then any namespace ending in `#`:
/// `aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/` becomes `FooError`.
pub fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };
    match error_code.rfind('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn body_string<'a>(body: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| body.get(*key).and_then(Value::as_str))
}

/// Build the generic error for a failed awsJson 1.1 response
///
/// Bodies that are not JSON (eg. an HTML page from a load balancer) still yield an error
/// carrying the header discriminator and the request id.
pub fn parse_generic_error(response: &http::Response<Bytes>) -> smithy_types::Error {
    let body: Value = serde_json::from_slice(response.body()).unwrap_or(Value::Null);
    let headers = response.headers();
    let header_code = headers
        .get(X_AMZN_ERROR_TYPE)
        .and_then(|v| v.to_str().ok());
    let code = header_code.or_else(|| body_string(&body, &["__type", "code"]));

    let mut err = smithy_types::Error::builder();
    if let Some(code) = code {
        err.code(sanitize_error_code(code));
    }
    if let Some(message) = body_string(&body, &["message", "Message"]) {
        err.message(message);
    }
    if let Some(request_id) = headers
        .get(X_AMZN_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
    {
        err.request_id(request_id);
    }
    err.build()
}

/// Operation errors that can be built from the generic error of a failed response
///
/// Implementations match [`code`](smithy_types::Error::code) against the errors the operation
/// declares and fall back to an unhandled variant that keeps the generic error.
pub trait FromGenericError: Sized {
    fn from_generic(err: smithy_types::Error) -> Self;
}

/// An input shape together with the operation it invokes
///
/// Every awsJson 1.1 operation is fully described by its name and its three shapes, so one
/// generic [`make_operation`] serves them all.
pub trait JsonOperation: Serialize + Validate {
    /// The operation name, as sent in `X-Amz-Target`
    const NAME: &'static str;
    type Output: DeserializeOwned;
    type Error: FromGenericError + ProvideErrorKind;
}

/// The operation type produced by [`make_operation`] for input `I`
pub type JsonOperationFor<I> = Operation<
    JsonResponseHandler<<I as JsonOperation>::Output, <I as JsonOperation>::Error>,
    AwsErrorRetryPolicy,
>;

/// Validate and serialize `input` into an operation
///
/// The returned operation carries its metadata and the AWS retry policy. The caller is
/// responsible for populating the property bag (region, credentials, endpoint resolver...).
pub fn make_operation<I>(
    target_prefix: &str,
    service: &'static str,
    input: &I,
) -> Result<JsonOperationFor<I>, BuildError>
where
    I: JsonOperation,
{
    input.validate()?;
    let request = serialize_request(target_prefix, I::NAME, input)
        .map_err(|err| BuildError::SerializationError(err.into()))?;
    Ok(
        Operation::new(operation::Request::new(request), JsonResponseHandler::new())
            .with_metadata(Metadata::new(I::NAME, service))
            .with_retry_policy(AwsErrorRetryPolicy::new()),
    )
}

/// Response handler for awsJson 1.1 operations
///
/// 2xx responses are deserialized into `O` (an empty body reads as `{}`); every other
/// response becomes `E`.
pub struct JsonResponseHandler<O, E> {
    _phantom: PhantomData<fn() -> (O, E)>,
}

impl<O, E> JsonResponseHandler<O, E> {
    pub fn new() -> Self {
        JsonResponseHandler {
            _phantom: PhantomData,
        }
    }
}

impl<O, E> Default for JsonResponseHandler<O, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, E> Clone for JsonResponseHandler<O, E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<O, E> fmt::Debug for JsonResponseHandler<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JsonResponseHandler")
    }
}

impl<O, E> ParseStrictResponse for JsonResponseHandler<O, E>
where
    O: DeserializeOwned,
    E: FromGenericError,
{
    type Output = Result<O, ParseFailure<E>>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            let generic = parse_generic_error(response);
            tracing::debug!(code = ?generic.code(), status = %response.status(), "service returned an error");
            return Err(ParseFailure::Service(E::from_generic(generic)));
        }
        let body = response.body();
        let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            body
        };
        serde_json::from_slice(body).map_err(|err| ParseFailure::Unparseable(err.into()))
    }
}

#[cfg(test)]
mod test {
    use super::{
        make_operation, parse_generic_error, sanitize_error_code, serialize_request,
        FromGenericError, JsonOperation, JsonResponseHandler,
    };
    use smithy_http::operation::BuildError;
    use smithy_types::constraint::{range, Validate, ValidationError};
    use smithy_types::retry::{ErrorKind, ProvideErrorKind};
    use bytes::Bytes;
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};
    use smithy_http::response::{ParseFailure, ParseStrictResponse};

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    struct ListDomainsIo {
        #[serde(rename = "Marker", skip_serializing_if = "Option::is_none", default)]
        marker: Option<String>,
        #[serde(rename = "MaxItems", skip_serializing_if = "Option::is_none", default)]
        max_items: Option<i32>,
    }

    #[derive(Debug, PartialEq)]
    struct GenericOnly(smithy_types::Error);

    impl FromGenericError for GenericOnly {
        fn from_generic(err: smithy_types::Error) -> Self {
            GenericOnly(err)
        }
    }

    impl ProvideErrorKind for GenericOnly {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            self.0.code()
        }
    }

    impl Validate for ListDomainsIo {
        fn validate(&self) -> Result<(), ValidationError> {
            range(&self.max_items, 1, 100, "MaxItems")
        }
    }

    impl JsonOperation for ListDomainsIo {
        const NAME: &'static str = "ListDomains";
        type Output = ListDomainsIo;
        type Error = GenericOnly;
    }

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn request_has_target_and_content_type() {
        let input = ListDomainsIo {
            marker: None,
            max_items: Some(20),
        };
        let request =
            serialize_request("Route53Domains_v20140515", "ListDomains", &input).unwrap();
        assert_eq!(request.method(), "POST");
        assert_eq!(request.uri(), "/");
        assert_eq!(
            request.headers()["x-amz-target"],
            "Route53Domains_v20140515.ListDomains"
        );
        assert_eq!(
            request.headers()["content-type"],
            "application/x-amz-json-1.1"
        );
        assert_eq!(request.body().bytes(), Some(&br#"{"MaxItems":20}"#[..]));
    }

    #[test]
    fn empty_input_serializes_to_empty_object() {
        let request =
            serialize_request("AnyScaleFrontendService", "Noop", &ListDomainsIo::default())
                .unwrap();
        assert_eq!(request.body().bytes(), Some(&b"{}"[..]));
    }

    #[test]
    fn sanitize_namespace_and_uri() {
        assert_eq!(sanitize_error_code("FooError"), "FooError");
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
        assert_eq!(
            sanitize_error_code(
                "aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"
            ),
            "FooError"
        );
        assert_eq!(
            sanitize_error_code("com.amazon#nested#FooError"),
            "FooError"
        );
    }

    #[test]
    fn error_type_header_takes_priority() {
        let response = http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "InvalidInput:http://internal.amazon.com/")
            .header("x-amzn-requestid", "req-1")
            .body(Bytes::from_static(
                br#"{"__type": "com.amazonaws.route53domains#DuplicateRequest", "message": "hello"}"#,
            ))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("InvalidInput"));
        assert_eq!(err.message(), Some("hello"));
        assert_eq!(err.request_id(), Some("req-1"));
    }

    #[test]
    fn body_type_then_code() {
        let err = parse_generic_error(&response(
            400,
            r#"{"__type": "com.amazonaws.route53domains#DuplicateRequest", "Message": "dup"}"#,
        ));
        assert_eq!(err.code(), Some("DuplicateRequest"));
        assert_eq!(err.message(), Some("dup"));

        let err = parse_generic_error(&response(400, r#"{"code": "ValidationException"}"#));
        assert_eq!(err.code(), Some("ValidationException"));
        assert_eq!(err.message(), None);
    }

    #[test]
    fn non_json_error_body() {
        let err = parse_generic_error(&response(503, "<html>Service Unavailable</html>"));
        assert_eq!(err.code(), None);
        assert_eq!(err.message(), None);
    }

    #[test]
    fn handler_parses_success() {
        let handler = JsonResponseHandler::<ListDomainsIo, GenericOnly>::new();
        let parsed = handler
            .parse(&response(200, r#"{"Marker": "abc", "Unknown": [1, 2]}"#))
            .expect("valid response");
        assert_eq!(parsed.marker.as_deref(), Some("abc"));
        assert_eq!(parsed.max_items, None);
    }

    #[test]
    fn handler_treats_empty_body_as_empty_object() {
        let handler = JsonResponseHandler::<ListDomainsIo, GenericOnly>::new();
        let parsed = handler.parse(&response(200, "")).expect("valid response");
        assert_eq!(parsed, ListDomainsIo::default());
    }

    #[test]
    fn handler_maps_errors() {
        let handler = JsonResponseHandler::<ListDomainsIo, GenericOnly>::new();
        match handler.parse(&response(400, r#"{"__type": "InvalidInput"}"#)) {
            Err(ParseFailure::Service(GenericOnly(err))) => {
                assert_eq!(err.code(), Some("InvalidInput"))
            }
            other => panic!("unexpected: {:?}", other),
        }
        match handler.parse(&response(200, "not json")) {
            Err(ParseFailure::Unparseable(_)) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn make_operation_validates_then_serializes() {
        let input = ListDomainsIo {
            marker: Some("abc".to_string()),
            max_items: Some(10),
        };
        let op = make_operation("Route53Domains_v20140515", "route53domains", &input)
            .expect("valid input");
        let metadata = op.metadata().expect("metadata is set");
        assert_eq!(metadata.name(), "ListDomains");
        assert_eq!(metadata.service(), "route53domains");
        assert_eq!(
            op.request().http().headers()["x-amz-target"],
            "Route53Domains_v20140515.ListDomains"
        );

        let invalid = ListDomainsIo {
            marker: None,
            max_items: Some(0),
        };
        match make_operation("Route53Domains_v20140515", "route53domains", &invalid) {
            Err(BuildError::InvalidField(err)) => assert_eq!(err.field(), "MaxItems"),
            other => panic!("unexpected: {:?}", other.map(|_| ())),
        }
    }
}
