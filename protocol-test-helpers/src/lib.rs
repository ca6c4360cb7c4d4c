/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use assert_json_diff::{assert_json_matches_no_panic, CompareMode, Config};
use http::Request;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },
    #[error("forbidden header present: `{forbidden}`")]
    ForbiddenHeader { forbidden: String },
    #[error("body did not match. expected `{expected}`, found `{found}`. {hint}")]
    BodyDidNotMatch {
        expected: String,
        found: String,
        hint: String,
    },
    #[error("expected body to be valid {expected} but instead: {found}")]
    InvalidBodyFormat { expected: String, found: String },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        panic!("Protocol test failed: {}", e);
    }
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        // Header lists are compared in their comma-delimited form
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| hv.to_str().unwrap_or("<non-utf8 header value>"))
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

pub fn require_headers<B>(
    request: &Request<B>,
    required_headers: &[&str],
) -> Result<(), ProtocolTestFailure> {
    for key in required_headers {
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
    }
    Ok(())
}

pub fn forbid_headers<B>(
    request: &Request<B>,
    forbidden_headers: &[&str],
) -> Result<(), ProtocolTestFailure> {
    for key in forbidden_headers {
        if request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: key.to_string(),
            });
        }
    }
    Ok(())
}

/// Compare two JSON documents for semantic equality: key order and whitespace are ignored
pub fn validate_body<T: AsRef<[u8]>>(
    actual_body: T,
    expected_body: &str,
) -> Result<(), ProtocolTestFailure> {
    let actual_str = std::str::from_utf8(actual_body.as_ref()).map_err(|e| {
        ProtocolTestFailure::InvalidBodyFormat {
            expected: "utf-8".to_owned(),
            found: e.to_string(),
        }
    })?;
    let actual_json: serde_json::Value =
        serde_json::from_str(actual_str).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: e.to_string() + actual_str,
        })?;
    let expected_json: serde_json::Value =
        serde_json::from_str(expected_body).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: e.to_string() + expected_body,
        })?;
    let config = Config::new(CompareMode::Strict);
    assert_json_matches_no_panic(&actual_json, &expected_json, config).map_err(|hint| {
        ProtocolTestFailure::BodyDidNotMatch {
            expected: expected_body.to_owned(),
            found: actual_str.to_owned(),
            hint,
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::{forbid_headers, require_headers, validate_body, validate_headers, ProtocolTestFailure};
    use http::Request;

    #[test]
    fn test_validate_headers() {
        let request = Request::builder()
            .uri("/")
            .header("X-Foo", "foo")
            .header("X-Foo-List", "foo")
            .header("X-Foo-List", "bar")
            .header("X-Inline", "inline, other")
            .body(())
            .unwrap();

        validate_headers(&request, &[("X-Foo", "foo")]).expect("header present");
        validate_headers(&request, &[("X-Foo", "Foo")]).expect_err("case sensitive");
        validate_headers(&request, &[("x-foo-list", "foo, bar")]).expect("list concat");
        validate_headers(&request, &[("X-Foo-List", "foo")])
            .expect_err("all list members must be specified");
        validate_headers(&request, &[("X-Inline", "inline, other")])
            .expect("inline header lists also work");
        assert_eq!(
            validate_headers(&request, &[("missing", "value")]),
            Err(ProtocolTestFailure::MissingHeader {
                expected: "missing".to_owned()
            })
        );
    }

    #[test]
    fn test_required_and_forbidden_headers() {
        let request = Request::builder()
            .uri("/")
            .header("Authorization", "AWS4-HMAC-SHA256 ...")
            .body(())
            .unwrap();
        require_headers(&request, &["authorization"]).expect("header present");
        require_headers(&request, &["x-amz-security-token"]).expect_err("header missing");
        forbid_headers(&request, &["x-amz-security-token"]).expect("header absent");
        assert_eq!(
            forbid_headers(&request, &["authorization"]),
            Err(ProtocolTestFailure::ForbiddenHeader {
                forbidden: "authorization".to_owned()
            })
        );
    }

    #[test]
    fn test_validate_json_body() {
        let expected = r#"{"DomainName": "example.com", "Nameservers": [{"Name": "ns1"}]}"#;
        let actual = br#"{"Nameservers":[{"Name":"ns1"}],"DomainName":"example.com"}"#;
        validate_body(&actual[..], expected).expect("inputs matched as JSON");

        let reordered = br#"{"Nameservers":[{"Name":"ns2"}],"DomainName":"example.com"}"#;
        validate_body(&reordered[..], expected).expect_err("list contents differ");

        validate_body(b"not json", expected).expect_err("body is not JSON");
    }
}
