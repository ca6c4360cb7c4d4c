/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, Utc};
use http::header::{HeaderName, AUTHORIZATION, HOST, USER_AGENT};
use http::{HeaderMap, Method, Uri};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use sha2::{Digest, Sha256};
use std::borrow::Cow;
use std::fmt;

use crate::signer::SigningError;

pub(crate) const HMAC_256: &str = "AWS4-HMAC-SHA256";
pub(crate) const X_AMZ_DATE: &str = "x-amz-date";
pub(crate) const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";
pub(crate) const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";
const X_AMZN_TRACE_ID: &str = "x-amzn-trace-id";

/// Characters that must be percent encoded in canonical query strings: everything except
/// `A-Z a-z 0-9 - _ . ~`
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// HashedPayload = Lowercase(HexEncode(Hash(requestPayload)))
pub(crate) fn sha256_hex_string(bytes: impl AsRef<[u8]>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

pub(crate) fn format_date(time: &DateTime<Utc>) -> String {
    time.format("%Y%m%d").to_string()
}

pub(crate) fn format_date_time(time: &DateTime<Utc>) -> String {
    time.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Headers that are never part of the signature
fn is_unsigned_header(name: &HeaderName) -> bool {
    name == AUTHORIZATION || name == USER_AGENT || name.as_str() == X_AMZN_TRACE_ID
}

#[derive(Debug, PartialEq)]
pub(crate) struct CanonicalRequest<'a> {
    method: &'a Method,
    path: Cow<'a, str>,
    params: Option<String>,
    headers: Vec<(String, String)>,
    pub(crate) signed_headers: String,
    pub(crate) content_sha256: String,
}

impl<'a> CanonicalRequest<'a> {
    /// Construct a canonical request
    ///
    /// `headers` must already contain every header that will be sent and signed, including
    /// `x-amz-date` and the security token. `host` is derived from the URI when absent.
    pub(crate) fn new(
        method: &'a Method,
        uri: &'a Uri,
        headers: &HeaderMap,
        payload: &[u8],
        double_uri_encode: bool,
        content_sha256: Option<String>,
    ) -> Result<Self, SigningError> {
        let path = match uri.path() {
            "" => Cow::Borrowed("/"),
            path if double_uri_encode => Cow::Owned(path.replace('%', "%25")),
            path => Cow::Borrowed(path),
        };
        let mut canonical: Vec<(String, String)> = Vec::with_capacity(headers.keys_len() + 1);
        if !headers.contains_key(HOST) {
            let authority = uri.authority().ok_or(SigningError::MissingAuthority)?;
            canonical.push((HOST.as_str().to_string(), authority.as_str().to_string()));
        }
        for name in headers.keys() {
            if is_unsigned_header(name) {
                continue;
            }
            let mut values = Vec::new();
            for value in headers.get_all(name) {
                let value = value
                    .to_str()
                    .map_err(|_| SigningError::InvalidHeaderValue(name.to_string()))?;
                values.push(normalize_header_value(value));
            }
            canonical.push((name.as_str().to_string(), values.join(",")));
        }
        canonical.sort();
        let signed_headers = canonical
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(";");
        Ok(CanonicalRequest {
            method,
            path,
            params: canonical_query(uri),
            headers: canonical,
            signed_headers,
            content_sha256: content_sha256.unwrap_or_else(|| sha256_hex_string(payload)),
        })
    }
}

/// Trim the value and collapse runs of spaces into a single space
fn normalize_header_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut last_was_space = false;
    for c in value.trim().chars() {
        if c == ' ' {
            if !last_was_space {
                out.push(c);
            }
            last_was_space = true;
        } else {
            out.push(c);
            last_was_space = false;
        }
    }
    out
}

fn canonical_query(uri: &Uri) -> Option<String> {
    let query = uri.query()?;
    let mut params: Vec<(Cow<'_, str>, Cow<'_, str>)> =
        form_urlencoded::parse(query.as_bytes()).collect();
    // Sort by param name, and then by param value
    params.sort();
    let encoded = params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                percent_encoding::utf8_percent_encode(key, QUERY_ENCODE_SET),
                percent_encoding::utf8_percent_encode(value, QUERY_ENCODE_SET)
            )
        })
        .collect::<Vec<_>>();
    Some(encoded.join("&"))
}

impl<'a> fmt::Display for CanonicalRequest<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.path)?;
        writeln!(f, "{}", self.params.as_deref().unwrap_or(""))?;
        for (name, value) in &self.headers {
            writeln!(f, "{}:{}", name, value)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.signed_headers)?;
        write!(f, "{}", self.content_sha256)
    }
}

#[derive(PartialEq, Debug, Clone)]
pub(crate) struct Scope<'a> {
    pub(crate) date: String,
    pub(crate) region: &'a str,
    pub(crate) service: &'a str,
}

impl<'a> fmt::Display for Scope<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/aws4_request",
            self.date, self.region, self.service
        )
    }
}

#[derive(PartialEq, Debug)]
pub(crate) struct StringToSign<'a> {
    pub(crate) scope: Scope<'a>,
    date_time: String,
    hashed_creq: String,
}

impl<'a> StringToSign<'a> {
    pub(crate) fn new(
        date: &DateTime<Utc>,
        region: &'a str,
        service: &'a str,
        creq: &CanonicalRequest<'_>,
    ) -> Self {
        StringToSign {
            scope: Scope {
                date: format_date(date),
                region,
                service,
            },
            date_time: format_date_time(date),
            hashed_creq: sha256_hex_string(creq.to_string()),
        }
    }
}

impl<'a> fmt::Display for StringToSign<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}",
            HMAC_256, self.date_time, self.scope, self.hashed_creq
        )
    }
}
