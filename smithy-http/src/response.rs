/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;

/// `ParseStrictResponse` parses structured data from a fully loaded HTTP response.
///
/// Every transport in this SDK reads the complete response body before handing it back, so
/// parsing is pure and synchronous. `Output` is unconstrained; for request/response style
/// operations it is typically `Result<GetDomainDetailOutput, ParseFailure<GetDomainDetailError>>`.
pub trait ParseStrictResponse {
    type Output;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why a response could not be turned into an operation output
#[derive(Debug)]
pub enum ParseFailure<E> {
    /// The service responded with an error. `E` is the operation error it maps to.
    Service(E),
    /// The response did not conform to the protocol, eg. a success body that is not valid JSON
    Unparseable(BoxError),
}
