/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use std::error::Error;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for dispatching all HTTP Requests. Bodies are always fully buffered:
/// every operation in this SDK serializes its input to a single JSON document before dispatch.
/// Because the data is already in memory, a body can be cloned for retries and read for signing.
#[derive(Clone, PartialEq, Eq)]
pub struct SdkBody {
    inner: Option<Bytes>,
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody { inner: None }
    }

    /// The contents of this body, empty if the body was empty or already consumed by the transport
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.inner {
            Some(bytes) => Some(bytes.as_ref()),
            None => Some(&[]),
        }
    }

    pub fn try_clone(&self) -> Option<Self> {
        Some(self.clone())
    }

    pub fn content_length(&self) -> u64 {
        self.inner.as_ref().map(|b| b.len() as u64).unwrap_or(0)
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BodyError>>> {
        match self.inner.take() {
            Some(bytes) if !bytes.is_empty() => Poll::Ready(Some(Ok(bytes))),
            _ => Poll::Ready(None),
        }
    }
}

impl fmt::Debug for SdkBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(bytes) => f.debug_tuple("SdkBody").field(bytes).finish(),
            None => f.write_str("SdkBody(empty)"),
        }
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::from(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::from(Bytes::from(s))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody { inner: Some(bytes) }
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        self.inner.as_ref().map(|b| b.is_empty()).unwrap_or(true)
    }

    fn size_hint(&self) -> http_body::SizeHint {
        http_body::SizeHint::with_exact(self.content_length())
    }
}
