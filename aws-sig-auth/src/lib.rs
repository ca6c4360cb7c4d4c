/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS Signature Authentication Package
//!
//! Requests are signed with [SigV4](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
//! by the [`SigV4SigningStage`](middleware::SigV4SigningStage) middleware.

mod canonical_request;
pub mod middleware;
pub mod signer;
