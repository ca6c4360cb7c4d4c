/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod body;
pub mod middleware;
pub mod operation;
pub mod property_bag;
pub mod response;
pub mod result;
pub mod retry;
