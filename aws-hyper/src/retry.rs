/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Retry support for aws-hyper
//!
//! Retries follow the standard AWS retry mode: exponential backoff with jitter, bounded by a
//! maximum number of attempts and a client-wide retry token bucket. Backoff blocks the calling
//! thread.

use smithy_types::retry::{ErrorKind, RetryKind};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct RetryConfig {
    initial_retry_tokens: usize,
    retry_cost: usize,
    no_retry_increment: usize,
    timeout_retry_cost: usize,
    max_attempts: u32,
    max_backoff: Duration,
    base: fn() -> f64,
}

impl RetryConfig {
    pub fn new() -> Self {
        Default::default()
    }

    /// A configuration that makes exactly one attempt
    pub fn disabled() -> Self {
        Self::default().with_max_attempts(1)
    }

    /// Total number of attempts made for a request, including the first
    ///
    /// Values below 1 are treated as 1.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Upper bound for a single backoff delay
    pub fn with_max_backoff(mut self, max_backoff: Duration) -> Self {
        self.max_backoff = max_backoff;
        self
    }

    /// For deterministic tests, enable using a static base instead of random base for exponential backoff
    pub fn with_static_base(mut self, base: fn() -> f64) -> Self {
        self.base = base;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn max_backoff(&self) -> Duration {
        self.max_backoff
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_retry_tokens: INITIAL_RETRY_TOKENS,
            retry_cost: RETRY_COST,
            no_retry_increment: 1,
            timeout_retry_cost: 10,
            max_attempts: MAX_ATTEMPTS,
            max_backoff: Duration::from_secs(20),
            // by default, use a random base for exponential backoff
            base: fastrand::f64,
        }
    }
}

const MAX_ATTEMPTS: u32 = 3;
const INITIAL_RETRY_TOKENS: usize = 500;
const RETRY_COST: usize = 5;
// 2^62 seconds is already far past any backoff bound
const MAX_BACKOFF_EXPONENT: u32 = 62;

/// Retry state shared by every request a client sends
#[derive(Debug)]
pub(crate) struct RetryCtx {
    retry_quota: usize,
    config: RetryConfig,
}

impl RetryCtx {
    pub fn new(config: RetryConfig) -> Self {
        RetryCtx {
            retry_quota: config.initial_retry_tokens,
            config,
        }
    }

    fn release(&mut self, amount: usize) {
        self.retry_quota = (self.retry_quota + amount).min(self.config.initial_retry_tokens);
    }

    fn acquire(&mut self, err: ErrorKind) -> Option<usize> {
        let retry_cost = if err == ErrorKind::TransientError {
            self.config.timeout_retry_cost
        } else {
            self.config.retry_cost
        };
        if retry_cost > self.retry_quota {
            None
        } else {
            self.retry_quota -= retry_cost;
            Some(retry_cost)
        }
    }

    #[cfg(test)]
    fn with_base_provider(mut self, base: fn() -> f64) -> Self {
        self.config.base = base;
        self
    }
}

/// StandardRetryStrategy
///
/// `ctx` captures cross-request retry state, whereas `attempts` captures retry state local to this
/// request
#[derive(Clone, Debug)]
pub(crate) struct StandardRetryStrategy {
    attempts: u32,
    last_retry_cost: Option<usize>,
    ctx: Arc<Mutex<RetryCtx>>,
}

impl StandardRetryStrategy {
    pub fn new(ctx: Arc<Mutex<RetryCtx>>) -> Self {
        Self {
            attempts: 0,
            last_retry_cost: None,
            ctx,
        }
    }

    pub fn ctx(&self) -> MutexGuard<'_, RetryCtx> {
        // the token bucket holds plain counters; a poisoned lock leaves it consistent
        self.ctx
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Number of retries made so far
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Decide whether to make another attempt after `retry_kind`
    ///
    /// Returns the strategy for the next attempt and how long to wait before making it.
    /// Successful responses refund the retry token bucket.
    pub fn should_retry(&self, retry_kind: RetryKind) -> Option<(Self, Duration)> {
        match retry_kind {
            RetryKind::Unnecessary => {
                let mut ctx = self.ctx();
                let refund = self
                    .last_retry_cost
                    .unwrap_or(ctx.config.no_retry_increment);
                ctx.release(refund);
                None
            }
            RetryKind::NotRetryable => None,
            RetryKind::Error(kind) => self.do_retry(kind, None),
            RetryKind::Explicit(delay) => self.do_retry(ErrorKind::ThrottlingError, Some(delay)),
        }
    }

    fn do_retry(&self, kind: ErrorKind, delay: Option<Duration>) -> Option<(Self, Duration)> {
        let mut ctx = self.ctx();
        if self.attempts + 1 >= ctx.config.max_attempts {
            return None;
        }
        let cost = ctx.acquire(kind)?;
        let backoff = match delay {
            Some(delay) => delay,
            None => {
                let b = (ctx.config.base)();
                let exponent = self.attempts.min(MAX_BACKOFF_EXPONENT) as i32;
                let secs = (b * 2_f64.powi(exponent))
                    .min(ctx.config.max_backoff.as_secs_f64())
                    .max(0.0);
                Duration::from_secs_f64(secs)
            }
        };
        let backoff = backoff.min(ctx.config.max_backoff);
        let next = StandardRetryStrategy {
            attempts: self.attempts + 1,
            last_retry_cost: Some(cost),
            ctx: self.ctx.clone(),
        };
        Some((next, backoff))
    }
}
