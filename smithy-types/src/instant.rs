/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Timestamps as they appear on the wire.
//!
//! awsJson protocols transmit timestamps as (possibly fractional) seconds since the Unix epoch.

use chrono::{SecondsFormat, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Rounds `fraction` to the nearest nanosecond, carrying whole seconds into `epoch_seconds`
    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        let nanos = (fraction * 1_000_000_000_f64).round() as i64;
        Instant {
            seconds: epoch_seconds + nanos.div_euclid(1_000_000_000),
            subsecond_nanos: nanos.rem_euclid(1_000_000_000) as u32,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    /// Times before the Unix epoch are represented with negative seconds
    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => Instant {
                seconds: duration.as_secs() as i64,
                subsecond_nanos: duration.subsec_nanos(),
            },
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let mut seconds = -(duration.as_secs() as i64);
                let mut nanos = 0;
                if duration.subsec_nanos() > 0 {
                    seconds -= 1;
                    nanos = 1_000_000_000 - duration.subsec_nanos();
                }
                Instant::from_secs_and_nanos(seconds, nanos)
            }
        }
    }

    pub fn to_system_time(&self) -> Option<SystemTime> {
        if self.seconds >= 0 {
            UNIX_EPOCH.checked_add(Duration::new(self.seconds as u64, self.subsecond_nanos))
        } else {
            UNIX_EPOCH
                .checked_sub(Duration::from_secs(self.seconds.unsigned_abs()))?
                .checked_add(Duration::from_nanos(self.subsecond_nanos as u64))
        }
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / 1_000_000_000_f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match Utc.timestamp_opt(self.seconds, self.subsecond_nanos).single()
            {
                Some(date_time) => {
                    let rfc3339 = date_time.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                    if !self.has_nanos() {
                        return rfc3339;
                    }
                    // chrono pads fractions to 3, 6 or 9 digits
                    let mut rfc3339 = rfc3339
                        .trim_end_matches('Z')
                        .trim_end_matches('0')
                        .to_owned();
                    rfc3339.push('Z');
                    rfc3339
                }
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
        }
    }
}

impl From<SystemTime> for Instant {
    fn from(time: SystemTime) -> Self {
        Instant::from_system_time(time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    DateTime,
    EpochSeconds,
}

impl Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.has_nanos() {
            serializer.serialize_f64(self.epoch_fractional_seconds())
        } else {
            serializer.serialize_i64(self.seconds)
        }
    }
}

struct EpochSecondsVisitor;

impl<'de> Visitor<'de> for EpochSecondsVisitor {
    type Value = Instant;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a timestamp in seconds since the Unix epoch")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Instant::from_epoch_seconds(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        if v > i64::MAX as u64 {
            return Err(E::custom("timestamp out of range"));
        }
        Ok(Instant::from_epoch_seconds(v as i64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        if !v.is_finite() {
            return Err(E::custom("timestamp must be a finite number"));
        }
        Ok(Instant::from_f64(v))
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EpochSecondsVisitor)
    }
}
