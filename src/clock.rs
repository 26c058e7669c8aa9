// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Injected wall-clock capability.
//!
//! Activity window evaluation (upcoming / in progress / ended) depends on the
//! current time, so the clock is a trait with a fixed implementation for
//! deterministic tests.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Source of the current wall-clock time.
pub trait Clock {
    /// Current UTC date and time.
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Current time of day.
    fn time_of_day(&self) -> NaiveTime {
        self.now().time()
    }
}

/// System clock used by the real application.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Fixed clock for tests (offline mock, like the other `new_mock` doubles).
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Build from an RFC3339 timestamp; panics on bad input (test-only helper).
    pub fn at(rfc3339: &str) -> Self {
        Self {
            now: DateTime::parse_from_rfc3339(rfc3339)
                .expect("valid RFC3339 timestamp")
                .with_timezone(&Utc),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
