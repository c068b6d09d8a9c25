// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time handling.
//!
//! Weeks run Sunday through Saturday in local time.

use chrono::{DateTime, Datelike, Days, FixedOffset, Local, NaiveDate, SecondsFormat, Utc};

/// Number of days in a calendar week.
pub const DAYS_PER_WEEK: u64 = 7;

/// Short weekday labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// The Sunday on or before `today`.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    let offset = today.weekday().num_days_from_sunday();
    today - Days::new(u64::from(offset))
}

/// Whether `date` falls in the week beginning at `start`.
pub fn in_week(date: NaiveDate, start: NaiveDate) -> bool {
    date >= start && start.checked_add_days(Days::new(DAYS_PER_WEEK)).is_none_or(|end| date < end)
}

/// The seven dates of the week containing `today`, Sunday first.
pub fn week_days(today: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    week_start(today).iter_days().take(DAYS_PER_WEEK as usize)
}

/// Source of the current moment.
///
/// The wall-clock part (`naive_local()`) drives week boundaries and the
/// completion filter; the instant drives `createdAt`.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The host's local clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// A clock frozen at one moment, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
