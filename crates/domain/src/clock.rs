// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Business wall clock.
//!
//! Every lateness and "today" decision is made against local time in the
//! business timezone, expressed as a naive date-time so predicates stay pure.

use crate::error::DomainError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

/// Timezone used when none is configured.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::Argentina::Mendoza;

/// Date format of every stored calendar date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time-of-day format of every stored delivery time.
pub const TIME_FORMAT: &str = "%H:%M";

/// Time-of-day format found on some older rows.
const TIME_WITH_SECONDS_FORMAT: &str = "%H:%M:%S";

/// Parses an IANA timezone name.
///
/// # Errors
///
/// Returns [`DomainError::InvalidTimezone`] if the name is unknown.
pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}

/// Current local wall-clock time in `tz`.
#[must_use]
pub fn local_now(tz: Tz) -> NaiveDateTime {
    Utc::now().with_timezone(&tz).naive_local()
}

/// Parses a stored `YYYY-MM-DD` date, returning `None` when blank or malformed.
///
/// Only the zero-padded form is accepted: `"2024-1-5"` and padded values do
/// not parse, since stored dates are compared as fixed-width strings.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .ok()
        .filter(|date| date.format(DATE_FORMAT).to_string() == value)
}

/// Parses a stored `HH:MM` time, returning `None` when blank or malformed.
///
/// Older rows may carry seconds (`HH:MM:SS`); those are read too.
#[must_use]
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    [TIME_FORMAT, TIME_WITH_SECONDS_FORMAT].into_iter().find_map(|format| {
        NaiveTime::parse_from_str(value, format)
            .ok()
            .filter(|time| time.format(format).to_string() == value)
    })
}
