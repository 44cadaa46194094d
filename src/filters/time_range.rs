//! Time expressions and inclusive time ranges for `--from` / `--to`.
//!
//! # Accepted inputs
//!
//! - `now` (case-insensitive)
//! - Relative offsets `[-]<n><unit>` with unit `s`, `m`, `h` or `d`; a leading
//!   `-` goes back from now, no sign goes forward
//! - ISO-8601 with an offset (`2023-12-15T14:30:00Z`, `2023-12-15T14:30Z`,
//!   `2023-12-15T14:30:00+0100`)
//! - `YYYY-MM-DD HH:MM[:SS]` / `YYYY-MM-DDTHH:MM[:SS]` in local time
//! - `YYYY-MM-DD` as UTC midnight
//!
//! Dates may also use `/` as the separator.

use std::sync::LazyLock;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use regex::Regex;

use crate::error::{Result, SessionError};
use crate::parsers::deserializers::parse_iso8601;
use crate::utils::display::format_local_datetime;

static RELATIVE_TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?)(\d+)([smhd])$").expect("Invalid relative time regex"));

const SLASH_DATETIME_FORMATS: &[&str] = &["%Y/%m/%d %H:%M:%S", "%Y/%m/%d %H:%M"];

/// Inclusive bounds; either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl TimeRange {
    /// True when at least one bound is set
    pub fn is_active(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }
}

/// Parse a single time expression relative to the current instant.
pub fn parse_time_input(input: &str) -> Result<DateTime<Utc>> {
    parse_time_input_at(input, Utc::now())
}

/// Parse a time expression, resolving `now` and relative offsets against `now`.
pub fn parse_time_input_at(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>> {
    let invalid = || SessionError::InvalidTimeFormat { input: input.to_string() };

    if input.eq_ignore_ascii_case("now") {
        return Ok(now);
    }

    if let Some(caps) = RELATIVE_TIME_REGEX.captures(input) {
        let amount: i64 = caps[2].parse().map_err(|_| invalid())?;
        let delta = match &caps[3] {
            "s" => TimeDelta::try_seconds(amount),
            "m" => TimeDelta::try_minutes(amount),
            "h" => TimeDelta::try_hours(amount),
            _ => TimeDelta::try_days(amount),
        }
        .ok_or_else(invalid)?;

        let shifted = if &caps[1] == "-" {
            now.checked_sub_signed(delta)
        } else {
            now.checked_add_signed(delta)
        };
        return shifted.ok_or_else(invalid);
    }

    parse_absolute(input.trim()).ok_or_else(invalid)
}

fn parse_absolute(input: &str) -> Option<DateTime<Utc>> {
    if let Some(dt) = parse_iso8601(input) {
        return Some(dt);
    }

    for format in SLASH_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Local.from_local_datetime(&naive).earliest().map(|dt| dt.with_timezone(&Utc));
        }
    }

    // A bare date is midnight UTC, matching ISO date-only semantics
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(input, "%Y/%m/%d"))
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Parse optional `from` / `to` expressions into a [`TimeRange`].
///
/// # Errors
///
/// Returns [`SessionError::InvalidTimeFormat`] for an unparseable side and
/// [`SessionError::InvalidRange`] when both are set and `from > to`.
pub fn parse_time_range(from: Option<&str>, to: Option<&str>) -> Result<TimeRange> {
    let now = Utc::now();
    let range = TimeRange {
        from: from.map(|s| parse_time_input_at(s, now)).transpose()?,
        to: to.map(|s| parse_time_input_at(s, now)).transpose()?,
    };

    if let (Some(from), Some(to)) = (range.from, range.to)
        && from > to
    {
        return Err(SessionError::InvalidRange);
    }

    Ok(range)
}

/// Inclusive membership test; unset bounds are open.
pub fn is_in_range(instant: DateTime<Utc>, range: &TimeRange) -> bool {
    range.from.is_none_or(|from| instant >= from) && range.to.is_none_or(|to| instant <= to)
}

/// Human description such as `from 12/15/2023, 2:30:00 PM to 12/16/2023, 9:00:00 AM`.
pub fn format_time_range(range: &TimeRange) -> String {
    let mut parts = Vec::new();
    if let Some(from) = range.from {
        parts.push(format!("from {}", format_local_datetime(&from)));
    }
    if let Some(to) = range.to {
        parts.push(format!("to {}", format_local_datetime(&to)));
    }
    parts.join(" ")
}
