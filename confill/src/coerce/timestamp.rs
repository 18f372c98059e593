//! Timestamp parsing and formatting with a caller supplied layout.

use std::fmt::Write as _;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Default layout: RFC 1123 with a literal `GMT` suffix.
pub const DEFAULT_TIME_LAYOUT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Parses `input` with `layout`.
///
/// Layouts carrying an offset are honoured and converted to UTC. Layouts
/// without one are read as UTC; date-only layouts resolve to midnight.
///
/// # Errors
///
/// Returns the parse error of the most specific attempt when `input` does not
/// match `layout`.
pub fn parse_timestamp(input: &str, layout: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(ts) = DateTime::parse_from_str(input, layout) {
        return Ok(ts.with_timezone(&Utc));
    }
    match NaiveDateTime::parse_from_str(input, layout) {
        Ok(naive) => Ok(naive.and_utc()),
        Err(err) => NaiveDate::parse_from_str(input, layout)
            .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc())
            .map_err(|_| err),
    }
}

/// Formats `ts` with `layout`.
///
/// An invalid layout yields the RFC 3339 form instead of panicking.
#[must_use]
pub fn format_timestamp(ts: &DateTime<Utc>, layout: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", ts.format(layout)).is_err() {
        return ts.to_rfc3339();
    }
    out
}
