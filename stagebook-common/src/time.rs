//! Timestamp utilities
//!
//! All timestamps are naive UTC, matching how they are stored in SQLite.

use chrono::{NaiveDateTime, Utc};

/// Format used by `<input type="datetime-local">` and by rendered pages
pub const FORM_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Get current UTC timestamp (naive, as stored in the database)
pub fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Render a timestamp the way pages and forms display it
pub fn format_form_datetime(value: &NaiveDateTime) -> String {
    value.format(FORM_DATETIME_FORMAT).to_string()
}

/// Parse a `datetime-local` form value
///
/// Browsers may include seconds when a `step` is set, so both forms are accepted.
pub fn parse_form_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, FORM_DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}
