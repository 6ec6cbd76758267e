// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Date handling for string-valued date fields.
//!
//! The server stores dates either as `YYYY-MM-DD` or as full RFC 3339
//! timestamps; editors and filters work on calendar dates only.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

/// Parse a stored date value into a calendar date (UTC for timestamps).
pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(ts.to_offset(UtcOffset::UTC).date());
    }
    let ymd = format_description!("[year]-[month]-[day]");
    if let Ok(date) = Date::parse(raw, ymd) {
        return Some(date);
    }
    // `2024-03-05T00:00:00` without an offset: take the date part.
    raw.get(..10).and_then(|head| Date::parse(head, ymd).ok())
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Value to seed an editable date input with. Unparseable values pass through verbatim.
pub fn to_input_format(raw: &str) -> String {
    parse_date(raw).map_or_else(|| raw.to_string(), format_date)
}
