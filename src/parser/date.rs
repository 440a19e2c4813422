//! Publication date formatting
//!
//! RSS `pubDate` values are RFC 2822, but feeds in the wild also carry
//! RFC 3339 and bare ISO dates. Every parsed instant is rendered in UTC.
//! A day-of-week that disagrees with the date is ignored.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use super::patterns::WEEKDAY_PREFIX;
use crate::models::INVALID_DATE;

/// Output format, e.g. "January 1, 2024"
const DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// Parse a feed date string into a UTC instant
pub fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(dt) = parse_rfc2822_lenient(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats = [
        "%Y-%m-%d %H:%M:%S", // 2024-01-01 12:00:00
        "%Y-%m-%dT%H:%M:%S", // 2024-01-01T12:00:00
    ];

    for format in &formats {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    let date_formats = [
        "%Y-%m-%d", // 2024-01-01
        "%B %d, %Y", // January 1, 2024
    ];

    date_formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// RFC 2822, retried without the day-of-week when chrono rejects it
fn parse_rfc2822_lenient(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(raw).ok().or_else(|| {
        let stripped = WEEKDAY_PREFIX.replace(raw, "");
        DateTime::parse_from_rfc2822(&stripped).ok()
    })
}

/// Format a feed date as "Month D, YYYY", or "Invalid Date" if it cannot be parsed
pub fn format_pub_date(raw: &str) -> String {
    match parse_pub_date(raw) {
        Some(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        None => {
            tracing::debug!(raw = %raw, "Unparseable publication date");
            INVALID_DATE.to_string()
        }
    }
}
