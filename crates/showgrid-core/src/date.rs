//! Date handling — lenient timestamp parsing shared by sorting and display.
//!
//! Review timestamps arrive as free-form text. [`parse_timestamp`] accepts the
//! shapes commonly produced by spreadsheets and APIs; anything else is treated
//! as "not a date". Values without an explicit offset are read as UTC.

use chrono::{
    format::{Item, StrftimeItems},
    DateTime, NaiveDate, NaiveDateTime, Utc,
};

use crate::types::EMPTY_PLACEHOLDER;

/// Default display pattern: long month name and four-digit year.
pub const MONTH_YEAR: &str = "%B %Y";

/// Offsets written without a colon, e.g. `+0000`.
const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const NAIVE_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
];

/// Parse a timestamp string into a UTC instant.
///
/// Returns `None` for empty or unrecognised input.
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    // Partial dates go before the full-date list: "%B %d %Y" would otherwise
    // read "May 2023" as May 20 of year 23.
    if let Some(dt) = parse_partial(s) {
        return Some(dt);
    }

    for fmt in NAIVE_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return midnight(date);
        }
    }

    None
}

/// Month-and-year or year-only input, pinned to the first day of the period.
fn parse_partial(s: &str) -> Option<DateTime<Utc>> {
    // "May 2023"
    if s.split_whitespace().count() == 2 {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("1 {s}"), "%d %B %Y") {
            return midnight(date);
        }
    }
    // "2023-05"
    if s.len() == 7 && s.as_bytes()[4] == b'-' {
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
            return midnight(date);
        }
    }
    // "2023"
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        let year: i32 = s.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1).and_then(midnight);
    }
    None
}

fn midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

/// Sort value of a timestamp: epoch milliseconds, or 0 when unparseable.
pub fn sort_millis(input: &str) -> i64 {
    parse_timestamp(input)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

/// Render a timestamp as "Month YYYY".
///
/// Unparseable input is returned verbatim; empty input becomes the
/// placeholder.
pub fn format_month_year(input: &str) -> String {
    format_timestamp(input, MONTH_YEAR)
}

/// Render a timestamp with a strftime `pattern`, falling back to
/// [`MONTH_YEAR`] when the pattern itself is invalid.
pub fn format_timestamp(input: &str, pattern: &str) -> String {
    match parse_timestamp(input) {
        Some(dt) => {
            let pattern = if is_valid_pattern(pattern) {
                pattern
            } else {
                MONTH_YEAR
            };
            dt.format(pattern).to_string()
        }
        None if input.is_empty() => EMPTY_PLACEHOLDER.to_string(),
        None => input.to_string(),
    }
}

/// Whether `pattern` is a strftime string chrono can render.
pub fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
