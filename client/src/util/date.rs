//! Date parsing and display for subscription expiry values.
//!
//! Accepted inputs are the forms the store actually holds: RFC 3339
//! (`2025-03-01T12:00:00Z`, with offset or fractional seconds), the same with
//! a compact `+0000` offset, a date-time without offset (`T` or space
//! separated, read as UTC), and a bare date with `-` or `/` (UTC midnight).

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Placeholder shown when an expiry date is missing or unparsable.
pub const NOT_AVAILABLE: &str = "N/A";

/// Parse a date-like string. Returns `None` for anything unrecognised.
pub fn parse_date_like(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(at);
    }
    let compact_offset = [
        format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]][offset_hour sign:mandatory][offset_minute]"
        ),
        format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]][offset_hour sign:mandatory][offset_minute]"
        ),
    ];
    for fmt in compact_offset {
        if let Ok(at) = OffsetDateTime::parse(raw, fmt) {
            return Some(at);
        }
    }
    let naive = [
        format_description!("[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"),
        format_description!("[year]-[month]-[day] [hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"),
    ];
    for fmt in naive {
        if let Ok(at) = PrimitiveDateTime::parse(raw, fmt) {
            return Some(at.assume_utc());
        }
    }
    let days = [format_description!("[year]-[month]-[day]"), format_description!("[year]/[month]/[day]")];
    days.into_iter()
        .find_map(|fmt| Date::parse(raw, fmt).ok())
        .map(|d| d.midnight().assume_utc())
}

/// Format an instant as `dd/mm/yyyy` (UTC).
pub fn format_day(at: OffsetDateTime) -> String {
    let fmt = format_description!("[day]/[month]/[year]");
    at.format(fmt).unwrap_or_else(|_| NOT_AVAILABLE.to_owned())
}

/// Format an optional instant, falling back to [`NOT_AVAILABLE`].
pub fn format_day_or_na(at: Option<OffsetDateTime>) -> String {
    at.map_or_else(|| NOT_AVAILABLE.to_owned(), format_day)
}
