//! Operator input parsing for dates and counts.
use chrono::{Datelike, NaiveDate};

/// Parse a `YYYY-MM-DD` week date into its zero-padded form.
///
/// Blank input falls back to `today`. Components are split on `-`, must be
/// exactly three integers, and must name a real calendar date in years
/// 1 through 9999. Returns `None` on any failure.
pub fn parse_week_date(raw: &str, today: NaiveDate) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(format_date(today));
    }
    let mut parts = raw.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };
    let year: i32 = parse_component(year)?;
    let month: u32 = parse_component(month)?;
    let day: u32 = parse_component(day)?;
    if !(1..=9999).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day).map(format_date)
}

/// Parse a count; blank is zero, negative or non-numeric is `None`.
pub fn parse_count(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0);
    }
    let value: i64 = raw.parse().ok()?;
    u64::try_from(value).ok()
}

fn parse_component<T: std::str::FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() || raw.starts_with('-') {
        return None;
    }
    raw.parse().ok()
}

fn format_date(date: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
