//! Date and time parsing for submitted form values.

use jiff::{
    civil::{Date, DateTime},
    Timestamp,
};

/// Returns true when `value` is an ISO-8601 date or date-time.
///
/// Accepts instants with a `Z` or numeric offset, naive date-times and bare
/// dates, which is what browsers and the page editor produce.
///
/// ```rust
/// use launchpad_core::dates::is_iso8601;
///
/// assert!(is_iso8601("2024-06-01T09:30:00Z"));
/// assert!(is_iso8601("2024-06-01T09:30:00.250+02:00"));
/// assert!(is_iso8601("2024-06-01T09:30:00"));
/// assert!(is_iso8601("2024-06-01"));
/// assert!(!is_iso8601("06/01/2024"));
/// assert!(!is_iso8601(""));
/// ```
pub fn is_iso8601(value: &str) -> bool {
    value.parse::<Timestamp>().is_ok()
        || value.parse::<DateTime>().is_ok()
        || value.parse::<Date>().is_ok()
}

/// Parses a `YYYY-MM-DD` calendar date.
///
/// The year must be exactly four digits. Month and day may drop their
/// leading zero. Signs and surrounding whitespace are rejected.
///
/// ```rust
/// use launchpad_core::dates::parse_calendar_date;
///
/// assert!(parse_calendar_date("2024-02-29").is_some());
/// assert!(parse_calendar_date("2024-6-1").is_some());
/// assert!(parse_calendar_date("2023-02-29").is_none());
/// assert!(parse_calendar_date("2024-06-01T00:00:00").is_none());
/// assert!(parse_calendar_date("24-06-01").is_none());
/// ```
pub fn parse_calendar_date(value: &str) -> Option<Date> {
    let mut parts = value.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    let well_formed = year.len() == 4
        && (1..=2).contains(&month.len())
        && (1..=2).contains(&day.len())
        && all_digits(year)
        && all_digits(month)
        && all_digits(day);
    if !well_formed {
        return None;
    }

    Date::new(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?).ok()
}
