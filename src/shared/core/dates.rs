// Calendar date parsing and rendering shared by the exercise use cases.
//
// Responsibilities
// - Parse user supplied date strings leniently into UTC timestamps.
// - Render timestamps as a calendar day without time of day.
//
// Boundaries
// - Date-only inputs are interpreted as UTC midnight, and rendering is done in UTC,
//   so a stored date always renders as the same calendar day it was parsed from.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const CALENDAR_DAY_FORMAT: &str = "%a %b %d %Y";

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", CALENDAR_DAY_FORMAT, "%b %d %Y"];

/// Parse a date string, returning `None` when it does not describe a valid instant.
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(input, format) {
            return Some(timestamp.and_utc());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Some(start_of_day(date));
        }
    }

    parse_partial_date(input)
}

/// Render a timestamp as a calendar day, e.g. `Mon Jan 01 2024`.
pub fn to_date_string(date: &DateTime<Utc>) -> String {
    date.format(CALENDAR_DAY_FORMAT).to_string()
}

// `YYYY` and `YYYY-MM` resolve to the first day of the period.
fn parse_partial_date(input: &str) -> Option<DateTime<Utc>> {
    let padded = match input.len() {
        4 if input.bytes().all(|b| b.is_ascii_digit()) => format!("{input}-01-01"),
        7 => format!("{input}-01"),
        _ => return None,
    };
    NaiveDate::parse_from_str(&padded, "%Y-%m-%d")
        .ok()
        .map(start_of_day)
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
