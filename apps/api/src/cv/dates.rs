//! Display formatting for CV dates and periods.
//!
//! Dates render as short month + year (`"Jan 2020"`). A bare year stays a bare year.
//! Anything unparsable is passed through trimmed and verbatim, so a producer that
//! sends `"Spring term"` sees exactly that on the page instead of an error.

use chrono::NaiveDate;

pub const PRESENT: &str = "Present";
pub const PERIOD_SEPARATOR: &str = " - ";

const DISPLAY_FORMAT: &str = "%b %Y";
const ONGOING_MARKERS: &[&str] = &["present", "current", "now", "ongoing", "today"];

/// Full-date layouts tried against the first ten characters (ISO date-times included).
const DAY_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParsedDate {
    Month(NaiveDate),
    Year(i32),
}

/// Formats a raw date for display. Blank input gives `""`.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    match parse_date(trimmed) {
        Some(ParsedDate::Month(date)) => date.format(DISPLAY_FORMAT).to_string(),
        Some(ParsedDate::Year(year)) => year.to_string(),
        None => trimmed.to_string(),
    }
}

/// Formats an end date. Missing values, ongoing markers and a set current-flag
/// all render as [`PRESENT`].
pub fn format_end_date(raw: Option<&str>, is_current: bool) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(end) if !is_current && !is_ongoing(end) => format_date(end),
        _ => PRESENT.to_string(),
    }
}

/// Period for entries that run from a start to an end (work, education).
///
/// No start, no end and no current-flag means there is nothing to show: `""`.
pub fn ranged_period(start: Option<&str>, end: Option<&str>, is_current: bool) -> String {
    let start = start.map(format_date).unwrap_or_default();
    let has_end = end.is_some_and(|e| !e.trim().is_empty());
    if start.is_empty() && !has_end && !is_current {
        return String::new();
    }
    let end = format_end_date(end, is_current);
    if start.is_empty() {
        end
    } else {
        format!("{start}{PERIOD_SEPARATOR}{end}")
    }
}

/// Period for point-in-time entries (certifications). A missing expiry is not "Present".
pub fn point_period(issued: Option<&str>, expires: Option<&str>) -> String {
    let issued = issued.map(format_date).unwrap_or_default();
    let expires = expires.map(format_date).unwrap_or_default();
    match (issued.is_empty(), expires.is_empty()) {
        (_, true) => issued,
        (true, false) => expires,
        (false, false) => format!("{issued}{PERIOD_SEPARATOR}{expires}"),
    }
}

pub fn is_ongoing(raw: &str) -> bool {
    let lower = raw.trim().to_lowercase();
    ONGOING_MARKERS.contains(&lower.as_str())
}

fn parse_date(raw: &str) -> Option<ParsedDate> {
    if raw.is_empty() {
        return None;
    }

    if let Some(prefix) = raw.get(..10) {
        if let Some(date) = parse_with(prefix, DAY_FORMATS) {
            return Some(ParsedDate::Month(date));
        }
    }

    if raw.len() == 4 && raw.chars().all(|c| c.is_ascii_digit()) {
        return raw.parse().ok().map(ParsedDate::Year);
    }

    // Month precision: pad a day so NaiveDate can parse it.
    let candidates = [
        (format!("{raw}-01"), "%Y-%m-%d"),
        (format!("{raw}/01"), "%Y/%m/%d"),
        (format!("01/{raw}"), "%d/%m/%Y"),
        (format!("01-{raw}"), "%d-%m-%Y"),
        (format!("1 {}", raw.replace(',', "")), "%d %b %Y"),
    ];
    candidates
        .iter()
        .find_map(|(padded, fmt)| NaiveDate::parse_from_str(padded, fmt).ok())
        .map(ParsedDate::Month)
}

fn parse_with(raw: &str, formats: &[&str]) -> Option<NaiveDate> {
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}
