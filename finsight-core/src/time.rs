//! Time utilities: statement date parsing and month keys.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Month key for records whose date could not be parsed
pub const INVALID_MONTH: &str = "Invalid Date";

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%d %b %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a statement date string like "2024-01-05", "01/05/2024",
/// "Jan 05, 2024" or "5 Jan 2024". Timestamps are accepted and truncated
/// to their date.
pub fn parse_statement_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(d) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    {
        return Some(d);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// Format the grouping key for a date: abbreviated English month and
/// four-digit year ("Jan 2024").
pub fn month_key(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%b %Y").to_string(),
        None => INVALID_MONTH.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_common_formats() {
        assert_eq!(parse_statement_date("2024-01-05"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_statement_date("2024/01/05"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_statement_date("01/05/2024"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_statement_date("Jan 05, 2024"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_statement_date(" 2024-02-29 "), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn test_parse_month_name_without_comma() {
        assert_eq!(parse_statement_date("Jan 5 2024"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_statement_date("5 Jan 2024"), Some(ymd(2024, 1, 5)));
    }

    #[test]
    fn test_parse_timestamps() {
        assert_eq!(
            parse_statement_date("2024-03-10T14:30:00"),
            Some(ymd(2024, 3, 10))
        );
        assert_eq!(
            parse_statement_date("2024-03-10T14:30:00+02:00"),
            Some(ymd(2024, 3, 10))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_statement_date(""), None);
        assert_eq!(parse_statement_date("not a date"), None);
        assert_eq!(parse_statement_date("2024-13-01"), None);
    }

    #[test]
    fn test_month_key() {
        assert_eq!(month_key(Some(ymd(2024, 1, 31))), "Jan 2024");
        assert_eq!(month_key(Some(ymd(2023, 12, 1))), "Dec 2023");
        assert_eq!(month_key(None), INVALID_MONTH);
    }
}
