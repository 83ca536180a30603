//! Date formatting for order tables and product pages.

use chrono::{DateTime, NaiveDate};

/// RFC 3339 timestamp to `Mar 15, 2024 14:02` (UTC). Unparseable input is returned as is.
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => dt.naive_utc().format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => datetime_str.to_string(),
    }
}

/// `2024-03-15` or a full timestamp to `Mar 15, 2024`.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "Mar 15, 2024 14:02");
        assert_eq!(format_datetime("2024-12-31T23:59:59+02:00"), "Dec 31, 2024 21:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-05"), "Mar 5, 2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "Mar 15, 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
