//! Date and time display formatting
//!
//! Keeps one display convention (DD.MM.YYYY) across all list pages.

use chrono::{DateTime, NaiveDate, Utc};

/// Format an ISO date string for display.
/// Falls back to the input unchanged when it does not parse.
pub fn format_date_str(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(d) => format_date(d),
        Err(_) => date_str.to_string(),
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%d.%m.%Y %H:%M").to_string()
}

/// ISO form used by `<input type="date">` values
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse the value of an `<input type="date">`, permissively
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_dates() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        assert_eq!(format_date(d), "15.03.2025");
        assert_eq!(iso_date(d), "2025-03-15");
    }

    #[test]
    fn formats_datetimes() {
        let dt = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(format_datetime(dt), "31.12.2025 23:59");
    }

    #[test]
    fn string_form_tolerates_timestamps_and_garbage() {
        assert_eq!(format_date_str("2025-03-15"), "15.03.2025");
        assert_eq!(format_date_str("2025-03-15T14:02:26.123Z"), "15.03.2025");
        assert_eq!(format_date_str("not a date"), "not a date");
    }

    #[test]
    fn parses_date_inputs() {
        assert_eq!(
            parse_iso_date("2025-08-01"),
            NaiveDate::from_ymd_opt(2025, 8, 1)
        );
        assert_eq!(parse_iso_date(""), None);
    }
}
