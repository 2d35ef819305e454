use chrono::{DateTime, Datelike, Utc};

use crate::error::{Error, Result};

pub fn from_unix(date_unix: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(date_unix, 0)
}

/// UTC calendar month of a unix timestamp as `"01"`..`"12"`.
/// `None` when the timestamp is outside the representable range.
pub fn month_of(date_unix: i64) -> Option<String> {
    from_unix(date_unix).map(|dt| format!("{:02}", dt.month()))
}

pub fn month_number(date_unix: i64) -> Option<u32> {
    from_unix(date_unix).map(|dt| dt.month())
}

/// Parses a month bound such as `"10"` or `"1"`.
pub fn parse_month(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| Error::InvalidInput(format!("Invalid month: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_unix_seconds_to_utc() {
        let dt = from_unix(1598842119).unwrap();
        assert_eq!(dt.to_rfc3339(), "2020-08-31T02:48:39+00:00");
    }

    #[test]
    fn month_is_zero_padded() {
        assert_eq!(month_of(1598842119).as_deref(), Some("08"));
        assert_eq!(month_of(1578000000).as_deref(), Some("01"));
        assert_eq!(month_of(1607000000).as_deref(), Some("12"));
        assert_eq!(month_number(1602000000), Some(10));
    }

    #[test]
    fn month_uses_utc_not_local_time() {
        // 2020-12-31T23:30:00Z is still December in UTC.
        assert_eq!(month_of(1609457400).as_deref(), Some("12"));
        // 2021-01-01T00:00:00Z
        assert_eq!(month_of(1609459200).as_deref(), Some("01"));
    }

    #[test]
    fn out_of_range_timestamp_has_no_month() {
        assert_eq!(month_of(i64::MAX), None);
    }

    #[test]
    fn parse_month_accepts_padded_and_plain() {
        assert_eq!(parse_month("09").unwrap(), 9);
        assert_eq!(parse_month("10").unwrap(), 10);
        assert!(matches!(parse_month("Q4"), Err(Error::InvalidInput(_))));
    }
}
