use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, Utc};

pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

pub fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|err| anyhow!(err))
}

/// A calendar date as the instant it starts, in UTC.
pub fn start_of_day_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// `MMM dd, yyyy`, the display format used in reports.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_pads_day() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).expect("date");
        assert_eq!(format_display_date(date), "Mar 07, 2025");
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("2025-13-01").is_err());
        assert_eq!(
            parse_date(" 2025-01-31 ").expect("date"),
            NaiveDate::from_ymd_opt(2025, 1, 31).expect("date")
        );
    }
}
