//! Local wall-clock timestamps stored as `YYYY-MM-DD HH:MM:SS` text

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use std::fmt;
use std::str::FromStr;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Second-precision local date-time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(value: NaiveDateTime) -> Self {
        // Sub-second precision is not representable in the stored text
        Timestamp(value.with_nanosecond(0).unwrap_or(value))
    }

    /// Current local time
    pub fn now() -> Self {
        Timestamp::new(Local::now().naive_local())
    }

    /// `date` at the current local time-of-day
    pub fn on_date_now(date: NaiveDate) -> Self {
        Timestamp::new(date.and_time(Local::now().time()))
    }

    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).map(Timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let ts: Timestamp = "2023-11-23 19:22:16".parse().unwrap();
        assert_eq!(ts.to_string(), "2023-11-23 19:22:16");
    }

    #[test]
    fn test_reject_date_only() {
        assert!("2023-11-23".parse::<Timestamp>().is_err());
    }

    #[test]
    fn test_now_drops_subseconds() {
        assert_eq!(Timestamp::now().naive().nanosecond(), 0);
    }

    #[test]
    fn test_on_date_keeps_date() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let ts = Timestamp::on_date_now(date);
        assert_eq!(ts.naive().date(), date);
        assert!(ts.to_string().starts_with("2020-01-01 "));
    }

    #[test]
    fn test_ordering_matches_text_ordering() {
        let a: Timestamp = "2023-11-11 17:02:54".parse().unwrap();
        let b: Timestamp = "2023-11-20 16:44:39".parse().unwrap();
        assert!(a < b);
        assert!(a.to_string() < b.to_string());
    }
}
