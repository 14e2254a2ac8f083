//! Parsing of the date given to `--dt`

use crate::error::{JnlError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date the user wants to move an item's creation to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateReference {
    Today,
    Yesterday,
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Occurrence of a weekday strictly before today
    LastWeekday(Weekday),
    /// Calendar date in YYYY-MM-DD form
    Date(NaiveDate),
}

impl DateReference {
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        if let Ok(date) = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d") {
            return Ok(DateReference::Date(date));
        }

        match normalized.as_str() {
            "today" => Ok(DateReference::Today),
            "yesterday" => Ok(DateReference::Yesterday),
            _ => {
                if let Some(day) = normalized.strip_prefix("last ") {
                    parse_weekday(day.trim())
                        .map(DateReference::LastWeekday)
                        .ok_or_else(|| JnlError::InvalidDate(input.to_string()))
                } else {
                    parse_weekday(&normalized)
                        .map(DateReference::Weekday)
                        .ok_or_else(|| JnlError::InvalidDate(input.to_string()))
                }
            }
        }
    }

    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateReference::Today => today,
            DateReference::Yesterday => today - Duration::days(1),
            DateReference::Weekday(target) => today - Duration::days(days_back(today, *target)),
            DateReference::LastWeekday(target) => {
                let back = match days_back(today, *target) {
                    0 => 7,
                    n => n,
                };
                today - Duration::days(back)
            }
            DateReference::Date(date) => *date,
        }
    }
}

fn days_back(today: NaiveDate, target: Weekday) -> i64 {
    let current = today.weekday().num_days_from_monday();
    ((current + 7 - target.num_days_from_monday()) % 7) as i64
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
