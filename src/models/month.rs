//! Calendar year-month representation
//!
//! Goal target months arrive from the budgeting service as full dates
//! (`2024-07-01`); only the year and month carry meaning.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month, without a day component
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a year-month, returning `None` for a month outside 1..=12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Calendar months from `self` to `later`
    ///
    /// Pure (year, month) arithmetic: Dec-2023 to Jan-2024 is 1, Jan-2024 to
    /// Mar-2024 is 2. Negative when `later` is in the past. Computed in
    /// `i64`, so any pair of `i32` years fits.
    pub fn months_until(&self, later: YearMonth) -> i64 {
        let years = i64::from(later.year) - i64::from(self.year);
        (i64::from(later.month) - i64::from(self.month)) + 12 * years
    }

    /// Parse `YYYY-MM-DD` (day ignored) or `YYYY-MM`
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self::from_date(date));
        }

        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month).ok_or(MonthParseError::InvalidMonth(month))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = MonthParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<YearMonth> for String {
    fn from(month: YearMonth) -> Self {
        month.to_string()
    }
}

/// Error type for year-month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            Self::InvalidMonth(m) => write!(f, "Invalid month: {} (must be 1-12)", m),
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_months_until() {
        assert_eq!(ym(2024, 1).months_until(ym(2024, 3)), 2);
        assert_eq!(ym(2023, 12).months_until(ym(2024, 1)), 1);
        assert_eq!(ym(2024, 7).months_until(ym(2024, 7)), 0);
        assert_eq!(ym(2024, 3).months_until(ym(2024, 1)), -2);
        assert_eq!(ym(2024, 1).months_until(ym(2026, 1)), 24);
    }

    #[test]
    fn test_months_until_extreme_years() {
        let now = ym(2024, 1);
        let far = YearMonth::parse("999999999-01").unwrap();
        assert_eq!(now.months_until(far), 12 * (999_999_999_i64 - 2024));

        let min = ym(i32::MIN, 1);
        let max = ym(i32::MAX, 12);
        assert_eq!(
            min.months_until(max),
            12 * (i64::from(i32::MAX) - i64::from(i32::MIN)) + 11
        );
        assert!(max.months_until(min) < 0);
    }

    #[test]
    fn test_from_date_ignores_day() {
        let early = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let late = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(YearMonth::from_date(early), YearMonth::from_date(late));
        assert_eq!(YearMonth::from_date(late).months_until(ym(2024, 1)), 0);
    }

    #[test]
    fn test_new_rejects_bad_month() {
        assert!(YearMonth::new(2024, 0).is_none());
        assert!(YearMonth::new(2024, 13).is_none());
        assert!(YearMonth::new(2024, 12).is_some());
    }

    #[test]
    fn test_parse() {
        assert_eq!(YearMonth::parse("2024-07-01").unwrap(), ym(2024, 7));
        assert_eq!(YearMonth::parse("2024-07-19").unwrap(), ym(2024, 7));
        assert_eq!(YearMonth::parse("2024-07").unwrap(), ym(2024, 7));
        assert_eq!(
            YearMonth::parse("2024-13"),
            Err(MonthParseError::InvalidMonth(13))
        );
        assert!(matches!(
            YearMonth::parse("July"),
            Err(MonthParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(ym(2024, 7).to_string(), "2024-07");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&ym(2024, 7)).unwrap();
        assert_eq!(json, "\"2024-07\"");

        let from_date: YearMonth = serde_json::from_str("\"2024-07-01\"").unwrap();
        assert_eq!(from_date, ym(2024, 7));
        assert!(serde_json::from_str::<YearMonth>("\"garbage\"").is_err());
    }
}
