//! Half-open date ranges for selecting day files

use std::fmt;
use chrono::{Duration, Local, NaiveDate};

use crate::error::{Error, Result};

/// Date format accepted by [`DateRange::parse`]
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date range for selecting day files
///
/// `start` is inclusive and `end` is exclusive. A missing bound leaves the
/// range open in that direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateRange {
    /// Start date (inclusive)
    pub start: Option<NaiveDate>,
    /// End date (exclusive)
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Create a new date range
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Create a range with no bounds
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a range covering `start` and every later date
    pub fn since(start: NaiveDate) -> Self {
        Self { start: Some(start), end: None }
    }

    /// Create a range covering every date before `end`
    pub fn until(end: NaiveDate) -> Self {
        Self { start: None, end: Some(end) }
    }

    /// Create a range covering exactly one day
    pub fn day(date: NaiveDate) -> Self {
        Self {
            start: Some(date),
            end: date.succ_opt(),
        }
    }

    /// Create a range for the last N days, today included
    pub fn last_days(days: i64) -> Self {
        let today = Local::now().date_naive();
        Self {
            start: Some(today - Duration::days(days - 1)),
            end: today.succ_opt(),
        }
    }

    /// Parse a range from optional `YYYY-MM-DD` bounds
    ///
    /// Bounds are checked before any file is touched. A bound that is not a
    /// valid date is an argument error.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self> {
        Ok(Self {
            start: start.map(|s| parse_bound(s, "start")).transpose()?,
            end: end.map(|s| parse_bound(s, "end")).transpose()?,
        })
    }

    /// Check whether `date` falls inside the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |start| date >= start)
            && self.end.map_or(true, |end| date < end)
    }

    /// Check whether the range has no bounds
    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Some(start) => write!(f, "[{}, ", start)?,
            None => write!(f, "(.., ")?,
        }
        match self.end {
            Some(end) => write!(f, "{})", end),
            None => write!(f, "..)"),
        }
    }
}

fn parse_bound(value: &str, which: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|e| {
        Error::argument(format!("Invalid {} date {:?}: {}", which, value, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_contains_is_half_open() {
        let range = DateRange::new(Some(date(2025, 9, 14)), Some(date(2025, 11, 12)));

        assert!(range.contains(date(2025, 9, 14)));
        assert!(range.contains(date(2025, 11, 11)));
        assert!(!range.contains(date(2025, 11, 12)));
        assert!(!range.contains(date(2025, 9, 13)));
    }

    #[test]
    fn test_open_bounds() {
        assert!(DateRange::all().contains(date(1, 1, 1)));
        assert!(DateRange::all().is_unbounded());

        let since = DateRange::since(date(2025, 1, 1));
        assert!(since.contains(date(9999, 12, 31)));
        assert!(!since.contains(date(2024, 12, 31)));

        let until = DateRange::until(date(2025, 1, 1));
        assert!(until.contains(date(1970, 1, 1)));
        assert!(!until.contains(date(2025, 1, 1)));
    }

    #[test]
    fn test_single_day_and_inverted_range() {
        let day = DateRange::day(date(2024, 2, 29));
        assert!(day.contains(date(2024, 2, 29)));
        assert!(!day.contains(date(2024, 3, 1)));
        assert!(!day.contains(date(2024, 2, 28)));

        // Inverted bounds select nothing rather than failing
        let inverted = DateRange::new(Some(date(2025, 2, 1)), Some(date(2025, 1, 1)));
        assert!(!inverted.contains(date(2025, 1, 15)));
    }

    #[test]
    fn test_last_days() {
        let today = Local::now().date_naive();
        let range = DateRange::last_days(7);
        assert!(range.contains(today));
        assert!(range.contains(today - Duration::days(6)));
        assert!(!range.contains(today - Duration::days(7)));
    }

    #[test]
    fn test_parse() -> Result<()> {
        let range = DateRange::parse(Some("2025-09-14"), None)?;
        assert_eq!(range, DateRange::since(date(2025, 9, 14)));

        let range = DateRange::parse(None, Some("2025-11-12"))?;
        assert_eq!(range, DateRange::until(date(2025, 11, 12)));

        assert!(DateRange::parse(None, None)?.is_unbounded());

        let err = DateRange::parse(Some("14/09/2025"), None).unwrap_err();
        assert!(err.is_argument_error());

        let err = DateRange::parse(Some("2025-09-14"), Some("2025-02-30")).unwrap_err();
        assert!(err.is_argument_error());
        assert!(err.to_string().contains("end"));
        Ok(())
    }

    #[test]
    fn test_display() {
        let range = DateRange::new(Some(date(2025, 1, 1)), Some(date(2025, 2, 1)));
        assert_eq!(range.to_string(), "[2025-01-01, 2025-02-01)");
        assert_eq!(DateRange::all().to_string(), "(.., ..)");
    }
}
