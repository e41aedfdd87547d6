//! Inclusive calendar date range used by the report filters.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::parse_iso_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// A range without bounds; every date passes
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Parse optional ISO bounds as they arrive from a report form.
    /// Blank strings count as unset.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, DateRangeError> {
        let start = parse_bound(start).map_err(DateRangeError::InvalidStartDate)?;
        let end = parse_bound(end).map_err(DateRangeError::InvalidEndDate)?;
        Ok(Self { start, end })
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        let after_start = self.start.map_or(true, |start| date >= start);
        let before_end = self.end.map_or(true, |end| date <= end);
        after_start && before_end
    }

    /// Check a stored ISO date string against the range.
    /// An unparseable date never satisfies a set bound.
    pub fn contains_iso(&self, date: &str) -> bool {
        if self.is_unbounded() {
            return true;
        }
        parse_iso_date(date).is_some_and(|date| self.contains(date))
    }
}

fn parse_bound(value: Option<&str>) -> Result<Option<NaiveDate>, String> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => parse_iso_date(raw).map(Some).ok_or_else(|| raw.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateRangeError {
    #[error("Invalid start date: {0} (expected YYYY-MM-DD)")]
    InvalidStartDate(String),
    #[error("Invalid end date: {0} (expected YYYY-MM-DD)")]
    InvalidEndDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = DateRange::new(Some(date(2023, 4, 10)), Some(date(2023, 6, 22)));
        assert!(range.contains(date(2023, 4, 10)));
        assert!(range.contains(date(2023, 6, 22)));
        assert!(!range.contains(date(2023, 4, 9)));
        assert!(!range.contains(date(2023, 6, 23)));
    }

    #[test]
    fn test_open_sides() {
        let from = DateRange::new(Some(date(2023, 5, 1)), None);
        assert!(from.contains(date(2030, 1, 1)));
        assert!(!from.contains(date(2023, 4, 30)));

        let until = DateRange::new(None, Some(date(2023, 5, 1)));
        assert!(until.contains(date(1990, 1, 1)));
        assert!(!until.contains(date(2023, 5, 2)));
    }

    #[test]
    fn test_parse_blank_bounds_as_unset() {
        let range = DateRange::parse(Some("  "), None).unwrap();
        assert!(range.is_unbounded());
    }

    #[test]
    fn test_parse_rejects_malformed_bounds() {
        assert_eq!(
            DateRange::parse(Some("2023-13-01"), None),
            Err(DateRangeError::InvalidStartDate("2023-13-01".to_string()))
        );
        assert_eq!(
            DateRange::parse(None, Some("yesterday")),
            Err(DateRangeError::InvalidEndDate("yesterday".to_string()))
        );
    }

    #[test]
    fn test_malformed_record_date_never_matches_a_bound() {
        let bounded = DateRange::new(Some(date(2000, 1, 1)), None);
        assert!(!bounded.contains_iso("not a date"));
        assert!(DateRange::unbounded().contains_iso("not a date"));
        assert!(bounded.contains_iso("2023-05-15"));
    }
}
