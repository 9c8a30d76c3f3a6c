//! Calendar dates without time-of-day or timezone.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{FamcalError, FamcalResult};

/// A calendar date (year, month, day) with no time-of-day or offset.
///
/// Ordering is chronological, so `compare`/`equals` are plain `Ord`/`Eq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateOnly(NaiveDate);

impl DateOnly {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(DateOnly)
    }

    /// Truncate an ISO date-time string to the calendar date it is labeled with.
    ///
    /// Only the `YYYY-MM-DD` prefix before the time separator is read, and the
    /// date is built from those three integers directly. The offset is never
    /// applied: `"2025-06-26T19:00:00.000Z"` is June 26 for every viewer.
    ///
    /// Returns `None` when the prefix is not a valid date.
    pub fn normalize(iso: &str) -> Option<Self> {
        let prefix = iso.trim().split(['T', 't', ' ']).next()?;

        let mut parts = prefix.splitn(3, '-');
        let year = parts.next()?.parse::<i32>().ok()?;
        let month = parts.next()?.parse::<u32>().ok()?;
        let day = parts.next()?.parse::<u32>().ok()?;

        Self::from_ymd(year, month, day)
    }

    /// Current calendar date in the local timezone.
    pub fn today() -> Self {
        DateOnly(Local::now().date_naive())
    }

    /// Shift by `n` days (negative moves backwards), saturating at the
    /// representable bounds.
    pub fn add_days(self, n: i64) -> Self {
        match self.0.checked_add_signed(Duration::days(n)) {
            Some(date) => DateOnly(date),
            None if n > 0 => DateOnly(NaiveDate::MAX),
            None => DateOnly(NaiveDate::MIN),
        }
    }

    /// The Sunday on or before this date.
    pub fn start_of_week(self) -> Self {
        let offset = self.0.weekday().num_days_from_sunday();
        self.add_days(-i64::from(offset))
    }

    /// The Saturday on or after this date.
    pub fn end_of_week(self) -> Self {
        self.start_of_week().add_days(6)
    }

    pub fn start_of_month(self) -> Self {
        DateOnly(self.0.with_day(1).unwrap_or(self.0))
    }

    pub fn end_of_month(self) -> Self {
        let first = self.start_of_month().0;
        let next_month = if first.month() == 12 {
            NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
        };

        match next_month {
            Some(next) => DateOnly(next).add_days(-1),
            None => DateOnly(NaiveDate::MAX),
        }
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(self, other: DateOnly) -> i64 {
        (other.0 - self.0).num_days()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateOnly {
    fn from(date: NaiveDate) -> Self {
        DateOnly(date)
    }
}

impl FromStr for DateOnly {
    type Err = FamcalError;

    /// Strict `YYYY-MM-DD` parsing for user input. Unlike [`DateOnly::normalize`],
    /// trailing time components are rejected.
    fn from_str(s: &str) -> FamcalResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(DateOnly)
            .map_err(|_| FamcalError::InvalidDate(s.to_string()))
    }
}

impl fmt::Display for DateOnly {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> DateOnly {
        DateOnly::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_normalize_ignores_time_and_offset() {
        assert_eq!(
            DateOnly::normalize("2025-06-26T19:00:00.000Z"),
            Some(date(2025, 6, 26))
        );
        assert_eq!(
            DateOnly::normalize("2024-08-24T00:00:00.000Z"),
            Some(date(2024, 8, 24))
        );
        assert_eq!(
            DateOnly::normalize("2024-08-24T23:30:00-07:00"),
            Some(date(2024, 8, 24))
        );
    }

    #[test]
    fn test_normalize_accepts_bare_date_and_space_separator() {
        assert_eq!(DateOnly::normalize("2024-02-29"), Some(date(2024, 2, 29)));
        assert_eq!(
            DateOnly::normalize("2024-02-29 10:15:00"),
            Some(date(2024, 2, 29))
        );
    }

    #[test]
    fn test_normalize_accepts_lowercase_separator() {
        assert_eq!(
            DateOnly::normalize("2024-08-24t10:00:00z"),
            Some(date(2024, 8, 24))
        );
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert_eq!(DateOnly::normalize(""), None);
        assert_eq!(DateOnly::normalize("not a date"), None);
        assert_eq!(DateOnly::normalize("2023-02-29T00:00:00Z"), None);
        assert_eq!(DateOnly::normalize("2024-13-01"), None);
        assert_eq!(DateOnly::normalize("2024-08"), None);
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(2024, 8, 24) < date(2024, 8, 25));
        assert!(date(2023, 12, 31) < date(2024, 1, 1));
        assert_eq!(
            date(2024, 8, 24),
            DateOnly::normalize("2024-08-24T12:00:00Z").unwrap()
        );
    }

    #[test]
    fn test_add_days_crosses_month_and_year() {
        assert_eq!(date(2024, 2, 28).add_days(1), date(2024, 2, 29));
        assert_eq!(date(2024, 12, 31).add_days(1), date(2025, 1, 1));
        assert_eq!(date(2025, 1, 1).add_days(-1), date(2024, 12, 31));
    }

    #[test]
    fn test_start_of_week_is_sunday() {
        // 2024-08-18 is a Sunday
        assert_eq!(date(2024, 8, 18).start_of_week(), date(2024, 8, 18));
        assert_eq!(date(2024, 8, 21).start_of_week(), date(2024, 8, 18));
        assert_eq!(date(2024, 8, 24).start_of_week(), date(2024, 8, 18));
        assert_eq!(date(2024, 8, 24).end_of_week(), date(2024, 8, 24));
        assert_eq!(date(2024, 8, 25).start_of_week(), date(2024, 8, 25));
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(date(2024, 2, 10).start_of_month(), date(2024, 2, 1));
        assert_eq!(date(2024, 2, 10).end_of_month(), date(2024, 2, 29));
        assert_eq!(date(2024, 12, 5).end_of_month(), date(2024, 12, 31));
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("2024-08-24".parse::<DateOnly>(), Ok(date(2024, 8, 24)));
        assert_eq!(
            "2024-08-24T10:00:00Z".parse::<DateOnly>(),
            Err(FamcalError::InvalidDate("2024-08-24T10:00:00Z".to_string()))
        );
        assert!("tomorrow".parse::<DateOnly>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_normalize() {
        let d = date(2024, 3, 7);
        assert_eq!(d.to_string(), "2024-03-07");
        assert_eq!(DateOnly::normalize(&d.to_string()), Some(d));
    }

    #[test]
    fn test_days_until() {
        assert_eq!(date(2024, 8, 18).days_until(date(2024, 8, 24)), 6);
        assert_eq!(date(2024, 8, 24).days_until(date(2024, 8, 18)), -6);
    }
}
