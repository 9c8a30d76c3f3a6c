//! Inclusive date ranges for events and query windows.

use std::fmt;

use serde::Serialize;

use crate::date_only::DateOnly;
use crate::matcher;

/// An inclusive `[start, end]` pair of dates. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: DateOnly,
    end: DateOnly,
}

impl DateRange {
    /// Build a range, collapsing to the single day `start` when `end` comes
    /// before it.
    pub fn new(start: DateOnly, end: DateOnly) -> Self {
        if end < start {
            tracing::debug!(%start, %end, "end precedes start, collapsing to a single day");
            return Self::single(start);
        }
        DateRange { start, end }
    }

    pub fn single(day: DateOnly) -> Self {
        DateRange {
            start: day,
            end: day,
        }
    }

    /// The Sunday-to-Saturday week containing `day`.
    pub fn week_of(day: DateOnly) -> Self {
        let start = day.start_of_week();
        DateRange {
            start,
            end: start.add_days(6),
        }
    }

    /// The seven days beginning at `week_start`, whatever weekday it is.
    pub fn week_from(week_start: DateOnly) -> Self {
        DateRange {
            start: week_start,
            end: week_start.add_days(6),
        }
    }

    pub fn month_of(day: DateOnly) -> Self {
        DateRange {
            start: day.start_of_month(),
            end: day.end_of_month(),
        }
    }

    pub fn start(&self) -> DateOnly {
        self.start
    }

    pub fn end(&self) -> DateOnly {
        self.end
    }

    pub fn is_multi_day(&self) -> bool {
        self.start != self.end
    }

    pub fn contains_day(&self, day: DateOnly) -> bool {
        matcher::contains_day(self, day)
    }

    pub fn overlaps(&self, other: &DateRange) -> bool {
        matcher::overlaps(self, other)
    }

    /// Number of days covered, counting both ends.
    pub fn len_days(&self) -> i64 {
        self.start.days_until(self.end) + 1
    }

    /// Every day in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = DateOnly> {
        let start = self.start;
        (0..self.len_days()).map(move |i| start.add_days(i))
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_multi_day() {
            write!(f, "{} - {}", self.start, self.end)
        } else {
            write!(f, "{}", self.start)
        }
    }
}
