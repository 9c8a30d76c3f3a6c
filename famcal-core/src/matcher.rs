//! Closed-interval predicates over date ranges.

use crate::date_only::DateOnly;
use crate::date_range::DateRange;

/// Whether `day` falls inside `range`, both ends inclusive.
pub fn contains_day(range: &DateRange, day: DateOnly) -> bool {
    day >= range.start() && day <= range.end()
}

/// Whether `range` and `query` share at least one day.
///
/// An event only partially inside the query window still counts.
pub fn overlaps(range: &DateRange, query: &DateRange) -> bool {
    range.start() <= query.end() && range.end() >= query.start()
}
