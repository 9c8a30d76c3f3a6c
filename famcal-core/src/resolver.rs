//! Resolution of an event's raw date fields into a single date range.
//!
//! Field precedence, first match wins:
//!
//! 1. School_Event / School_Holiday with `eventDate` and `endDate`: `eventDate..=endDate`
//! 2. `startDate` and `endDate`: `startDate..=endDate`
//! 3. `eventDate`: that single day
//! 4. nothing resolvable
//!
//! A rule is chosen on field presence alone. If the chosen rule's fields do not
//! parse, the event has no range; later rules are not tried.

use crate::date_only::DateOnly;
use crate::date_range::DateRange;
use crate::event::CalendarEvent;

/// Which precedence rule produced a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSource {
    SchoolEventDates,
    StartEndDates,
    EventDate,
}

/// Resolve the inclusive date range an event covers.
///
/// Returns `None` for events with no usable date fields; such events never
/// appear in date-based queries.
pub fn resolve(event: &CalendarEvent) -> Option<DateRange> {
    resolve_with_source(event).map(|(range, _)| range)
}

/// Like [`resolve`], also reporting which rule applied.
pub fn resolve_with_source(event: &CalendarEvent) -> Option<(DateRange, RangeSource)> {
    let event_date = present(&event.event_date);
    let start_date = present(&event.start_date);
    let end_date = present(&event.end_date);

    let (start, end, source) = match (event_date, start_date, end_date) {
        (Some(first), _, Some(last)) if event.event_type.uses_event_date_range() => {
            (first, last, RangeSource::SchoolEventDates)
        }
        (_, Some(first), Some(last)) => (first, last, RangeSource::StartEndDates),
        (Some(day), _, _) => (day, day, RangeSource::EventDate),
        _ => {
            tracing::trace!(id = %event.id, "event has no date fields");
            return None;
        }
    };

    match (DateOnly::normalize(start), DateOnly::normalize(end)) {
        (Some(start), Some(end)) => Some((DateRange::new(start, end), source)),
        _ => {
            tracing::debug!(id = %event.id, start, end, "event dates do not parse");
            None
        }
    }
}

/// Whether the event spans more than one calendar day.
pub fn is_multi_day(range: &DateRange) -> bool {
    range.is_multi_day()
}

/// Empty strings count as missing.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;

    fn date(y: i32, m: u32, d: u32) -> DateOnly {
        DateOnly::from_ymd(y, m, d).unwrap()
    }

    fn event(
        event_type: EventType,
        event_date: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> CalendarEvent {
        let mut e = CalendarEvent::new("e", event_type);
        e.event_date = event_date.map(String::from);
        e.start_date = start_date.map(String::from);
        e.end_date = end_date.map(String::from);
        e
    }

    #[test]
    fn test_school_event_prefers_event_date_over_start_date() {
        let e = event(
            EventType::SchoolEvent,
            Some("2024-09-02T00:00:00.000Z"),
            Some("2024-08-01T00:00:00.000Z"),
            Some("2024-09-04T00:00:00.000Z"),
        );

        let (range, source) = resolve_with_source(&e).expect("Should resolve");
        assert_eq!(source, RangeSource::SchoolEventDates);
        assert_eq!(range.start(), date(2024, 9, 2));
        assert_eq!(range.end(), date(2024, 9, 4));
    }

    #[test]
    fn test_school_holiday_uses_event_date_range() {
        let e = event(
            EventType::SchoolHoliday,
            Some("2024-12-23T00:00:00.000Z"),
            None,
            Some("2025-01-03T00:00:00.000Z"),
        );

        let range = resolve(&e).expect("Should resolve");
        assert_eq!(range.start(), date(2024, 12, 23));
        assert_eq!(range.end(), date(2025, 1, 3));
        assert!(is_multi_day(&range));
    }

    #[test]
    fn test_other_types_ignore_event_date_with_end_date() {
        // Only school types pair eventDate with endDate
        let e = event(
            EventType::Activity,
            Some("2024-09-02T00:00:00.000Z"),
            None,
            Some("2024-09-04T00:00:00.000Z"),
        );

        let (range, source) = resolve_with_source(&e).expect("Should resolve");
        assert_eq!(source, RangeSource::EventDate);
        assert_eq!(range, DateRange::single(date(2024, 9, 2)));
    }

    #[test]
    fn test_start_and_end_dates() {
        let e = event(
            EventType::Schedule,
            None,
            Some("2024-08-24T00:00:00.000Z"),
            Some("2024-08-25T00:00:00.000Z"),
        );

        let (range, source) = resolve_with_source(&e).expect("Should resolve");
        assert_eq!(source, RangeSource::StartEndDates);
        assert_eq!(range.start(), date(2024, 8, 24));
        assert_eq!(range.end(), date(2024, 8, 25));
    }

    #[test]
    fn test_start_end_beats_event_date_for_non_school_types() {
        let e = event(
            EventType::Personal,
            Some("2024-01-01T00:00:00.000Z"),
            Some("2024-08-24T00:00:00.000Z"),
            Some("2024-08-25T00:00:00.000Z"),
        );

        let range = resolve(&e).expect("Should resolve");
        assert_eq!(range.start(), date(2024, 8, 24));
    }

    #[test]
    fn test_event_date_only_is_single_day() {
        let e = event(EventType::Holiday, Some("2025-06-26T19:00:00.000Z"), None, None);

        let range = resolve(&e).expect("Should resolve");
        assert_eq!(range, DateRange::single(date(2025, 6, 26)));
        assert!(!is_multi_day(&range));
    }

    #[test]
    fn test_start_date_without_end_falls_back_to_event_date() {
        let e = event(
            EventType::Medical,
            Some("2024-05-10T00:00:00.000Z"),
            Some("2024-05-01T00:00:00.000Z"),
            None,
        );

        let (range, source) = resolve_with_source(&e).expect("Should resolve");
        assert_eq!(source, RangeSource::EventDate);
        assert_eq!(range, DateRange::single(date(2024, 5, 10)));
    }

    #[test]
    fn test_no_date_fields_resolves_to_none() {
        assert_eq!(resolve(&event(EventType::Personal, None, None, None)), None);
        assert_eq!(
            resolve(&event(EventType::Personal, None, Some("2024-05-01"), None)),
            None
        );
        assert_eq!(
            resolve(&event(EventType::Personal, Some(""), None, Some("  "))),
            None
        );
    }

    #[test]
    fn test_unparseable_dates_resolve_to_none() {
        let e = event(EventType::Personal, None, Some("soon"), Some("2024-05-01"));
        assert_eq!(resolve(&e), None);

        let e = event(EventType::Holiday, Some("2024-02-30T00:00:00Z"), None, None);
        assert_eq!(resolve(&e), None);
    }

    #[test]
    fn test_inverted_range_collapses_to_start() {
        let e = event(
            EventType::Activity,
            None,
            Some("2024-08-25T00:00:00.000Z"),
            Some("2024-08-20T00:00:00.000Z"),
        );

        let range = resolve(&e).expect("Should resolve");
        assert_eq!(range, DateRange::single(date(2024, 8, 25)));
    }
}
