//! Day, week, and range queries over an in-memory event list.
//!
//! Every function here is pure: it borrows the event slice, returns references
//! into it, and never mutates or clones an event. Results of the `query_for_*`
//! functions are ordered by start time, with ties kept in input order. Each
//! event appears at most once per result, however many days of the window it
//! covers.

use serde::Serialize;

use crate::date_only::DateOnly;
use crate::date_range::DateRange;
use crate::event::CalendarEvent;
use crate::filter::EventFilter;
use crate::resolver;

/// Events passing `filter`, paired with their resolved ranges. Events without
/// a range are dropped here.
fn resolved<'a>(
    events: &'a [CalendarEvent],
    filter: &EventFilter,
) -> impl Iterator<Item = (&'a CalendarEvent, DateRange)> {
    events
        .iter()
        .filter(move |event| filter.matches(event))
        .filter_map(|event| resolver::resolve(event).map(|range| (event, range)))
}

/// Sort by `startTime` as a plain string, missing times first as `"00:00"`.
///
/// The sort is stable: events with equal times keep their input order.
pub fn sort_by_start_time(events: &mut [&CalendarEvent]) {
    events.sort_by(|a, b| a.sort_time().cmp(b.sort_time()));
}

/// Events active on `day`.
pub fn query_for_day<'a>(
    events: &'a [CalendarEvent],
    day: DateOnly,
    filter: &EventFilter,
) -> Vec<&'a CalendarEvent> {
    let mut found: Vec<_> = resolved(events, filter)
        .filter(|(_, range)| range.contains_day(day))
        .map(|(event, _)| event)
        .collect();

    sort_by_start_time(&mut found);
    found
}

/// Events overlapping the seven days starting at `week_start`.
pub fn query_for_week<'a>(
    events: &'a [CalendarEvent],
    week_start: DateOnly,
    filter: &EventFilter,
) -> Vec<&'a CalendarEvent> {
    query_window(events, &DateRange::week_from(week_start), filter)
}

/// Events overlapping `start..=end`. An inverted window collapses to `start`.
pub fn query_for_range<'a>(
    events: &'a [CalendarEvent],
    start: DateOnly,
    end: DateOnly,
    filter: &EventFilter,
) -> Vec<&'a CalendarEvent> {
    query_window(events, &DateRange::new(start, end), filter)
}

/// Events overlapping `window`.
pub fn query_window<'a>(
    events: &'a [CalendarEvent],
    window: &DateRange,
    filter: &EventFilter,
) -> Vec<&'a CalendarEvent> {
    let mut found: Vec<_> = resolved(events, filter)
        .filter(|(_, range)| range.overlaps(window))
        .map(|(event, _)| event)
        .collect();

    sort_by_start_time(&mut found);
    found
}

/// Whether any event is active on `day`. Stops at the first match.
pub fn has_events_on_day(events: &[CalendarEvent], day: DateOnly, filter: &EventFilter) -> bool {
    resolved(events, filter).any(|(_, range)| range.contains_day(day))
}

/// Whether an event spanning several days is active on `day`.
pub fn has_multi_day_event_on_day(
    events: &[CalendarEvent],
    day: DateOnly,
    filter: &EventFilter,
) -> bool {
    resolved(events, filter)
        .any(|(_, range)| resolver::is_multi_day(&range) && range.contains_day(day))
}

/// Each day in `window` that has events, with that day's sorted events.
///
/// A multi-day event is listed under every day it covers.
pub fn group_by_day<'a>(
    events: &'a [CalendarEvent],
    window: &DateRange,
    filter: &EventFilter,
) -> Vec<(DateOnly, Vec<&'a CalendarEvent>)> {
    // Resolve once, then bucket per day
    let candidates: Vec<_> = resolved(events, filter)
        .filter(|(_, range)| range.overlaps(window))
        .collect();

    window
        .days()
        .filter_map(|day| {
            let mut on_day: Vec<_> = candidates
                .iter()
                .filter(|(_, range)| range.contains_day(day))
                .map(|(event, _)| *event)
                .collect();

            if on_day.is_empty() {
                return None;
            }
            sort_by_start_time(&mut on_day);
            Some((day, on_day))
        })
        .collect()
}

/// Event counts for a dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DashboardCounts {
    pub today: usize,
    pub this_week: usize,
}

/// Count events on `today` and in the Sunday-start week containing it.
///
/// Callers typically exclude `Schedule` events via the filter.
pub fn dashboard_counts(
    events: &[CalendarEvent],
    today: DateOnly,
    filter: &EventFilter,
) -> DashboardCounts {
    DashboardCounts {
        today: query_for_day(events, today, filter).len(),
        this_week: query_for_week(events, today.start_of_week(), filter).len(),
    }
}

/// Indicator markers for one cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayIndicator {
    pub date: DateOnly,
    pub has_events: bool,
    pub has_multi_day: bool,
}

/// Indicators for every day of the month containing `day`.
pub fn month_indicators(
    events: &[CalendarEvent],
    day: DateOnly,
    filter: &EventFilter,
) -> Vec<DayIndicator> {
    DateRange::month_of(day)
        .days()
        .map(|date| DayIndicator {
            date,
            has_events: has_events_on_day(events, date, filter),
            has_multi_day: has_multi_day_event_on_day(events, date, filter),
        })
        .collect()
}
