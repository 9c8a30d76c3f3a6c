//! Date-range resolution and query engine for family calendar events.
//!
//! Events arrive from the event API with inconsistent date fields: a single
//! `eventDate`, a `startDate`/`endDate` pair, or for school events an
//! `eventDate`/`endDate` pair. This crate turns each one into an inclusive
//! [`DateRange`] of [`DateOnly`] values and answers day, week, and range
//! queries over an in-memory list:
//! - `date_only` / `date_range`: timezone-free calendar dates and ranges
//! - `resolver`: field precedence for an event's range
//! - `matcher`: containment and overlap predicates
//! - `filter`: type and participant filters
//! - `aggregator`: the query functions screens call
//!
//! Nothing here performs I/O or keeps state between calls.

pub mod aggregator;
pub mod date_only;
pub mod date_range;
pub mod error;
pub mod event;
pub mod filter;
pub mod matcher;
pub mod resolver;

pub use aggregator::{
    DashboardCounts, DayIndicator, dashboard_counts, group_by_day, has_events_on_day,
    has_multi_day_event_on_day, month_indicators, query_for_day, query_for_range,
    query_for_week, query_window, sort_by_start_time,
};
pub use date_only::DateOnly;
pub use date_range::DateRange;
pub use error::{FamcalError, FamcalResult};
pub use event::{CalendarEvent, EventType, ResponsibleParent};
pub use filter::{EventFilter, FilterTokens, ParticipantFilter, TypeFilter};
