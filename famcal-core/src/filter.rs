//! Type and participant filters applied before date matching.
//!
//! Filter tokens come straight from UI state and may be stale. Parsing them
//! never fails: anything unrecognized turns into a filter that matches nothing.

use serde::{Deserialize, Serialize};

use crate::event::{CalendarEvent, EventType, ResponsibleParent};

const ALL_TOKEN: &str = "all";

/// Which event types to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(EventType),
    /// A token that names no known type; matches nothing.
    Unrecognized,
}

impl TypeFilter {
    pub fn from_token(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case(ALL_TOKEN) {
            return TypeFilter::All;
        }
        match token.parse::<EventType>() {
            Ok(event_type) => TypeFilter::Only(event_type),
            Err(_) => {
                tracing::debug!(token, "unrecognized event type filter");
                TypeFilter::Unrecognized
            }
        }
    }

    pub fn matches(&self, event_type: EventType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(wanted) => *wanted == event_type,
            TypeFilter::Unrecognized => false,
        }
    }
}

/// Which participant to keep events for.
///
/// `Schedule` events match on their responsible parent (`"primary"` or
/// `"secondary"`); every other type matches on family member ids.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParticipantFilter {
    #[default]
    All,
    Participant(String),
}

impl ParticipantFilter {
    pub fn from_token(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case(ALL_TOKEN) {
            ParticipantFilter::All
        } else {
            ParticipantFilter::Participant(token.to_string())
        }
    }

    pub fn matches(&self, event: &CalendarEvent) -> bool {
        let token = match self {
            ParticipantFilter::All => return true,
            ParticipantFilter::Participant(token) => token,
        };

        if event.event_type == EventType::Schedule {
            match (token.parse::<ResponsibleParent>(), event.responsible_parent) {
                (Ok(wanted), Some(parent)) => wanted == parent,
                _ => false,
            }
        } else {
            event.has_participant(token)
        }
    }
}

/// The full set of non-date filters for a query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventFilter {
    pub event_type: TypeFilter,
    /// Dropped regardless of `event_type` (e.g. schedules in dashboard counts)
    pub exclude_types: Vec<EventType>,
    pub participant: ParticipantFilter,
}

impl EventFilter {
    /// A filter that keeps everything.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, event_type: TypeFilter) -> Self {
        self.event_type = event_type;
        self
    }

    pub fn excluding(mut self, event_type: EventType) -> Self {
        if !self.exclude_types.contains(&event_type) {
            self.exclude_types.push(event_type);
        }
        self
    }

    pub fn with_participant(mut self, participant: ParticipantFilter) -> Self {
        self.participant = participant;
        self
    }

    pub fn matches_type(&self, event_type: EventType) -> bool {
        self.event_type.matches(event_type) && !self.exclude_types.contains(&event_type)
    }

    pub fn matches(&self, event: &CalendarEvent) -> bool {
        self.matches_type(event.event_type) && self.participant.matches(event)
    }
}

/// Plain-token form of [`EventFilter`], as stored in UI state or config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterTokens {
    pub type_filter: String,
    pub exclude_types: Vec<String>,
    pub participant_filter: String,
}

impl Default for FilterTokens {
    fn default() -> Self {
        FilterTokens {
            type_filter: ALL_TOKEN.to_string(),
            exclude_types: Vec::new(),
            participant_filter: ALL_TOKEN.to_string(),
        }
    }
}

impl From<&FilterTokens> for EventFilter {
    /// Unknown exclusion tokens are ignored: excluding a type that does not
    /// exist removes nothing.
    fn from(tokens: &FilterTokens) -> Self {
        EventFilter {
            event_type: TypeFilter::from_token(&tokens.type_filter),
            exclude_types: tokens
                .exclude_types
                .iter()
                .filter_map(|t| t.parse::<EventType>().ok())
                .collect(),
            participant: ParticipantFilter::from_token(&tokens.participant_filter),
        }
    }
}

/// Keep events whose type passes `filter`'s type and exclusion rules.
pub fn filter_by_type<'a>(
    events: &'a [CalendarEvent],
    filter: &'a EventFilter,
) -> impl Iterator<Item = &'a CalendarEvent> + 'a {
    events.iter().filter(move |e| filter.matches_type(e.event_type))
}

/// Keep events that belong to `participant`.
pub fn filter_by_participant<'a>(
    events: &'a [CalendarEvent],
    participant: &'a ParticipantFilter,
) -> impl Iterator<Item = &'a CalendarEvent> + 'a {
    events.iter().filter(move |e| participant.matches(e))
}
