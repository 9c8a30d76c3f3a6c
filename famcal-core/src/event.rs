//! Family calendar event records.
//!
//! These mirror the upstream event API's JSON shape. Date fields are kept as
//! the raw strings the API sent; their meaning depends on [`EventType`] and is
//! interpreted only by [`crate::resolver`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{FamcalError, FamcalResult};

/// A calendar event as delivered by the event API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub event_type: EventType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    // Dates (ISO date-time strings, truncated to the calendar date when read)
    /// Single day, or the first day of a School_Event/School_Holiday range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    // Clock times (display only, start_time is also the sort key)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    // Participants
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub family_members: Vec<String>,
    /// Only meaningful for `Schedule` events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_parent: Option<ResponsibleParent>,

    // Descriptive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
}

impl CalendarEvent {
    pub fn new(id: impl Into<String>, event_type: EventType) -> Self {
        CalendarEvent {
            id: id.into(),
            event_type,
            title: None,
            event_date: None,
            start_date: None,
            end_date: None,
            start_time: None,
            end_time: None,
            family_members: Vec::new(),
            responsible_parent: None,
            location: None,
            description: None,
            color: None,
            school: None,
        }
    }

    /// Clock time used for ordering; events without one sort as midnight.
    ///
    /// A blank `startTime` counts as missing.
    pub fn sort_time(&self) -> &str {
        self.start_time
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("00:00")
    }

    pub fn has_participant(&self, member: &str) -> bool {
        self.family_members.iter().any(|m| m == member)
    }
}

impl fmt::Display for CalendarEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.title {
            Some(title) => write!(f, "{}", title),
            None => write!(f, "({} event)", self.event_type),
        }
    }
}

/// The API sends `null` for events nobody was tagged on.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// The closed set of event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Personal,
    School,
    #[serde(rename = "School_Event")]
    SchoolEvent,
    #[serde(rename = "School_Holiday")]
    SchoolHoliday,
    Activity,
    Holiday,
    Medical,
    Schedule,
}

impl EventType {
    pub const ALL: [EventType; 8] = [
        EventType::Personal,
        EventType::School,
        EventType::SchoolEvent,
        EventType::SchoolHoliday,
        EventType::Activity,
        EventType::Holiday,
        EventType::Medical,
        EventType::Schedule,
    ];

    /// The name the event API uses for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Personal => "Personal",
            EventType::School => "School",
            EventType::SchoolEvent => "School_Event",
            EventType::SchoolHoliday => "School_Holiday",
            EventType::Activity => "Activity",
            EventType::Holiday => "Holiday",
            EventType::Medical => "Medical",
            EventType::Schedule => "Schedule",
        }
    }

    /// School event and holiday records may carry a range as
    /// `eventDate`..`endDate`, which takes precedence over `startDate`.
    pub fn uses_event_date_range(&self) -> bool {
        matches!(self, EventType::SchoolEvent | EventType::SchoolHoliday)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EventType {
    type Err = FamcalError;

    /// Accepts the API name, case-insensitively.
    fn from_str(s: &str) -> FamcalResult<Self> {
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FamcalError::UnknownEventType(s.to_string()))
    }
}

/// Which parent a `Schedule` event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponsibleParent {
    Primary,
    Secondary,
}

impl FromStr for ResponsibleParent {
    type Err = FamcalError;

    fn from_str(s: &str) -> FamcalResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(ResponsibleParent::Primary),
            "secondary" => Ok(ResponsibleParent::Secondary),
            _ => Err(FamcalError::UnknownParent(s.to_string())),
        }
    }
}
