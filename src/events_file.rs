//! Loading events exported from the family organizer.

use std::path::Path;

use anyhow::{Context, Result};
use famcal_core::CalendarEvent;

/// Read a JSON array of events.
///
/// Records that do not match the event shape (unknown type, missing id) are
/// skipped with a warning so one bad record does not hide the rest.
pub fn load_events(path: &Path) -> Result<Vec<CalendarEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read events file {}", path.display()))?;

    parse_events(&content).with_context(|| format!("Invalid events file {}", path.display()))
}

pub fn parse_events(content: &str) -> Result<Vec<CalendarEvent>> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(content).context("Expected a JSON array of events")?;

    let events = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(event) => Some(event),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed event record");
                None
            }
        })
        .collect();

    Ok(events)
}
