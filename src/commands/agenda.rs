use anyhow::Result;
use famcal_core::{CalendarEvent, DateOnly, DateRange, EventFilter, group_by_day, query_window};
use owo_colors::OwoColorize;

use crate::render::{Render, format_date_label, pluralize};

/// List events in `window`, grouped under a heading per day.
pub fn run(events: &[CalendarEvent], window: DateRange, filter: &EventFilter) -> Result<()> {
    for line in lines(events, &window, DateOnly::today(), filter) {
        println!("{}", line);
    }
    Ok(())
}

fn lines(
    events: &[CalendarEvent],
    window: &DateRange,
    today: DateOnly,
    filter: &EventFilter,
) -> Vec<String> {
    let grouped = group_by_day(events, window, filter);

    if grouped.is_empty() {
        return vec!["No events found".dimmed().to_string()];
    }

    let mut lines = Vec::new();
    for (day, found) in &grouped {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format_date_label(*day, today).bold().to_string());
        lines.extend(found.iter().map(|event| event.render()));
    }

    // Distinct events, so a three-day trip counts once
    let total = query_window(events, window, filter).len();
    lines.push(String::new());
    lines.push(
        format!("{} {} ({})", total, pluralize("event", total), window)
            .dimmed()
            .to_string(),
    );

    lines
}
