use anyhow::Result;
use famcal_core::{CalendarEvent, DashboardCounts, DateOnly, EventFilter, dashboard_counts};
use owo_colors::OwoColorize;

use crate::render::pluralize;

/// Dashboard counters for `day` and its week.
pub fn run(events: &[CalendarEvent], day: DateOnly, filter: &EventFilter) -> Result<()> {
    let counts = dashboard_counts(events, day, filter);
    tracing::debug!(%day, ?counts, "dashboard counts");

    for line in lines(&counts, day) {
        println!("{}", line);
    }
    Ok(())
}

fn lines(counts: &DashboardCounts, day: DateOnly) -> Vec<String> {
    let week_start = day.start_of_week();

    vec![
        format!(
            "{} {} on {}",
            counts.today.bold(),
            pluralize("event", counts.today),
            day
        ),
        format!(
            "{} {} in the week of {}",
            counts.this_week.bold(),
            pluralize("event", counts.this_week),
            week_start
        ),
    ]
}
