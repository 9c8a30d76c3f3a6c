use anyhow::Result;
use famcal_core::{CalendarEvent, DateOnly, EventFilter, query_for_day};

use crate::render::render_day;

pub fn run(events: &[CalendarEvent], day: DateOnly, filter: &EventFilter) -> Result<()> {
    for line in lines(events, day, DateOnly::today(), filter) {
        println!("{}", line);
    }
    Ok(())
}

fn lines(
    events: &[CalendarEvent],
    day: DateOnly,
    today: DateOnly,
    filter: &EventFilter,
) -> Vec<String> {
    let found = query_for_day(events, day, filter);
    tracing::debug!(%day, count = found.len(), "day query");
    render_day(day, today, &found)
}
