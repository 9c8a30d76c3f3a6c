use anyhow::Result;
use famcal_core::{CalendarEvent, DateOnly, DayIndicator, EventFilter, month_indicators};
use owo_colors::OwoColorize;

const MULTI_DAY_MARKER: char = '═';
const EVENT_MARKER: char = '•';

/// Month grid with a marker on every day that has events.
pub fn run(events: &[CalendarEvent], day: DateOnly, filter: &EventFilter) -> Result<()> {
    let grid = month_indicators(events, day, filter);

    for line in lines(&grid, DateOnly::today()) {
        println!("{}", line);
    }
    Ok(())
}

fn lines(grid: &[DayIndicator], today: DateOnly) -> Vec<String> {
    let Some(first) = grid.first() else {
        return Vec::new();
    };

    let mut lines = vec![
        first.date.as_naive().format("%B %Y").to_string().bold().to_string(),
        " Su   Mo   Tu   We   Th   Fr   Sa".dimmed().to_string(),
    ];

    // Pad the first week up to the month's first weekday
    let mut cells: Vec<String> =
        vec!["    ".to_string(); first.date.weekday().num_days_from_sunday() as usize];

    for cell in grid {
        cells.push(render_cell(cell, today));
        if cells.len() == 7 {
            lines.push(cells.join(" ").trim_end().to_string());
            cells.clear();
        }
    }
    if !cells.is_empty() {
        lines.push(cells.join(" ").trim_end().to_string());
    }

    lines.push(String::new());
    lines.push(
        format!("{} events  {} multi-day", EVENT_MARKER, MULTI_DAY_MARKER)
            .dimmed()
            .to_string(),
    );

    lines
}

/// Four columns wide: day number plus marker.
fn render_cell(cell: &DayIndicator, today: DateOnly) -> String {
    let marker = if cell.has_multi_day {
        MULTI_DAY_MARKER
    } else if cell.has_events {
        EVENT_MARKER
    } else {
        ' '
    };

    let number = format!("{:>3}", cell.date.day());
    if cell.date == today {
        format!("{}{}", number.reversed(), marker)
    } else {
        format!("{}{}", number, marker)
    }
}
