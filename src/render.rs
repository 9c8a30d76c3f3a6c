//! Terminal rendering for famcal-core types.
//!
//! Extension traits that add colored output to core types using owo_colors.

use famcal_core::{CalendarEvent, DateOnly, DateRange, EventType, resolver};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventType {
    fn render(&self) -> String {
        let label = format!("[{}]", self);
        match self {
            EventType::Medical => label.red().to_string(),
            EventType::School | EventType::SchoolEvent | EventType::SchoolHoliday => {
                label.blue().to_string()
            }
            EventType::Activity => label.green().to_string(),
            EventType::Holiday => label.yellow().to_string(),
            EventType::Schedule => label.magenta().to_string(),
            EventType::Personal => label.cyan().to_string(),
        }
    }
}

impl Render for CalendarEvent {
    fn render(&self) -> String {
        let mut line = format!(
            "  {} {} {}",
            format_time(self),
            self.bold(),
            self.event_type.render()
        );

        if let Some(range) = resolver::resolve(self).filter(DateRange::is_multi_day) {
            line.push_str(&format!(" {}", format_span(&range).dimmed()));
        }

        if let Some(location) = &self.location {
            line.push_str(&format!(" {}", format!("@ {}", location).dimmed()));
        }

        line
    }
}

/// A day heading relative to `today` (e.g. "Today", "Tomorrow", "Wed Feb 25")
pub fn format_date_label(date: DateOnly, today: DateOnly) -> String {
    match today.days_until(date) {
        -1 => "Yesterday".to_string(),
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.as_naive().format("%a %b %-d").to_string(),
    }
}

/// Start time right-aligned, or "all-day" for untimed events.
fn format_time(event: &CalendarEvent) -> String {
    match (&event.start_time, &event.end_time) {
        (Some(start), Some(end)) => format!("{:>13}", format!("{}-{}", start, end)),
        (Some(start), None) => format!("{:>13}", start),
        _ => format!("{:>13}", "all-day"),
    }
}

fn format_span(range: &DateRange) -> String {
    format!(
        "({} - {})",
        range.start().as_naive().format("%b %-d"),
        range.end().as_naive().format("%b %-d")
    )
}

/// Render one day's events under a heading.
pub fn render_day(date: DateOnly, today: DateOnly, events: &[&CalendarEvent]) -> Vec<String> {
    let mut lines = vec![format_date_label(date, today).bold().to_string()];

    if events.is_empty() {
        lines.push(format!("  {}", "No events".dimmed()));
    } else {
        lines.extend(events.iter().map(|event| event.render()));
    }

    lines
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
