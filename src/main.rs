mod commands;
mod config;
mod events_file;
mod logging;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use famcal_core::{DateOnly, DateRange, EventFilter, EventType, ParticipantFilter, TypeFilter};

use crate::config::FamcalConfig;

#[derive(Parser)]
#[command(name = "famcal")]
#[command(about = "Show family calendar events by day, week, or date range")]
struct Cli {
    /// Events file (JSON array). Defaults to `events_file` from the config
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(flatten)]
    filters: FilterArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FilterArgs {
    /// Only show this event type (e.g. "Medical", "School_Event"), or "all"
    #[arg(long = "type", global = true, default_value = "all")]
    event_type: String,

    /// Hide this event type (repeatable)
    #[arg(long = "exclude-type", global = true)]
    exclude_types: Vec<String>,

    /// Family member id, "primary"/"secondary" for schedules, or "all"
    #[arg(short, long, global = true)]
    participant: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Events on a single day
    Day {
        /// YYYY-MM-DD, "today", "tomorrow" or "yesterday" (default: today)
        date: Option<String>,
    },
    /// Events in the Sunday-to-Saturday week containing a date
    Week {
        /// YYYY-MM-DD, "today", "tomorrow" or "yesterday" (default: today)
        date: Option<String>,
    },
    /// Events overlapping a date range (inclusive)
    Range { from: String, to: String },
    /// Event counts for a day and its week
    Counts {
        /// YYYY-MM-DD, "today", "tomorrow" or "yesterday" (default: today)
        date: Option<String>,
    },
    /// Month grid with markers on days that have events
    Month {
        /// Any date in the month (default: today)
        date: Option<String>,
    },
    /// Print the config file location and effective settings
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = FamcalConfig::load()?;
    logging::init(&config.log_level);

    match cli.command {
        Commands::Config => print_config(&config),
        query => run_query(query, cli.file, &cli.filters, &config),
    }
}

/// Load the events file and run one of the query subcommands.
fn run_query(
    command: Commands,
    file: Option<PathBuf>,
    filters: &FilterArgs,
    config: &FamcalConfig,
) -> Result<()> {
    let events_path = file.unwrap_or_else(|| config.events_path());
    let events = events_file::load_events(&events_path)?;
    tracing::debug!(count = events.len(), path = %events_path.display(), "loaded events");

    let filter = build_filter(filters, config)?;

    match command {
        Commands::Day { date } => commands::day::run(&events, parse_date_arg(date)?, &filter),
        Commands::Week { date } => {
            let window = DateRange::week_of(parse_date_arg(date)?);
            commands::agenda::run(&events, window, &filter)
        }
        Commands::Range { from, to } => {
            let from = parse_date(&from)?;
            let to = parse_date(&to)?;
            if to < from {
                anyhow::bail!("Range end {} is before its start {}", to, from);
            }
            commands::agenda::run(&events, DateRange::new(from, to), &filter)
        }
        Commands::Counts { date } => {
            let filter = with_count_exclusions(filter, config)?;
            commands::counts::run(&events, parse_date_arg(date)?, &filter)
        }
        Commands::Month { date } => commands::month::run(&events, parse_date_arg(date)?, &filter),
        Commands::Config => print_config(config),
    }
}

fn print_config(config: &FamcalConfig) -> Result<()> {
    println!("# {}", FamcalConfig::config_path()?.display());
    print!(
        "{}",
        toml::to_string_pretty(config).context("Could not serialize config")?
    );
    Ok(())
}

/// Command-line filters are validated strictly: a typo should be an error,
/// not an empty listing.
fn build_filter(args: &FilterArgs, config: &FamcalConfig) -> Result<EventFilter> {
    let event_type = match TypeFilter::from_token(&args.event_type) {
        TypeFilter::Unrecognized => {
            return Err(unknown_type(&args.event_type));
        }
        known => known,
    };

    let mut filter = EventFilter::all().with_type(event_type).with_participant(
        ParticipantFilter::from_token(args.participant.as_deref().unwrap_or(&config.participant)),
    );

    for token in &args.exclude_types {
        let excluded = token.parse::<EventType>().map_err(|_| unknown_type(token))?;
        filter = filter.excluding(excluded);
    }

    Ok(filter)
}

fn with_count_exclusions(mut filter: EventFilter, config: &FamcalConfig) -> Result<EventFilter> {
    for token in &config.exclude_from_counts {
        let excluded = token
            .parse::<EventType>()
            .with_context(|| format!("Invalid exclude_from_counts entry '{}' in config", token))?;
        filter = filter.excluding(excluded);
    }
    Ok(filter)
}

fn unknown_type(token: &str) -> anyhow::Error {
    let known: Vec<_> = EventType::ALL.iter().map(EventType::as_str).collect();
    anyhow::anyhow!(
        "Unknown event type '{}'. Available: all, {}",
        token,
        known.join(", ")
    )
}

fn parse_date_arg(arg: Option<String>) -> Result<DateOnly> {
    match arg {
        Some(s) => parse_date(&s),
        None => Ok(DateOnly::today()),
    }
}

fn parse_date(s: &str) -> Result<DateOnly> {
    let today = DateOnly::today();
    match s.trim().to_ascii_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => Ok(today.add_days(1)),
        "yesterday" => Ok(today.add_days(-1)),
        _ => Ok(s.parse::<DateOnly>()?),
    }
}
