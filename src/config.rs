//! famcal configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

static DEFAULT_EVENTS_FILE: &str = "~/famcal/events.json";

fn default_events_file() -> PathBuf {
    PathBuf::from(DEFAULT_EVENTS_FILE)
}

fn default_participant() -> String {
    "all".to_string()
}

fn default_exclude_from_counts() -> Vec<String> {
    vec!["Schedule".to_string()]
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Configuration at ~/.config/famcal/config.toml
///
/// Every key can be overridden with a `FAMCAL_` environment variable,
/// e.g. `FAMCAL_EVENTS_FILE=/tmp/events.json`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FamcalConfig {
    /// JSON array of events exported from the family organizer
    #[serde(default = "default_events_file")]
    pub events_file: PathBuf,

    /// Participant filter used when --participant is not given
    #[serde(default = "default_participant")]
    pub participant: String,

    /// Event types left out of dashboard counts
    #[serde(default = "default_exclude_from_counts")]
    pub exclude_from_counts: Vec<String>,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for FamcalConfig {
    fn default() -> Self {
        FamcalConfig {
            events_file: default_events_file(),
            participant: default_participant(),
            exclude_from_counts: default_exclude_from_counts(),
            log_level: default_log_level(),
        }
    }
}

impl FamcalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("famcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/famcal/config.toml, writing a commented default on first run.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            Self::create_default_config(&path)?;
        }

        Self::load_from(&path)
    }

    /// Load from `path` (which may be missing) layered with the environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("FAMCAL")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("exclude_from_counts"),
            )
            .build()
            .with_context(|| format!("Could not read config {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Events file path with `~` expanded.
    pub fn events_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.events_file.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> Result<()> {
        let contents = format!(
            "\
# famcal configuration

# Events exported from the family organizer (JSON array):
# events_file = \"{}\"

# Default participant filter: a family member id, \"primary\", \"secondary\", or \"all\":
# participant = \"all\"

# Event types left out of `famcal counts`:
# exclude_from_counts = [\"Schedule\"]

# Log level when RUST_LOG is not set:
# log_level = \"warn\"
",
            DEFAULT_EVENTS_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Could not create config directory")?;
        }

        std::fs::write(path, contents)
            .with_context(|| format!("Could not write config file {}", path.display()))?;

        Ok(())
    }
}
