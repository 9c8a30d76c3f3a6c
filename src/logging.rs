//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt};

/// Log to stderr so query output on stdout stays clean.
///
/// `RUST_LOG` wins over the configured level.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
