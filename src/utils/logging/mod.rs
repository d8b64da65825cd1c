//! Tracing subscriber setup
//!
//! `RUST_LOG` takes precedence over the configured level when set.

use crate::config::LoggingConfig;
use crate::utils::error::{DashboardError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter for `config`, preferring `RUST_LOG`
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(config.level.trim().to_ascii_lowercase())
        .map_err(|e| DashboardError::config(format!("Invalid log filter '{}': {}", config.level, e)))
}

/// Install the global subscriber
///
/// Fails if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| DashboardError::internal(format!("Failed to initialize logging: {}", e)))
}
