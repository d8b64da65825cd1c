//! Configuration data models
//!
//! This module defines all configuration structures used by the dashboard core.

#![allow(missing_docs)]

pub mod auth;
pub mod logging;

// Re-export all configuration types
pub use auth::*;
pub use logging::*;

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}

/// Log levels accepted by the subscriber
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
