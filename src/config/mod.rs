//! Configuration management for the dashboard core
//!
//! This module handles loading, validation, and merging of configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::auth::Role;
use crate::utils::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable overriding the default role
pub const ENV_DEFAULT_ROLE: &str = "CERTBOARD_DEFAULT_ROLE";
/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "CERTBOARD_LOG_LEVEL";
/// Environment variable enabling JSON logs
pub const ENV_LOG_JSON: &str = "CERTBOARD_LOG_JSON";

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Authorization configuration
    #[serde(default)]
    pub rbac: RbacConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DashboardError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        check_default_role(content)?;

        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| DashboardError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables (and a `.env` file if present)
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        report_dotenv(dotenvy::dotenv());

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(role) = lookup(ENV_DEFAULT_ROLE) {
            config.rbac.default_role = role.parse::<Role>()?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.logging.level = level;
        }
        if let Some(json) = lookup(ENV_LOG_JSON) {
            config.logging.json = matches!(json.trim(), "1" | "true" | "TRUE" | "yes");
        }

        config.validate()?;
        Ok(config)
    }

    pub fn rbac(&self) -> &RbacConfig {
        &self.rbac
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.rbac.validate_section("RBAC")?;
        self.logging.validate_section("Logging")?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.rbac = self.rbac.merge(other.rbac);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DashboardError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| DashboardError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

/// Surface an unknown `rbac.default_role` as `InvalidRole` rather than a
/// generic parse failure
fn check_default_role(content: &str) -> Result<()> {
    let Ok(value) = serde_yaml::from_str::<serde_yaml::Value>(content) else {
        return Ok(());
    };
    if let Some(role) = value
        .get("rbac")
        .and_then(|rbac| rbac.get("default_role"))
        .and_then(serde_yaml::Value::as_str)
    {
        role.parse::<Role>()?;
    }
    Ok(())
}

/// A missing `.env` file is normal; anything else is logged and returned
fn report_dotenv(
    result: std::result::Result<PathBuf, dotenvy::Error>,
) -> Option<dotenvy::Error> {
    match result {
        Ok(path) => {
            debug!("Loaded environment from {:?}", path);
            None
        }
        Err(e) if e.not_found() => None,
        Err(e) => {
            warn!("Ignoring .env file: {}", e);
            Some(e)
        }
    }
}
