//! Error types for the dashboard core

use thiserror::Error;

/// Result type alias for the dashboard core
pub type Result<T> = std::result::Result<T, DashboardError>;

/// Main error type for the dashboard core
#[derive(Error, Debug)]
pub enum DashboardError {
    /// A role name outside `admin`, `team`, `public`
    #[error("Invalid role: {0:?}")]
    InvalidRole(String),

    /// The current role lacks a capability or route
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
