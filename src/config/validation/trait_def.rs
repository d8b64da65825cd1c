//! Validation trait definition

use crate::utils::error::{DashboardError, Result};

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> std::result::Result<(), String>;

    /// Validate, reporting failures as a configuration error for `section`
    fn validate_section(&self, section: &str) -> Result<()> {
        self.validate()
            .map_err(|e| DashboardError::config(format!("{} config error: {}", section, e)))
    }
}
