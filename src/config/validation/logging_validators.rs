//! Logging configuration validators

use super::trait_def::Validate;
use crate::config::models::*;

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let level = self.level.trim();

        if level.is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        // Directive lists such as "certboard=debug,warn" are left to the filter parser
        if level.contains('=') || level.contains(',') {
            return Ok(());
        }

        if !LOG_LEVELS.iter().any(|l| l.eq_ignore_ascii_case(level)) {
            return Err(format!(
                "Unknown log level '{}', expected one of: {}",
                level,
                LOG_LEVELS.join(", ")
            ));
        }

        Ok(())
    }
}
