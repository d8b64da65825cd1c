//! Configuration validation
//!
//! The validation is organized into several submodules:
//! - `trait_def`: Core Validate trait definition
//! - `auth_validators`: Authorization-related validators
//! - `logging_validators`: Logging validators
//! - `tests`: Test suite for all validators

mod auth_validators;
mod logging_validators;
mod trait_def;

pub use trait_def::Validate;
