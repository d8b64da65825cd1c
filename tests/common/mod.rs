//! Common test utilities for certboard

pub mod assertions;

// Re-export commonly used items
pub use fixtures::{RecordFactory, SessionFactory};
