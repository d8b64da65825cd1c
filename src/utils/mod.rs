//! Utility modules for the dashboard core
//!
//! - **error**: Error type and helpers
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{DashboardError, Result};
pub use logging::init_logging;
