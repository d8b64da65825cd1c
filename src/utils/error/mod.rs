//! Error handling for the dashboard core
//!
//! This module defines the error type shared by every component of the crate.

#![allow(missing_docs)]

mod helpers;
mod types;

pub use types::{DashboardError, Result};
