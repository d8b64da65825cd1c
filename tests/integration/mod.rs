//! Integration tests for certboard

pub mod config_tests;
pub mod gateway_tests;
pub mod session_tests;
