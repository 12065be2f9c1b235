//! Test modules for Alakai.
//!
//! This module contains crate-level tests that cut across components:
//! - Configuration loading, layering and validation
//! - Error types and the reporting framework
//! - Front-end sessions driving the data structures end to end
//!
//! Unit tests for each data structure live next to the structure itself.

pub mod config_tests;
pub mod session_tests;
