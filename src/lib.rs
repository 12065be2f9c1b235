//! Alakai Library
//!
//! This library contains the core components of Alakai: an ordered
//! red-black tree multi-map, a min-priority queue with decrease-key, and a
//! shortest-path engine built on top of the queue. The line-oriented front
//! ends used by the `alakai` binary live in [`app`].
//!
//! # Architecture
//!
//! - Data structures own their storage and report misuse through their own
//!   error types
//! - Front ends read from any `BufRead` and write to any `Write`
//! - Configuration is layered and validated before any structure is built

// Re-export public modules
pub mod app;
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Alakai.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Routes globally reported errors through `tracing`.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
