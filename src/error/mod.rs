//! Error module for Alakai.
//!
//! This module provides the application-level error type that wraps the
//! per-structure errors, configuration errors and front-end command errors,
//! together with a small reporting framework that routes errors to `tracing`.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use thiserror::Error;

use crate::data_structures::ala_graph::AlaGraphError;
use crate::data_structures::kai_priority_queue::KaiQueueError;
use crate::data_structures::moku_rb_tree::MokuTreeError;

pub mod command;
pub mod config;

/// Result type alias used throughout Alakai.
pub type AlakaiResult<T> = Result<T, AlakaiError>;

/// Core error enum for Alakai.
#[derive(Error, Debug)]
pub enum AlakaiError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Malformed input to one of the command front ends.
    #[error("Command error: {0}")]
    Command(#[from] command::CommandError),

    /// Red-black tree invariant violations.
    #[error("Tree error: {0}")]
    Tree(#[from] MokuTreeError),

    /// Priority queue misuse.
    #[error("Queue error: {0}")]
    Queue(#[from] KaiQueueError),

    /// Shortest-path engine errors.
    #[error("Graph error: {0}")]
    Graph(#[from] AlaGraphError),

    /// IO errors while reading commands or writing results.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: AlakaiError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: AlakaiError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
#[cfg_attr(test, mockall::automock)]
pub trait ErrorReporter: Send + Sync {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// Error reporter that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Reporter that forwards to whatever is registered globally.
#[derive(Default, Debug, Clone, Copy)]
pub struct GlobalErrorReporter;

impl ErrorReporter for GlobalErrorReporter {
    fn report(&self, context: ErrorContext) {
        report_error(context);
    }
}

/// Globally registered reporter; `None` falls back to standard error.
static ERROR_REPORTER: Lazy<RwLock<Option<Arc<dyn ErrorReporter>>>> =
    Lazy::new(|| RwLock::new(None));

/// Set the global error reporter.
///
/// # Arguments
///
/// * `reporter` - The error reporter to use
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    *ERROR_REPORTER.write() = Some(reporter);
}

/// Report an error through the global reporter.
pub fn report_error(context: ErrorContext) {
    let reporter = ERROR_REPORTER.read().clone();
    match reporter {
        Some(reporter) => reporter.report(context),
        None => eprintln!("Error: {context}"),
    }
}
