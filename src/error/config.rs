//! Configuration error module.
//!
//! Errors that may occur while loading, validating or writing the Alakai
//! configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file does not exist.
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The configuration file could not be parsed or merged.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(String),

    /// A configuration value failed validation.
    #[error("Configuration value {key} is out of valid range: {message}")]
    ValueOutOfRange {
        /// Dotted path of the invalid value
        key: String,
        /// Description of the valid range
        message: String,
    },

    /// The configuration could not be rendered for writing.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}
