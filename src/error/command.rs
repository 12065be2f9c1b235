//! Command error module.
//!
//! Errors raised while parsing the line-oriented input of the tree and
//! shortest-path front ends.

use thiserror::Error;

/// Errors that can occur while parsing front-end input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The first word of a line is not a known command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A command was given too few arguments.
    #[error("Command '{command}' is missing its {argument}")]
    MissingArgument {
        /// The command being parsed.
        command: String,
        /// Name of the missing argument.
        argument: String,
    },

    /// A count or weight could not be parsed as a non-negative integer.
    #[error("Invalid number '{value}' for {field}")]
    InvalidNumber {
        /// Which field was being read.
        field: String,
        /// The offending text.
        value: String,
    },

    /// Input ended while more data was required.
    #[error("Unexpected end of input while reading {0}")]
    UnexpectedEof(String),
}
