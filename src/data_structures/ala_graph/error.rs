// Copyright (c) 2025 Alakai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Ala shortest-path graph.

use crate::data_structures::kai_priority_queue::KaiQueueError;

/// Errors that can occur in Ala graph operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlaGraphError {
    /// A vertex name was used before being added.
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    /// No path leads from the source to the target.
    #[error("{to} is unreachable from {from}")]
    Unreachable {
        /// Source vertex.
        from: String,
        /// Target vertex.
        to: String,
    },

    /// The priority queue rejected an operation during a rebuild.
    #[error("Priority queue error: {0}")]
    Queue(#[from] KaiQueueError),
}

/// Result type for Ala graph operations
pub type AlaGraphResult<T> = Result<T, AlaGraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AlaGraphError::UnknownVertex("Z".to_string());
        assert_eq!(err.to_string(), "Unknown vertex: Z");

        let err = AlaGraphError::Unreachable {
            from: "A".to_string(),
            to: "D".to_string(),
        };
        assert_eq!(err.to_string(), "D is unreachable from A");

        let err: AlaGraphError = KaiQueueError::UnknownId("q".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Priority queue error: Element 'q' is not in the queue"
        );
    }
}
