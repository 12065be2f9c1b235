// Copyright (c) 2025 Alakai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Kai priority queue.

/// Errors that can occur in Kai priority queue operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KaiQueueError {
    /// An element with this id is already queued.
    #[error("Element '{0}' is already in the queue")]
    DuplicateId(String),

    /// No queued element has this id.
    #[error("Element '{0}' is not in the queue")]
    UnknownId(String),

    /// A decrease-key request asked for a larger key.
    #[error("Cannot raise key of '{id}' from {current} to {requested}")]
    KeyIncreased {
        /// Id of the element.
        id: String,
        /// Key currently held by the element.
        current: u64,
        /// Key that was requested.
        requested: u64,
    },
}

/// Result type for Kai priority queue operations
pub type KaiQueueResult<T> = Result<T, KaiQueueError>;
