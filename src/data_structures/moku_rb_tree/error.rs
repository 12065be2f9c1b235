// Copyright (c) 2025 Alakai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Moku red-black tree.
//!
//! Mutating tree operations never fail. These errors are produced only by
//! [`MokuTree::validate`](super::MokuTree::validate) when a structural
//! invariant does not hold.

/// Invariant violations detected by tree validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MokuTreeError {
    /// The root node is colored red.
    #[error("Root node '{key}' is red")]
    RedRoot {
        /// Key stored at the root.
        key: String,
    },

    /// A red node has a red parent.
    #[error("Red node '{child}' has red parent '{parent}'")]
    RedRedViolation {
        /// Key of the parent node.
        parent: String,
        /// Key of the child node.
        child: String,
    },

    /// The two subtrees of a node have different black-heights.
    #[error("Black-height mismatch below '{key}': left {left}, right {right}")]
    BlackHeightMismatch {
        /// Key of the node whose subtrees disagree.
        key: String,
        /// Black-height of the left subtree.
        left: usize,
        /// Black-height of the right subtree.
        right: usize,
    },

    /// In-order traversal produced a key smaller than the one before it.
    #[error("Key '{key}' follows larger key '{previous}' in order")]
    OrderViolation {
        /// The misplaced key.
        key: String,
        /// The key visited immediately before it.
        previous: String,
    },

    /// A child does not point back at its parent.
    #[error("Node '{key}' has an inconsistent parent link")]
    BrokenParentLink {
        /// Key of the node with the bad link.
        key: String,
    },

    /// The number of reachable nodes differs from the recorded length.
    #[error("Tree reports {recorded} entries but {reachable} are reachable")]
    LengthMismatch {
        /// Length tracked by the tree.
        recorded: usize,
        /// Nodes found by traversal.
        reachable: usize,
    },
}
