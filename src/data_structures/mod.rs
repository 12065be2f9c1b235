//! Data structures for Alakai.
//!
//! This module contains the ordered and priority-ordered containers that the
//! front ends are built on:
//! - `moku_rb_tree`: red-black tree multi-map with string keys and values
//! - `kai_priority_queue`: binary min-heap with decrease-key by element id
//! - `ala_graph`: weighted directed graph answering shortest-path queries

pub mod ala_graph;
pub mod kai_priority_queue;
pub mod moku_rb_tree;

// Re-export common data structures
pub use ala_graph::{AlaGraph, AlaGraphConfig, AlaGraphError, AlaGraphResult, ShortestPath};
pub use kai_priority_queue::{KaiPriorityQueue, KaiQueueError, KaiQueueResult};
pub use moku_rb_tree::{MokuTree, MokuTreeConfig, MokuTreeError, MokuTreeResult};
