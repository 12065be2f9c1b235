// Copyright (c) 2025 Alakai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Vertex, edge and path records for the Ala graph.

use std::fmt;

/// Per-vertex shortest-path state, valid for the most recent source only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Vertex {
    /// Tentative distance from the source; `None` is infinity
    pub(crate) distance: Option<u64>,

    /// Previous vertex on the best known path
    pub(crate) predecessor: Option<String>,
}

impl Vertex {
    /// Priority used when the vertex is queued; unreached vertices sort last.
    pub(crate) fn queue_key(&self) -> u64 {
        self.distance.unwrap_or(u64::MAX)
    }

    pub(crate) fn reset(&mut self, distance: Option<u64>) {
        self.distance = distance;
        self.predecessor = None;
    }
}

/// A directed, weighted edge as stored in a source vertex's adjacency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Destination vertex name
    pub to: String,

    /// Non-negative edge weight
    pub weight: u64,
}

/// A computed shortest path.
///
/// Displays as `v1->v2->...->vk with length N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath {
    /// Vertices from source to target, inclusive
    pub vertices: Vec<String>,

    /// Total weight of the path
    pub length: u64,
}

impl ShortestPath {
    /// First vertex of the path.
    pub fn source(&self) -> Option<&str> {
        self.vertices.first().map(String::as_str)
    }

    /// Last vertex of the path.
    pub fn target(&self) -> Option<&str> {
        self.vertices.last().map(String::as_str)
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with length {}", self.vertices.join("->"), self.length)
    }
}
