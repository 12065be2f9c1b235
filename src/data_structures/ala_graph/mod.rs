// Copyright (c) 2025 Alakai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ala Shortest-Path Graph
//!
//! A directed graph with non-negative integer edge weights that answers
//! shortest-path queries with Dijkstra's algorithm, driven by the
//! [`KaiPriorityQueue`] and its `decrease_key` operation.
//!
//! The single-source shortest-path tree computed for a query is cached and
//! reused while later queries share the same source. By default any
//! mutation of the graph drops the cached tree.
//!
//! Adjacency lists are kept sorted by destination name, and vertices are
//! queued in name order, so tie-breaking between equal-length paths is
//! deterministic.
//!
//! # Example
//!
//! ```
//! use alakai_lib::data_structures::ala_graph::AlaGraph;
//!
//! let mut graph = AlaGraph::new();
//! for name in ["A", "B", "C"] {
//!     graph.add_vertex(name);
//! }
//! graph.add_edge("A", "B", 5).unwrap();
//! graph.add_edge("B", "C", 3).unwrap();
//! graph.add_edge("A", "C", 10).unwrap();
//!
//! let path = graph.shortest_path("A", "C").unwrap();
//! assert_eq!(path.to_string(), "A->B->C with length 8");
//! ```

mod error;
mod vertex;

use std::collections::BTreeMap;

use crate::data_structures::kai_priority_queue::KaiPriorityQueue;

pub use error::{AlaGraphError, AlaGraphResult};
pub use vertex::{Edge, ShortestPath};
use vertex::Vertex;

/// Configuration options for the Ala graph
#[derive(Debug, Clone)]
pub struct AlaGraphConfig {
    /// Whether adding a vertex or edge drops the cached shortest-path tree
    pub invalidate_on_mutation: bool,
}

impl Default for AlaGraphConfig {
    fn default() -> Self {
        Self {
            invalidate_on_mutation: true,
        }
    }
}

/// Directed weighted graph with a cached single-source shortest-path tree.
#[derive(Debug, Clone)]
pub struct AlaGraph {
    /// Shortest-path state per vertex, ordered by name
    vertices: BTreeMap<String, Vertex>,

    /// Outgoing edges per source vertex, each list sorted by destination
    adjacency: BTreeMap<String, Vec<Edge>>,

    /// Source of the cached shortest-path tree
    current_source: Option<String>,

    /// Number of shortest-path trees built so far
    rebuilds: u64,

    /// Configuration options
    config: AlaGraphConfig,
}

impl AlaGraph {
    /// Creates a new empty graph with default configuration.
    pub fn new() -> Self {
        Self::with_config(AlaGraphConfig::default())
    }

    /// Creates a new empty graph with the specified configuration.
    pub fn with_config(config: AlaGraphConfig) -> Self {
        Self {
            vertices: BTreeMap::new(),
            adjacency: BTreeMap::new(),
            current_source: None,
            rebuilds: 0,
            config,
        }
    }

    /// Registers a vertex.
    ///
    /// # Returns
    ///
    /// `true` if the vertex is new, `false` if it already existed.
    pub fn add_vertex<S: Into<String>>(&mut self, name: S) -> bool {
        let name = name.into();
        if self.vertices.contains_key(&name) {
            return false;
        }
        self.vertices.insert(name, Vertex::default());
        self.invalidate();
        true
    }

    /// Adds a directed edge `from -> to` with the given weight.
    ///
    /// Parallel edges are kept. The adjacency list of `from` stays sorted by
    /// destination name, with parallel edges in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `AlaGraphError::UnknownVertex` if either endpoint has not been
    /// added.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: u64) -> AlaGraphResult<()> {
        for name in [from, to] {
            if !self.vertices.contains_key(name) {
                return Err(AlaGraphError::UnknownVertex(name.to_string()));
            }
        }

        let edges = self.adjacency.entry(from.to_string()).or_default();
        let index = edges.partition_point(|edge| edge.to.as_str() <= to);
        edges.insert(
            index,
            Edge {
                to: to.to_string(),
                weight,
            },
        );

        self.invalidate();
        Ok(())
    }

    /// Returns the shortest path from `from` to `to`.
    ///
    /// The shortest-path tree is rebuilt only when `from` differs from the
    /// source of the cached tree.
    ///
    /// # Errors
    ///
    /// * `AlaGraphError::UnknownVertex` if either vertex has not been added.
    /// * `AlaGraphError::Unreachable` if no path leads from `from` to `to`.
    pub fn shortest_path(&mut self, from: &str, to: &str) -> AlaGraphResult<ShortestPath> {
        for name in [from, to] {
            if !self.vertices.contains_key(name) {
                return Err(AlaGraphError::UnknownVertex(name.to_string()));
            }
        }

        if self.current_source.as_deref() == Some(from) {
            tracing::debug!(source = from, "reusing cached shortest-path tree");
        } else {
            self.build_shortest_path_tree(from)?;
        }

        let unreachable = || AlaGraphError::Unreachable {
            from: from.to_string(),
            to: to.to_string(),
        };

        let length = self.distance_to(to).ok_or_else(unreachable)?;

        let mut path = vec![to.to_string()];
        let mut cursor = to;
        while cursor != from {
            let predecessor = self
                .vertices
                .get(cursor)
                .and_then(|vertex| vertex.predecessor.as_deref())
                .ok_or_else(unreachable)?;
            // A predecessor chain never revisits a vertex.
            if path.len() > self.vertices.len() {
                return Err(unreachable());
            }
            path.push(predecessor.to_string());
            cursor = predecessor;
        }
        path.reverse();

        Ok(ShortestPath {
            vertices: path,
            length,
        })
    }

    /// Runs Dijkstra's algorithm from `source`, replacing the cached tree.
    ///
    /// # Errors
    ///
    /// Returns `AlaGraphError::UnknownVertex` if `source` has not been added.
    pub fn build_shortest_path_tree(&mut self, source: &str) -> AlaGraphResult<()> {
        if !self.vertices.contains_key(source) {
            return Err(AlaGraphError::UnknownVertex(source.to_string()));
        }

        tracing::debug!(
            source,
            vertices = self.vertices.len(),
            "building shortest-path tree"
        );

        let mut queue = KaiPriorityQueue::with_capacity(self.vertices.len());
        for (name, vertex) in self.vertices.iter_mut() {
            vertex.reset((name == source).then_some(0));
            queue.insert(name.as_str(), vertex.queue_key())?;
        }

        while let Some(u) = queue.extract_min() {
            // Everything still queued is unreachable once an infinite key surfaces.
            let Some(distance) = self.vertices.get(&u).and_then(|vertex| vertex.distance) else {
                break;
            };
            if let Some(edges) = self.adjacency.get(&u) {
                for edge in edges {
                    Self::relax(&mut self.vertices, &mut queue, &u, distance, edge)?;
                }
            }
        }

        self.current_source = Some(source.to_string());
        self.rebuilds += 1;
        Ok(())
    }

    /// Shortens the tentative distance of `edge.to` through `u` if possible.
    fn relax(
        vertices: &mut BTreeMap<String, Vertex>,
        queue: &mut KaiPriorityQueue,
        u: &str,
        u_distance: u64,
        edge: &Edge,
    ) -> AlaGraphResult<()> {
        // u64::MAX is reserved as the queue key of unreached vertices.
        let Some(candidate) = u_distance
            .checked_add(edge.weight)
            .filter(|&sum| sum < u64::MAX)
        else {
            return Ok(());
        };
        let Some(v) = vertices.get_mut(&edge.to) else {
            return Ok(());
        };

        if v.distance.map_or(true, |current| candidate < current) {
            v.distance = Some(candidate);
            v.predecessor = Some(u.to_string());
            if queue.is_member(&edge.to) {
                queue.decrease_key(&edge.to, candidate)?;
            }
        }
        Ok(())
    }

    fn invalidate(&mut self) {
        if !self.config.invalidate_on_mutation {
            return;
        }
        if let Some(source) = self.current_source.take() {
            tracing::debug!(source = %source, "graph changed, dropping cached shortest-path tree");
        }
    }

    /// Distance from the cached source to `name`, if a tree has been built
    /// and `name` is reachable.
    pub fn distance_to(&self, name: &str) -> Option<u64> {
        self.current_source.as_ref()?;
        self.vertices.get(name).and_then(|vertex| vertex.distance)
    }

    /// Source of the cached shortest-path tree.
    pub fn current_source(&self) -> Option<&str> {
        self.current_source.as_deref()
    }

    /// Number of times a shortest-path tree has been built.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Returns whether `name` has been added.
    pub fn contains_vertex(&self, name: &str) -> bool {
        self.vertices.contains_key(name)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Outgoing edges of `name`, sorted by destination.
    pub fn neighbors(&self, name: &str) -> &[Edge] {
        self.adjacency.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for AlaGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(vertices: &[&str], edges: &[(&str, &str, u64)]) -> AlaGraph {
        let mut graph = AlaGraph::new();
        for name in vertices {
            graph.add_vertex(*name);
        }
        for (from, to, weight) in edges {
            graph.add_edge(from, to, *weight).unwrap();
        }
        graph
    }

    #[test]
    fn test_prefers_cheaper_indirect_path() {
        let mut graph = graph_with(
            &["A", "B", "C"],
            &[("A", "B", 5), ("B", "C", 3), ("A", "C", 10)],
        );

        let path = graph.shortest_path("A", "C").unwrap();
        assert_eq!(path.to_string(), "A->B->C with length 8");
        assert_eq!(path.length, 8);
    }

    #[test]
    fn test_same_source_reuses_tree() {
        let mut graph = graph_with(
            &["A", "B", "C"],
            &[("A", "B", 1), ("B", "C", 1)],
        );

        graph.shortest_path("A", "B").unwrap();
        graph.shortest_path("A", "C").unwrap();
        assert_eq!(graph.rebuild_count(), 1);
        assert_eq!(graph.current_source(), Some("A"));

        graph.shortest_path("B", "C").unwrap();
        assert_eq!(graph.rebuild_count(), 2);
    }

    #[test]
    fn test_mutation_invalidates_cache() {
        let mut graph = graph_with(&["A", "B", "C"], &[("A", "C", 10), ("A", "B", 1)]);
        assert_eq!(graph.shortest_path("A", "C").unwrap().length, 10);

        graph.add_edge("B", "C", 1).unwrap();
        assert_eq!(graph.current_source(), None);
        assert_eq!(
            graph.shortest_path("A", "C").unwrap().to_string(),
            "A->B->C with length 2"
        );
        assert_eq!(graph.rebuild_count(), 2);
    }

    #[test]
    fn test_stale_cache_when_invalidation_disabled() {
        let mut graph = AlaGraph::with_config(AlaGraphConfig {
            invalidate_on_mutation: false,
        });
        for name in ["A", "B", "C"] {
            graph.add_vertex(name);
        }
        graph.add_edge("A", "C", 10).unwrap();
        graph.add_edge("A", "B", 1).unwrap();
        graph.shortest_path("A", "C").unwrap();

        graph.add_edge("B", "C", 1).unwrap();
        assert_eq!(graph.shortest_path("A", "C").unwrap().length, 10);
        assert_eq!(graph.rebuild_count(), 1);
    }

    #[test]
    fn test_unreachable_target() {
        let mut graph = graph_with(&["A", "B", "C"], &[("A", "B", 1), ("C", "A", 1)]);

        assert_eq!(
            graph.shortest_path("A", "C"),
            Err(AlaGraphError::Unreachable {
                from: "A".to_string(),
                to: "C".to_string(),
            })
        );
        assert_eq!(graph.distance_to("B"), Some(1));
        assert_eq!(graph.distance_to("C"), None);
    }

    #[test]
    fn test_unknown_vertices() {
        let mut graph = graph_with(&["A"], &[]);

        assert_eq!(
            graph.shortest_path("A", "Z"),
            Err(AlaGraphError::UnknownVertex("Z".to_string()))
        );
        assert_eq!(
            graph.add_edge("Q", "A", 1),
            Err(AlaGraphError::UnknownVertex("Q".to_string()))
        );
        assert!(graph.build_shortest_path_tree("Q").is_err());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_path_to_self() {
        let mut graph = graph_with(&["A", "B"], &[("A", "B", 4)]);
        assert_eq!(
            graph.shortest_path("A", "A").unwrap().to_string(),
            "A with length 0"
        );
    }

    #[test]
    fn test_equal_length_paths_break_ties_by_name() {
        let mut graph = graph_with(
            &["A", "B", "C", "D"],
            &[("A", "C", 1), ("A", "B", 1), ("C", "D", 1), ("B", "D", 1)],
        );

        assert_eq!(
            graph.shortest_path("A", "D").unwrap().to_string(),
            "A->B->D with length 2"
        );
    }

    #[test]
    fn test_parallel_edges_and_sorted_adjacency() {
        let mut graph = graph_with(
            &["A", "B", "C"],
            &[("A", "C", 2), ("A", "B", 5), ("A", "B", 2)],
        );

        let destinations: Vec<&str> = graph.neighbors("A").iter().map(|e| e.to.as_str()).collect();
        assert_eq!(destinations, vec!["B", "B", "C"]);
        assert!(graph.neighbors("C").is_empty());
        assert_eq!(graph.edge_count(), 3);

        assert_eq!(graph.shortest_path("A", "B").unwrap().length, 2);
    }

    #[test]
    fn test_zero_weight_edges_and_cycles() {
        let mut graph = graph_with(
            &["A", "B", "C"],
            &[("A", "B", 0), ("B", "A", 0), ("B", "C", 7), ("C", "B", 1)],
        );

        let path = graph.shortest_path("A", "C").unwrap();
        assert_eq!(path.to_string(), "A->B->C with length 7");
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph = AlaGraph::new();
        assert!(graph.add_vertex("A"));
        assert!(!graph.add_vertex("A"));
        assert_eq!(graph.vertex_count(), 1);
        assert!(graph.contains_vertex("A"));
    }

    #[test]
    fn test_huge_weights_do_not_overflow() {
        let mut graph = graph_with(
            &["A", "B", "C"],
            &[("A", "B", u64::MAX - 1), ("B", "C", 5)],
        );

        assert_eq!(graph.shortest_path("A", "B").unwrap().length, u64::MAX - 1);
        assert!(matches!(
            graph.shortest_path("A", "C"),
            Err(AlaGraphError::Unreachable { .. })
        ));
    }
}
