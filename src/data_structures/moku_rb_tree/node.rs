// Copyright (c) 2025 Alakai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node storage for the Moku red-black tree.
//!
//! Nodes live in an arena owned by the tree and refer to each other by
//! [`NodeId`]. A missing child or parent is `None`; there is no shared
//! sentinel node.

use std::fmt;

/// Index of a node slot in the tree's arena.
pub(crate) type NodeId = usize;

/// Node color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Red node.
    Red,
    /// Black node. Absent children count as black.
    Black,
}

impl Color {
    /// Single-character tag used by the sideways dump.
    pub fn as_char(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A key/value node in the tree.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) key: String,
    pub(crate) value: String,
    pub(crate) color: Color,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl Node {
    /// Creates a new red node attached under `parent`.
    pub(crate) fn new(key: String, value: String, parent: Option<NodeId>) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    /// Drops the payload and links of a node whose slot is being freed.
    pub(crate) fn clear(&mut self) {
        self.key.clear();
        self.value.clear();
        self.color = Color::Black;
        self.parent = None;
        self.left = None;
        self.right = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_new_is_red_leaf() {
        let node = Node::new("k".to_string(), "v".to_string(), Some(3));
        assert_eq!(node.color, Color::Red);
        assert_eq!(node.parent, Some(3));
        assert!(node.left.is_none());
        assert!(node.right.is_none());
    }

    #[test]
    fn test_node_clear() {
        let mut node = Node::new("k".to_string(), "v".to_string(), Some(1));
        node.left = Some(2);
        node.clear();
        assert!(node.key.is_empty());
        assert!(node.value.is_empty());
        assert_eq!(node.color, Color::Black);
        assert!(node.parent.is_none() && node.left.is_none());
    }

    #[test]
    fn test_color_chars() {
        assert_eq!(Color::Red.to_string(), "R");
        assert_eq!(Color::Black.to_string(), "B");
    }
}
