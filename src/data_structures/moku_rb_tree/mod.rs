// Copyright (c) 2025 Alakai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Moku Red-Black Tree Implementation
//!
//! An ordered multi-map from string keys to string values, balanced with the
//! classic red-black coloring rules. Duplicate keys are allowed: a key equal
//! to an existing one descends to the right on insert, and rotations may later
//! scatter equal keys on either side of each other, so lookups gather every
//! match by walking the in-order successor and predecessor chains.
//!
//! # Storage
//!
//! Nodes are slots in an arena (`Vec<Node>`) and link to each other by index.
//! An absent child or parent is `None`, which plays the role of the black
//! leaf sentinel. Freed slots are recycled by later inserts.
//!
//! # Example
//!
//! ```
//! use alakai_lib::data_structures::moku_rb_tree::MokuTree;
//!
//! let mut tree = MokuTree::new();
//! tree.insert("cat", "1");
//! tree.insert("cat", "2");
//! tree.insert("dog", "3");
//!
//! assert_eq!(tree.find("cat").len(), 2);
//! assert_eq!(tree.delete("cat", "1"), 1);
//! assert_eq!(tree.find("cat"), vec![("cat", "2")]);
//! assert!(tree.validate().is_ok());
//! ```

mod error;
mod node;

pub use error::MokuTreeError;
pub use node::Color;
use node::{Node, NodeId};

/// Result type for Moku tree validation
pub type MokuTreeResult<T> = Result<T, MokuTreeError>;

/// Configuration options for the Moku tree
#[derive(Debug, Clone)]
pub struct MokuTreeConfig {
    /// Columns of indentation per depth level in [`MokuTree::print_ordered`]
    pub indent_width: usize,
}

impl Default for MokuTreeConfig {
    fn default() -> Self {
        Self { indent_width: 4 }
    }
}

/// Red-black tree keyed by strings, tolerating duplicate keys.
#[derive(Debug, Clone)]
pub struct MokuTree {
    /// Node arena; freed slots are listed in `free`
    nodes: Vec<Node>,

    /// Recyclable arena slots
    free: Vec<NodeId>,

    /// Root node, `None` when the tree is empty
    root: Option<NodeId>,

    /// Number of live nodes
    len: usize,

    /// Configuration options
    config: MokuTreeConfig,
}

impl MokuTree {
    /// Creates a new empty `MokuTree` with default configuration.
    pub fn new() -> Self {
        Self::with_config(MokuTreeConfig::default())
    }

    /// Creates a new empty `MokuTree` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the tree.
    pub fn with_config(config: MokuTreeConfig) -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
            config,
        }
    }

    /// Returns the number of key/value pairs stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }

    /// Inserts a key/value pair.
    ///
    /// The pair is always added, even if an identical pair is already present.
    /// Keys equal to a visited node descend to its right.
    ///
    /// # Arguments
    ///
    /// * `key` - The ordering key.
    /// * `value` - The value to associate with the key.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        tracing::trace!(key = %key, "inserting into red-black tree");

        let mut parent = None;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            parent = Some(id);
            cursor = if key < self.nodes[id].key {
                self.nodes[id].left
            } else {
                self.nodes[id].right
            };
        }

        let goes_left = parent.map_or(false, |p| key < self.nodes[p].key);
        let z = self.alloc(Node::new(key, value.into(), parent));
        match parent {
            None => self.root = Some(z),
            Some(p) if goes_left => self.nodes[p].left = Some(z),
            Some(p) => self.nodes[p].right = Some(z),
        }
        self.len += 1;

        self.insert_fixup(z);
    }

    /// Finds every pair stored under `key`.
    ///
    /// Matches are returned in in-order position, so values under one key come
    /// back in insertion order. An absent key yields an empty vector.
    pub fn find(&self, key: &str) -> Vec<(&str, &str)> {
        self.matching_ids(key)
            .into_iter()
            .map(|id| (self.nodes[id].key.as_str(), self.nodes[id].value.as_str()))
            .collect()
    }

    /// Deletes every node whose key and value both match.
    ///
    /// Other values stored under the same key are kept.
    ///
    /// # Returns
    ///
    /// The number of nodes removed; zero when nothing matched.
    pub fn delete(&mut self, key: &str, value: &str) -> usize {
        let mut removed = 0;
        for id in self.matching_ids(key) {
            if self.nodes[id].value == value {
                self.delete_node(id);
                removed += 1;
            }
        }

        tracing::trace!(key, value, removed, "deleted matching entries");
        removed
    }

    /// Renders the tree sideways: right subtree first, then the node, then the
    /// left subtree, one `color key value` line per node with the color tag
    /// right-aligned in a field of `(depth + 1) * indent_width` columns.
    pub fn print_ordered(&self) -> String {
        let mut out = String::new();
        self.write_reverse_in_order(self.root, 0, &mut out);
        out
    }

    /// Returns an in-order iterator over `(key, value)` pairs.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            tree: self,
            next: self.root.map(|root| self.minimum(root)),
            remaining: self.len,
        }
    }

    /// Number of black nodes from the root down to an absent leaf, not
    /// counting the root itself.
    pub fn black_height(&self) -> usize {
        let mut height = 0;
        let mut cursor = self.root.and_then(|root| self.nodes[root].left);
        while let Some(id) = cursor {
            if self.nodes[id].color == Color::Black {
                height += 1;
            }
            cursor = self.nodes[id].left;
        }
        height
    }

    /// Checks every red-black and ordering invariant.
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of black nodes on every root-to-leaf path.
    /// * `Err(MokuTreeError)` - The first violation found.
    pub fn validate(&self) -> MokuTreeResult<usize> {
        if let Some(root) = self.root {
            let node = &self.nodes[root];
            if node.parent.is_some() {
                return Err(MokuTreeError::BrokenParentLink {
                    key: node.key.clone(),
                });
            }
            if node.color == Color::Red {
                return Err(MokuTreeError::RedRoot {
                    key: node.key.clone(),
                });
            }
        }

        let height = self.validate_subtree(self.root)?;

        let mut previous: Option<&str> = None;
        let mut reachable = 0;
        for (key, _) in self.iter() {
            if let Some(prev) = previous {
                if key < prev {
                    return Err(MokuTreeError::OrderViolation {
                        key: key.to_string(),
                        previous: prev.to_string(),
                    });
                }
            }
            previous = Some(key);
            reachable += 1;
        }
        if reachable != self.len {
            return Err(MokuTreeError::LengthMismatch {
                recorded: self.len,
                reachable,
            });
        }

        Ok(height)
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        self.nodes[id].clear();
        self.free.push(id);
        self.len -= 1;
    }

    fn is_red(&self, id: Option<NodeId>) -> bool {
        id.map_or(false, |id| self.nodes[id].color == Color::Red)
    }

    fn set_color(&mut self, id: Option<NodeId>, color: Color) {
        if let Some(id) = id {
            self.nodes[id].color = color;
        }
    }

    fn minimum(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    fn maximum(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.nodes[id].right {
            id = right;
        }
        id
    }

    fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.nodes[id].right {
            return Some(self.minimum(right));
        }
        let mut child = id;
        let mut parent = self.nodes[id].parent;
        while let Some(p) = parent {
            if self.nodes[p].right != Some(child) {
                break;
            }
            child = p;
            parent = self.nodes[p].parent;
        }
        parent
    }

    fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(left) = self.nodes[id].left {
            return Some(self.maximum(left));
        }
        let mut child = id;
        let mut parent = self.nodes[id].parent;
        while let Some(p) = parent {
            if self.nodes[p].left != Some(child) {
                break;
            }
            child = p;
            parent = self.nodes[p].parent;
        }
        parent
    }

    /// First node on the search path whose key equals `key`.
    fn search(&self, key: &str) -> Option<NodeId> {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            if node.key == key {
                return Some(id);
            }
            cursor = if key < node.key.as_str() {
                node.left
            } else {
                node.right
            };
        }
        None
    }

    fn matching_ids(&self, key: &str) -> Vec<NodeId> {
        let Some(start) = self.search(key) else {
            return Vec::new();
        };

        let mut ids = Vec::new();
        let mut cursor = self.predecessor(start);
        while let Some(id) = cursor.filter(|&id| self.nodes[id].key == key) {
            ids.push(id);
            cursor = self.predecessor(id);
        }
        ids.reverse();

        cursor = Some(start);
        while let Some(id) = cursor.filter(|&id| self.nodes[id].key == key) {
            ids.push(id);
            cursor = self.successor(id);
        }
        ids
    }

    fn left_rotate(&mut self, x: NodeId) {
        let Some(y) = self.nodes[x].right else {
            return;
        };

        let inner = self.nodes[y].left;
        self.nodes[x].right = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }

        let parent = self.nodes[x].parent;
        self.nodes[y].parent = parent;
        match parent {
            None => self.root = Some(y),
            Some(p) if self.nodes[p].left == Some(x) => self.nodes[p].left = Some(y),
            Some(p) => self.nodes[p].right = Some(y),
        }

        self.nodes[y].left = Some(x);
        self.nodes[x].parent = Some(y);
    }

    fn right_rotate(&mut self, x: NodeId) {
        let Some(y) = self.nodes[x].left else {
            return;
        };

        let inner = self.nodes[y].right;
        self.nodes[x].left = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }

        let parent = self.nodes[x].parent;
        self.nodes[y].parent = parent;
        match parent {
            None => self.root = Some(y),
            Some(p) if self.nodes[p].right == Some(x) => self.nodes[p].right = Some(y),
            Some(p) => self.nodes[p].left = Some(y),
        }

        self.nodes[y].right = Some(x);
        self.nodes[x].parent = Some(y);
    }

    fn insert_fixup(&mut self, mut z: NodeId) {
        while let Some(p) = self.nodes[z].parent {
            if self.nodes[p].color == Color::Black {
                break;
            }
            // A red parent is never the root.
            let Some(g) = self.nodes[p].parent else {
                break;
            };

            if self.nodes[g].left == Some(p) {
                let uncle = self.nodes[g].right;
                if self.is_red(uncle) {
                    self.nodes[p].color = Color::Black;
                    self.set_color(uncle, Color::Black);
                    self.nodes[g].color = Color::Red;
                    z = g;
                } else {
                    if self.nodes[p].right == Some(z) {
                        z = p;
                        self.left_rotate(z);
                    }
                    let Some(p) = self.nodes[z].parent else {
                        break;
                    };
                    self.nodes[p].color = Color::Black;
                    self.nodes[g].color = Color::Red;
                    self.right_rotate(g);
                }
            } else {
                let uncle = self.nodes[g].left;
                if self.is_red(uncle) {
                    self.nodes[p].color = Color::Black;
                    self.set_color(uncle, Color::Black);
                    self.nodes[g].color = Color::Red;
                    z = g;
                } else {
                    if self.nodes[p].left == Some(z) {
                        z = p;
                        self.right_rotate(z);
                    }
                    let Some(p) = self.nodes[z].parent else {
                        break;
                    };
                    self.nodes[p].color = Color::Black;
                    self.nodes[g].color = Color::Red;
                    self.left_rotate(g);
                }
            }
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }

    /// Replaces the subtree rooted at `u` with the one rooted at `v`.
    fn transplant(&mut self, u: NodeId, v: Option<NodeId>) {
        let parent = self.nodes[u].parent;
        match parent {
            None => self.root = v,
            Some(p) if self.nodes[p].left == Some(u) => self.nodes[p].left = v,
            Some(p) => self.nodes[p].right = v,
        }
        if let Some(v) = v {
            self.nodes[v].parent = parent;
        }
    }

    /// Unlinks and frees `z`, substituting its in-order predecessor when it
    /// has two children.
    fn delete_node(&mut self, z: NodeId) {
        let mut removed_color = self.nodes[z].color;
        let x;
        let x_parent;

        match (self.nodes[z].left, self.nodes[z].right) {
            (None, right) => {
                x = right;
                x_parent = self.nodes[z].parent;
                self.transplant(z, right);
            }
            (left, None) => {
                x = left;
                x_parent = self.nodes[z].parent;
                self.transplant(z, left);
            }
            (Some(left), Some(right)) => {
                let y = self.maximum(left);
                removed_color = self.nodes[y].color;
                x = self.nodes[y].left;
                if self.nodes[y].parent == Some(z) {
                    x_parent = Some(y);
                } else {
                    x_parent = self.nodes[y].parent;
                    self.transplant(y, x);
                    self.nodes[y].left = Some(left);
                    self.nodes[left].parent = Some(y);
                }
                self.transplant(z, Some(y));
                self.nodes[y].right = Some(right);
                self.nodes[right].parent = Some(y);
                self.nodes[y].color = self.nodes[z].color;
            }
        }

        self.release(z);

        if removed_color == Color::Black {
            self.delete_fixup(x, x_parent);
        }
    }

    /// Restores black-height after removing a black node. `x` carries the
    /// extra black and may be absent, so its parent is tracked alongside it.
    fn delete_fixup(&mut self, mut x: Option<NodeId>, mut parent: Option<NodeId>) {
        while x != self.root && !self.is_red(x) {
            let Some(p) = parent else {
                break;
            };

            if x == self.nodes[p].left {
                let mut sibling = self.nodes[p].right;
                if self.is_red(sibling) {
                    self.set_color(sibling, Color::Black);
                    self.nodes[p].color = Color::Red;
                    self.left_rotate(p);
                    sibling = self.nodes[p].right;
                }
                let Some(mut w) = sibling else {
                    x = Some(p);
                    parent = self.nodes[p].parent;
                    continue;
                };

                if !self.is_red(self.nodes[w].left) && !self.is_red(self.nodes[w].right) {
                    self.nodes[w].color = Color::Red;
                    x = Some(p);
                    parent = self.nodes[p].parent;
                } else {
                    if !self.is_red(self.nodes[w].right) {
                        let near = self.nodes[w].left;
                        self.set_color(near, Color::Black);
                        self.nodes[w].color = Color::Red;
                        self.right_rotate(w);
                        match self.nodes[p].right {
                            Some(next) => w = next,
                            None => break,
                        }
                    }
                    self.nodes[w].color = self.nodes[p].color;
                    self.nodes[p].color = Color::Black;
                    let far = self.nodes[w].right;
                    self.set_color(far, Color::Black);
                    self.left_rotate(p);
                    x = self.root;
                    parent = None;
                }
            } else {
                let mut sibling = self.nodes[p].left;
                if self.is_red(sibling) {
                    self.set_color(sibling, Color::Black);
                    self.nodes[p].color = Color::Red;
                    self.right_rotate(p);
                    sibling = self.nodes[p].left;
                }
                let Some(mut w) = sibling else {
                    x = Some(p);
                    parent = self.nodes[p].parent;
                    continue;
                };

                if !self.is_red(self.nodes[w].right) && !self.is_red(self.nodes[w].left) {
                    self.nodes[w].color = Color::Red;
                    x = Some(p);
                    parent = self.nodes[p].parent;
                } else {
                    if !self.is_red(self.nodes[w].left) {
                        let near = self.nodes[w].right;
                        self.set_color(near, Color::Black);
                        self.nodes[w].color = Color::Red;
                        self.left_rotate(w);
                        match self.nodes[p].left {
                            Some(next) => w = next,
                            None => break,
                        }
                    }
                    self.nodes[w].color = self.nodes[p].color;
                    self.nodes[p].color = Color::Black;
                    let far = self.nodes[w].left;
                    self.set_color(far, Color::Black);
                    self.right_rotate(p);
                    x = self.root;
                    parent = None;
                }
            }
        }

        self.set_color(x, Color::Black);
    }

    fn write_reverse_in_order(&self, id: Option<NodeId>, depth: usize, out: &mut String) {
        let Some(id) = id else {
            return;
        };
        let node = &self.nodes[id];

        self.write_reverse_in_order(node.right, depth + 1, out);
        let width = (depth + 1) * self.config.indent_width;
        out.push_str(&format!(
            "{:>width$} {} {}\n",
            node.color.as_char(),
            node.key,
            node.value,
            width = width
        ));
        self.write_reverse_in_order(node.left, depth + 1, out);
    }

    /// Returns the number of black nodes on every path from `id` down to an
    /// absent leaf, counting `id` itself.
    fn validate_subtree(&self, id: Option<NodeId>) -> MokuTreeResult<usize> {
        let Some(id) = id else {
            return Ok(0);
        };
        let node = &self.nodes[id];

        for child in [node.left, node.right].into_iter().flatten() {
            let child_node = &self.nodes[child];
            if child_node.parent != Some(id) {
                return Err(MokuTreeError::BrokenParentLink {
                    key: child_node.key.clone(),
                });
            }
            if node.color == Color::Red && child_node.color == Color::Red {
                return Err(MokuTreeError::RedRedViolation {
                    parent: node.key.clone(),
                    child: child_node.key.clone(),
                });
            }
        }

        let left = self.validate_subtree(node.left)?;
        let right = self.validate_subtree(node.right)?;
        if left != right {
            return Err(MokuTreeError::BlackHeightMismatch {
                key: node.key.clone(),
                left,
                right,
            });
        }

        Ok(left + usize::from(node.color == Color::Black))
    }
}

impl Default for MokuTree {
    fn default() -> Self {
        Self::new()
    }
}

/// In-order iterator over the entries of a [`MokuTree`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    tree: &'a MokuTree,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = &self.tree.nodes[id];
        self.next = self.tree.successor(id);
        self.remaining = self.remaining.saturating_sub(1);
        Some((node.key.as_str(), node.value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a MokuTree {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
