// Copyright (c) 2025 Alakai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Kai Min-Priority Queue Implementation
//!
//! A binary min-heap of string ids keyed by integer priorities, with
//! `decrease_key` support for Dijkstra-style relaxation.
//!
//! The heap is a dense, zero-indexed `Vec` where the children of index `i`
//! sit at `2i + 1` and `2i + 2`. A side map from id to heap index is updated
//! on every swap, so membership tests and key lookups never scan the heap.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(log n)   |
//! | `decrease_key` | O(log n)   |
//! | `extract_min`  | O(log n)   |
//! | `is_member`    | O(1)       |
//! | `peek_min`     | O(1)       |
//!
//! # Example
//!
//! ```
//! use alakai_lib::data_structures::kai_priority_queue::KaiPriorityQueue;
//!
//! let mut queue = KaiPriorityQueue::new();
//! queue.insert("a", 7).unwrap();
//! queue.insert("b", 3).unwrap();
//! queue.decrease_key("a", 1).unwrap();
//!
//! assert_eq!(queue.extract_min().as_deref(), Some("a"));
//! assert_eq!(queue.extract_min().as_deref(), Some("b"));
//! assert_eq!(queue.extract_min(), None);
//! ```

mod error;

use fnv::FnvHashMap;

pub use error::{KaiQueueError, KaiQueueResult};

/// A queued id and its current priority
#[derive(Debug, Clone, PartialEq, Eq)]
struct Element {
    id: String,
    key: u64,
}

/// Binary min-heap keyed by `u64` priorities with O(1) id lookup.
#[derive(Debug, Clone, Default)]
pub struct KaiPriorityQueue {
    /// Implicit binary heap: `heap[i].key <= heap[child].key`
    heap: Vec<Element>,

    /// Heap index of every queued id
    positions: FnvHashMap<String, usize>,
}

impl KaiPriorityQueue {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            positions: FnvHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns whether an element with `id` is queued.
    pub fn is_member(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Returns the current key of `id`, if queued.
    pub fn key_of(&self, id: &str) -> Option<u64> {
        self.positions.get(id).map(|&index| self.heap[index].key)
    }

    /// Returns the minimum element without removing it.
    pub fn peek_min(&self) -> Option<(&str, u64)> {
        self.heap.first().map(|e| (e.id.as_str(), e.key))
    }

    /// Inserts `id` with priority `key`.
    ///
    /// # Errors
    ///
    /// Returns `KaiQueueError::DuplicateId` if `id` is already queued; the
    /// queue is left unchanged.
    pub fn insert<S: Into<String>>(&mut self, id: S, key: u64) -> KaiQueueResult<()> {
        let id = id.into();
        if self.positions.contains_key(&id) {
            return Err(KaiQueueError::DuplicateId(id));
        }

        let index = self.heap.len();
        self.positions.insert(id.clone(), index);
        self.heap.push(Element { id, key });
        self.sift_up(index);
        Ok(())
    }

    /// Lowers the key of `id` to `new_key` and restores heap order.
    ///
    /// Setting the key to its current value is allowed and changes nothing.
    ///
    /// # Errors
    ///
    /// * `KaiQueueError::UnknownId` if `id` is not queued.
    /// * `KaiQueueError::KeyIncreased` if `new_key` exceeds the current key.
    pub fn decrease_key(&mut self, id: &str, new_key: u64) -> KaiQueueResult<()> {
        let index = *self
            .positions
            .get(id)
            .ok_or_else(|| KaiQueueError::UnknownId(id.to_string()))?;

        let current = self.heap[index].key;
        if new_key > current {
            return Err(KaiQueueError::KeyIncreased {
                id: id.to_string(),
                current,
                requested: new_key,
            });
        }

        self.heap[index].key = new_key;
        self.sift_up(index);
        Ok(())
    }

    /// Removes and returns the id with the smallest key, or `None` when the
    /// queue is empty. Ties are broken by heap position.
    pub fn extract_min(&mut self) -> Option<String> {
        if self.heap.is_empty() {
            return None;
        }

        let last = self.heap.len() - 1;
        self.swap(0, last);
        let min = self.heap.pop()?;
        self.positions.remove(&min.id);

        if !self.heap.is_empty() {
            self.min_heapify(0);
        }
        Some(min.id)
    }

    /// Swaps two heap slots and keeps the position map in step.
    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        for index in [a, b] {
            if let Some(slot) = self.positions.get_mut(&self.heap[index].id) {
                *slot = index;
            }
        }
    }

    /// Move element at index up while its parent has a larger key
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[parent].key > self.heap[index].key {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down until neither child has a smaller key
    fn min_heapify(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.heap[left].key < self.heap[smallest].key {
                smallest = left;
            }
            if right < len && self.heap[right].key < self.heap[smallest].key {
                smallest = right;
            }

            if smallest != index {
                self.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }

    #[cfg(test)]
    fn assert_heap_order(&self) {
        for i in 1..self.heap.len() {
            let parent = (i - 1) / 2;
            assert!(
                self.heap[parent].key <= self.heap[i].key,
                "heap order violated at index {i}"
            );
        }
        for (id, &index) in &self.positions {
            assert_eq!(&self.heap[index].id, id);
        }
        assert_eq!(self.positions.len(), self.heap.len());
    }
}
