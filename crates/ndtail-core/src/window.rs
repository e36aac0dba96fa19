//! Fixed-capacity FIFO window.
//!
//! [`TailWindow`] keeps the most recent `capacity` items pushed into it. When
//! the window is full, pushing evicts the oldest item first, so iteration
//! always yields the retained items oldest to newest.

use std::collections::VecDeque;

/// Upper bound on the up-front reservation. Larger windows grow on demand,
/// so a huge `capacity` costs nothing until records actually arrive.
const MAX_PREALLOC: usize = 1024;

/// A bounded window over a stream that remembers only its tail.
#[derive(Debug, Clone)]
pub struct TailWindow<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> TailWindow<T> {
    /// Create an empty window holding at most `capacity` items.
    ///
    /// A capacity of zero is valid: the window never stores anything.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity.min(MAX_PREALLOC)),
            capacity,
        }
    }

    /// Append an item, evicting the oldest one if the window is full.
    ///
    /// Returns the evicted item, if any. With zero capacity the pushed item
    /// itself is handed back.
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(item);
        }
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        evicted
    }

    /// Maximum number of items the window retains.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the window holds `capacity` items.
    ///
    /// For a non-zero capacity this means the next push evicts the oldest
    /// item. A zero-capacity window is always full: pushes hand the new item
    /// straight back instead of evicting anything.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Consume the window, returning its items oldest to newest.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.items.into()
    }
}
