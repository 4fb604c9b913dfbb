//! Breadth-first traversal frontier.
//!
//! A [`Frontier`] pairs a FIFO queue of nodes still to be searched with
//! the set of nodes already searched:
//!
//! ```
//! use treequery::query::Frontier;
//!
//! let mut frontier = Frontier::new();
//! frontier.push(1);
//! frontier.push(2);
//! while let Some(item) = frontier.pop() {
//!     // pop() marks the item visited, so pushing it again is a no-op
//!     assert!(!frontier.push(item));
//! }
//! ```

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// A FIFO queue of pending items plus the set of items already popped.
///
/// An item that has been visited is never queued again, which bounds the
/// work done over graphs whose links loop back on themselves.
#[derive(Debug, Clone)]
pub struct Frontier<T> {
    pending: VecDeque<T>,
    visited: HashSet<T>,
}

impl<T: Clone + Eq + Hash> Frontier<T> {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
            visited: HashSet::new(),
        }
    }

    /// Creates a frontier for a forked search.
    ///
    /// The fork shares this frontier's visited set as of now but starts
    /// with nothing pending. Later pushes and pops on either side do not
    /// affect the other.
    pub fn fork(&self) -> Self {
        Self {
            pending: VecDeque::new(),
            visited: self.visited.clone(),
        }
    }

    /// Adds an item to the end of the queue.
    ///
    /// Returns false, and queues nothing, if the item was already visited.
    pub fn push(&mut self, item: T) -> bool {
        if self.visited.contains(&item) {
            return false;
        }
        self.pending.push_back(item);
        true
    }

    /// Pops the next unvisited item and marks it visited.
    ///
    /// An item queued twice before being popped is only returned once.
    pub fn pop(&mut self) -> Option<T> {
        while let Some(item) = self.pending.pop_front() {
            if self.visited.insert(item.clone()) {
                return Some(item);
            }
        }
        None
    }

    /// Marks an item visited without queueing it.
    pub fn mark_visited(&mut self, item: T) -> bool {
        self.visited.insert(item)
    }

    /// Returns true if the item has already been popped or marked.
    pub fn is_visited(&self, item: &T) -> bool {
        self.visited.contains(item)
    }

    /// Returns true when no items remain to be searched.
    pub fn is_done(&self) -> bool {
        self.pending.iter().all(|item| self.visited.contains(item))
    }

    /// Number of queued entries, including duplicates not yet skipped.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of visited items.
    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }
}

impl<T: Clone + Eq + Hash> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::new();
        frontier.push("a");
        frontier.push("b");
        frontier.push("c");
        assert_eq!(frontier.pop(), Some("a"));
        assert_eq!(frontier.pop(), Some("b"));
        assert_eq!(frontier.pop(), Some("c"));
        assert_eq!(frontier.pop(), None);
        assert!(frontier.is_done());
    }

    #[test]
    fn test_visited_items_are_not_queued_again() {
        let mut frontier = Frontier::new();
        frontier.push(1);
        assert_eq!(frontier.pop(), Some(1));
        assert!(frontier.is_visited(&1));
        assert!(!frontier.push(1));
        assert_eq!(frontier.pending_len(), 0);
    }

    #[test]
    fn test_duplicate_pending_popped_once() {
        let mut frontier = Frontier::new();
        frontier.push(7);
        frontier.push(7);
        assert_eq!(frontier.pending_len(), 2);
        assert_eq!(frontier.pop(), Some(7));
        assert!(frontier.is_done());
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_fork_inherits_visited_not_pending() {
        let mut frontier = Frontier::new();
        frontier.push(1);
        frontier.push(2);
        frontier.pop();

        let mut fork = frontier.fork();
        assert!(fork.is_visited(&1));
        assert!(fork.is_done());
        assert!(!fork.push(1));
        assert!(fork.push(3));
        assert_eq!(fork.pop(), Some(3));

        // the source frontier never sees the fork's work
        assert!(!frontier.is_visited(&3));
        assert_eq!(frontier.pop(), Some(2));
        assert!(!fork.is_visited(&2));
    }

    #[test]
    fn test_mark_visited() {
        let mut frontier = Frontier::new();
        assert!(frontier.mark_visited(5));
        assert!(!frontier.mark_visited(5));
        assert!(!frontier.push(5));
        assert_eq!(frontier.visited_len(), 1);
    }
}
