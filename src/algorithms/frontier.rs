//! Priority frontier shared by Dijkstra and Prim.
//!
//! A binary min-heap keyed by an `f64` priority. Entries with equal priority pop in
//! the order they were pushed, which turns adjacency order into the tie-break rule
//! of every algorithm built on top of it.
//!
//! The frontier uses lazy deletion: a key may be pushed several times with improving
//! priorities and consumers skip stale pops by checking their own settled set.

use std::{cmp::Ordering, collections::BinaryHeap};

/// One heap entry.
#[derive(Debug, Clone, Copy)]
struct Entry<T> {
    priority: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed so that `BinaryHeap` (a max-heap) yields the smallest priority first,
    // and among equal priorities the earliest push.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue with first-in-first-out tie-breaking.
///
/// # Examples
///
/// ```rust
/// use netscope::algorithms::Frontier;
///
/// let mut frontier = Frontier::new();
/// frontier.push(2.0, 'b');
/// frontier.push(1.0, 'a');
/// frontier.push(2.0, 'c');
///
/// assert_eq!(frontier.pop(), Some((1.0, 'a')));
/// assert_eq!(frontier.pop(), Some((2.0, 'b')));
/// assert_eq!(frontier.pop(), Some((2.0, 'c')));
/// assert_eq!(frontier.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Frontier<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> {
    /// Creates an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty frontier with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Adds `item` with the given `priority`.
    pub fn push(&mut self, priority: f64, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority,
            seq,
            item,
        });
    }

    /// Removes and returns the entry with the smallest priority.
    pub fn pop(&mut self) -> Option<(f64, T)> {
        self.heap.pop().map(|e| (e.priority, e.item))
    }

    /// Returns the number of queued entries, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_priority_order() {
        let mut frontier = Frontier::with_capacity(4);
        frontier.push(3.0, 3);
        frontier.push(-1.0, -1);
        frontier.push(0.5, 0);
        frontier.push(10.0, 10);

        let order: Vec<i32> = std::iter::from_fn(|| frontier.pop().map(|(_, i)| i)).collect();
        assert_eq!(order, vec![-1, 0, 3, 10]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_ties_are_fifo() {
        let mut frontier = Frontier::new();
        for i in 0..8 {
            frontier.push(1.0, i);
        }
        frontier.push(0.0, 100);

        assert_eq!(frontier.pop(), Some((0.0, 100)));
        for i in 0..8 {
            assert_eq!(frontier.pop(), Some((1.0, i)));
        }
    }

    #[test]
    fn test_duplicate_keys_kept() {
        let mut frontier = Frontier::new();
        frontier.push(5.0, 'x');
        frontier.push(2.0, 'x');

        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop(), Some((2.0, 'x')));
        assert_eq!(frontier.pop(), Some((5.0, 'x')));
    }

    #[test]
    fn test_infinity_sorts_last() {
        let mut frontier = Frontier::new();
        frontier.push(f64::INFINITY, 'z');
        frontier.push(f64::MAX, 'y');

        assert_eq!(frontier.pop().map(|(_, c)| c), Some('y'));
        assert_eq!(frontier.pop().map(|(_, c)| c), Some('z'));
    }
}
