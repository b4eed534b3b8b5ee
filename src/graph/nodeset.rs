//! Compact set of nodes.
//!
//! [`NodeSet`] is a fixed-capacity bit vector over node indices, used for visited
//! marks, tree membership and neighbourhood lookups where a `HashSet<NodeId>` would
//! spend most of its time hashing dense integers.

use crate::graph::handle::NodeId;

/// A bit vector holding a subset of `0..capacity` node indices.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NodeSet {
    /// The bits, 64 nodes per word.
    words: Vec<u64>,
    /// Number of nodes the set can hold.
    capacity: usize,
}

impl NodeSet {
    /// Creates an empty set able to hold nodes `0..capacity`.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(64)],
            capacity,
        }
    }

    /// Returns the number of nodes the set can hold.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Adds `node`; returns `true` if it was not present before.
    ///
    /// # Panics
    ///
    /// Panics if `node` is outside the set's capacity.
    pub fn insert(&mut self, node: NodeId) -> bool {
        let (word, mask) = self.locate(node);
        let was_absent = self.words[word] & mask == 0;
        self.words[word] |= mask;
        was_absent
    }

    /// Removes `node`; returns `true` if it was present.
    ///
    /// # Panics
    ///
    /// Panics if `node` is outside the set's capacity.
    pub fn remove(&mut self, node: NodeId) -> bool {
        let (word, mask) = self.locate(node);
        let was_present = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        was_present
    }

    /// Returns `true` if `node` is in the set. Nodes beyond capacity are never contained.
    #[must_use]
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        if node.index() >= self.capacity {
            return false;
        }
        let (word, mask) = self.locate(node);
        self.words[word] & mask != 0
    }

    /// Returns the number of nodes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if the set holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Iterates the nodes in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| {
            let mut bits = word;
            std::iter::from_fn(move || {
                if bits == 0 {
                    return None;
                }
                let bit = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(NodeId::new(wi * 64 + bit))
            })
        })
    }

    #[inline]
    fn locate(&self, node: NodeId) -> (usize, u64) {
        assert!(
            node.index() < self.capacity,
            "node {} outside set of capacity {}",
            node,
            self.capacity
        );
        (node.index() / 64, 1u64 << (node.index() % 64))
    }
}

impl std::fmt::Debug for NodeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_contains_remove() {
        let mut set = NodeSet::new(130);
        assert!(set.is_empty());

        assert!(set.insert(NodeId::new(0)));
        assert!(set.insert(NodeId::new(129)));
        assert!(!set.insert(NodeId::new(129)));

        assert!(set.contains(NodeId::new(129)));
        assert!(!set.contains(NodeId::new(64)));
        assert!(!set.contains(NodeId::new(1000)));
        assert_eq!(set.len(), 2);

        assert!(set.remove(NodeId::new(0)));
        assert!(!set.remove(NodeId::new(0)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iter_ascending() {
        let mut set = NodeSet::new(200);
        for i in [150, 3, 64, 63] {
            set.insert(NodeId::new(i));
        }

        let nodes: Vec<usize> = set.iter().map(NodeId::index).collect();
        assert_eq!(nodes, vec![3, 63, 64, 150]);
    }

    #[test]
    fn test_clear() {
        let mut set = NodeSet::new(10);
        set.insert(NodeId::new(4));
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 10);
    }

    #[test]
    #[should_panic(expected = "outside set")]
    fn test_insert_out_of_range_panics() {
        let mut set = NodeSet::new(4);
        set.insert(NodeId::new(4));
    }
}
