//! Disjoint-set union over dense node indices.
//!
//! Flat parent/rank arrays with path compression (path halving) and union by rank,
//! giving amortised near-constant `find` and `union`. Used by Kruskal and by the
//! component counting of spanning forests.

use crate::graph::NodeId;

/// Disjoint sets of nodes `0..len`.
///
/// # Examples
///
/// ```rust
/// use netscope::{algorithms::UnionFind, graph::NodeId};
///
/// let mut sets = UnionFind::new(4);
/// assert!(sets.union(NodeId::new(0), NodeId::new(1)));
/// assert!(!sets.union(NodeId::new(1), NodeId::new(0)));
/// assert!(sets.connected(NodeId::new(0), NodeId::new(1)));
/// assert_eq!(sets.set_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl UnionFind {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        UnionFind {
            parent: (0..len).collect(),
            rank: vec![0; len],
            sets: len,
        }
    }

    /// Returns the representative of `node`'s set.
    ///
    /// # Panics
    ///
    /// Panics if `node` is outside `0..len`.
    pub fn find(&mut self, node: NodeId) -> NodeId {
        let mut x = node.index();
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        NodeId::new(x)
    }

    /// Merges the sets of `a` and `b`; returns `false` if they were already one set.
    pub fn union(&mut self, a: NodeId, b: NodeId) -> bool {
        let ra = self.find(a).index();
        let rb = self.find(b).index();
        if ra == rb {
            return false;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    /// Returns `true` if `a` and `b` are in the same set.
    pub fn connected(&mut self, a: NodeId, b: NodeId) -> bool {
        self.find(a) == self.find(b)
    }

    /// Returns the current number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(i: usize) -> NodeId {
        NodeId::new(i)
    }

    #[test]
    fn test_singletons() {
        let mut sets = UnionFind::new(3);
        assert_eq!(sets.set_count(), 3);
        assert_eq!(sets.find(n(2)), n(2));
        assert!(!sets.connected(n(0), n(1)));
    }

    #[test]
    fn test_union_chain() {
        let mut sets = UnionFind::new(6);
        assert!(sets.union(n(0), n(1)));
        assert!(sets.union(n(2), n(3)));
        assert!(sets.union(n(1), n(3)));
        assert!(!sets.union(n(0), n(2)));

        assert!(sets.connected(n(0), n(3)));
        assert!(!sets.connected(n(0), n(4)));
        assert_eq!(sets.set_count(), 3);
    }

    #[test]
    fn test_long_chain_compresses() {
        let mut sets = UnionFind::new(1000);
        for i in 1..1000 {
            sets.union(n(i - 1), n(i));
        }
        assert_eq!(sets.set_count(), 1);
        let root = sets.find(n(999));
        assert_eq!(sets.find(n(0)), root);
    }
}
