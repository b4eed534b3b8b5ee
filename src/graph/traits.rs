//! The read-only graph contract consumed by every algorithm.
//!
//! The engine never owns or mutates a graph. Algorithms take any type implementing
//! [`Network`] and read its structure once, at call entry, into an
//! [`AdjacencyIndex`](crate::graph::AdjacencyIndex).
//!
//! # Architecture
//!
//! - [`GraphBase`] - Node count and node enumeration
//! - [`Network`] - Edge enumeration and edge endpoints
//!
//! # Contract
//!
//! Node and edge handles are dense arena indices: a graph with `n` nodes and `m` edges
//! yields exactly `NodeId(0..n)` and `EdgeId(0..m)`, and edge enumeration order is
//! insertion order. Adjacency order, and therefore every tie-break in this crate,
//! derives from that order.
//!
//! The graph must not change while a call is in flight. This is a precondition on the
//! caller; the engine does not guard against it.

use crate::graph::{EdgeId, NodeId};

/// Base trait providing the node set of a graph.
///
/// # Examples
///
/// ```rust
/// use netscope::graph::{DirectedGraph, GraphBase};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// graph.add_node("A");
/// graph.add_node("B");
///
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.node_ids().count(), 2);
/// ```
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers, in ascending index order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.node_count()).map(NodeId::new)
    }

    /// Returns `true` if `node` belongs to this graph.
    fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }
}

/// A graph whose edges can be enumerated together with their endpoints.
///
/// This is the whole collaborator contract: direction, adjacency and weights are all
/// derived by the engine from `(source, target)` pairs.
///
/// # Examples
///
/// ```rust
/// use netscope::graph::{GraphBase, Network, NodeId, EdgeId};
///
/// // An external edge list can be plugged in directly.
/// struct EdgeList {
///     nodes: usize,
///     edges: Vec<(usize, usize)>,
/// }
///
/// impl GraphBase for EdgeList {
///     fn node_count(&self) -> usize {
///         self.nodes
///     }
/// }
///
/// impl Network for EdgeList {
///     fn edge_count(&self) -> usize {
///         self.edges.len()
///     }
///
///     fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
///         self.edges
///             .get(edge.index())
///             .map(|&(s, t)| (NodeId::new(s), NodeId::new(t)))
///     }
/// }
///
/// let graph = EdgeList { nodes: 2, edges: vec![(0, 1)] };
/// assert_eq!(graph.edge_endpoints(EdgeId::new(0)), Some((NodeId::new(0), NodeId::new(1))));
/// ```
pub trait Network: GraphBase {
    /// Returns the number of edges in the graph.
    fn edge_count(&self) -> usize;

    /// Returns the `(source, target)` endpoints of `edge`, or `None` for a foreign edge.
    ///
    /// For graphs used undirected the orientation is irrelevant, but it is still what
    /// `directed = true` queries follow.
    fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)>;

    /// Returns an iterator over all edge identifiers, in insertion order.
    fn edge_ids(&self) -> impl Iterator<Item = EdgeId> {
        (0..self.edge_count()).map(EdgeId::new)
    }

    /// Returns `true` if `edge` belongs to this graph.
    fn contains_edge(&self, edge: EdgeId) -> bool {
        edge.index() < self.edge_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestGraph {
        node_count: usize,
        edges: Vec<(NodeId, NodeId)>,
    }

    impl GraphBase for TestGraph {
        fn node_count(&self) -> usize {
            self.node_count
        }
    }

    impl Network for TestGraph {
        fn edge_count(&self) -> usize {
            self.edges.len()
        }

        fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
            self.edges.get(edge.index()).copied()
        }
    }

    #[test]
    fn test_default_enumeration() {
        let graph = TestGraph {
            node_count: 3,
            edges: vec![(NodeId::new(0), NodeId::new(2))],
        };

        let nodes: Vec<NodeId> = graph.node_ids().collect();
        assert_eq!(nodes, vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)]);

        let edges: Vec<EdgeId> = graph.edge_ids().collect();
        assert_eq!(edges, vec![EdgeId::new(0)]);
    }

    #[test]
    fn test_membership() {
        let graph = TestGraph {
            node_count: 2,
            edges: vec![(NodeId::new(0), NodeId::new(1))],
        };

        assert!(graph.contains_node(NodeId::new(1)));
        assert!(!graph.contains_node(NodeId::new(2)));
        assert!(graph.contains_edge(EdgeId::new(0)));
        assert!(!graph.contains_edge(EdgeId::new(1)));
        assert_eq!(graph.edge_endpoints(EdgeId::new(5)), None);
    }
}
