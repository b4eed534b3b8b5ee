//! Per-call adjacency projection of a [`Network`].
//!
//! Every algorithm starts by building an [`AdjacencyIndex`]: one pass over the edge set
//! that materialises, per node, the ordered list of `(edge, neighbour)` pairs the
//! algorithm is allowed to follow.
//!
//! - `directed = true`: an edge `s -> t` appears only in `s`'s list (and in `t`'s
//!   incoming list)
//! - `directed = false`: every edge appears in both endpoints' lists
//! - self-loops contribute a single entry to their node's list in both modes
//! - parallel edges are never collapsed
//!
//! Lists are in edge insertion order, which makes traversal order and every tie-break
//! downstream deterministic and visible to the caller.

use crate::{
    error::graph_error,
    graph::{
        handle::{EdgeId, NodeId},
        traits::{GraphBase, Network},
    },
    Error, Result,
};

/// One adjacency entry: the edge that is followed and the node it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Adjacent {
    /// Edge being traversed
    pub edge: EdgeId,
    /// Node reached by traversing `edge`
    pub node: NodeId,
}

/// Adjacency lists of a graph snapshot, built once per algorithm call.
///
/// # Examples
///
/// ```rust
/// use netscope::graph::{AdjacencyIndex, DirectedGraph, NodeId};
///
/// let graph = DirectedGraph::from_weighted_edges(3, &[(0, 1, 1.0), (2, 0, 1.0)])?;
///
/// let directed = AdjacencyIndex::build(&graph, true)?;
/// assert_eq!(directed.neighbors(NodeId::new(0)).len(), 1);
///
/// let undirected = AdjacencyIndex::build(&graph, false)?;
/// assert_eq!(undirected.neighbors(NodeId::new(0)).len(), 2);
/// # Ok::<(), netscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyIndex {
    /// Whether lists follow edge orientation
    directed: bool,
    /// Endpoints of every edge, indexed by `EdgeId`
    endpoints: Vec<(NodeId, NodeId)>,
    /// Followable entries per node
    outgoing: Vec<Vec<Adjacent>>,
    /// Reverse entries per node; only populated for directed indices
    incoming: Vec<Vec<Adjacent>>,
}

impl AdjacencyIndex {
    /// Projects `graph` into adjacency lists.
    ///
    /// # Arguments
    ///
    /// * `graph` - The graph snapshot to read
    /// * `directed` - Whether edges may only be followed from source to target
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyGraph`] if the graph has no nodes
    /// - [`Error::GraphError`] if an edge reports missing or foreign endpoints
    ///
    /// # Complexity
    ///
    /// O(V + E) time and space.
    pub fn build<G: Network>(graph: &G, directed: bool) -> Result<Self> {
        let node_count = graph.node_count();
        if node_count == 0 {
            return Err(Error::EmptyGraph);
        }

        let edge_count = graph.edge_count();
        let mut endpoints = Vec::with_capacity(edge_count);
        let mut outgoing = vec![Vec::new(); node_count];
        let mut incoming = if directed {
            vec![Vec::new(); node_count]
        } else {
            Vec::new()
        };

        for edge in graph.edge_ids() {
            let Some((source, target)) = graph.edge_endpoints(edge) else {
                return Err(graph_error!("edge {} has no endpoints", edge));
            };
            if source.index() >= node_count || target.index() >= node_count {
                return Err(graph_error!(
                    "edge {} connects {} and {} outside a graph of {} nodes",
                    edge,
                    source,
                    target,
                    node_count
                ));
            }

            endpoints.push((source, target));
            outgoing[source.index()].push(Adjacent { edge, node: target });
            if directed {
                incoming[target.index()].push(Adjacent { edge, node: source });
            } else if source != target {
                outgoing[target.index()].push(Adjacent { edge, node: source });
            }
        }

        log::trace!(
            "built {} adjacency index: {} nodes, {} edges",
            if directed { "directed" } else { "undirected" },
            node_count,
            edge_count
        );

        Ok(AdjacencyIndex {
            directed,
            endpoints,
            outgoing,
            incoming,
        })
    }

    /// Returns `true` if the index follows edge orientation.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Returns the entries that can be followed out of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not part of the indexed graph; validate handles with
    /// [`check_node`](Self::check_node) first.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> &[Adjacent] {
        &self.outgoing[node.index()]
    }

    /// Returns the entries that lead *into* `node`, each naming the node they come from.
    ///
    /// For an undirected index this is the same list as [`neighbors`](Self::neighbors).
    ///
    /// # Panics
    ///
    /// Panics if `node` is not part of the indexed graph.
    #[must_use]
    pub fn incoming(&self, node: NodeId) -> &[Adjacent] {
        if self.directed {
            &self.incoming[node.index()]
        } else {
            &self.outgoing[node.index()]
        }
    }

    /// Returns the `(source, target)` endpoints of `edge`.
    ///
    /// # Panics
    ///
    /// Panics if `edge` is not part of the indexed graph.
    #[must_use]
    pub fn endpoints(&self, edge: EdgeId) -> (NodeId, NodeId) {
        self.endpoints[edge.index()]
    }

    /// Returns an iterator over every followable `(from, entry)` pair, grouped by node in
    /// ascending node order.
    ///
    /// For an undirected index each non-loop edge is produced twice, once per direction.
    pub fn arcs(&self) -> impl Iterator<Item = (NodeId, Adjacent)> + '_ {
        self.outgoing.iter().enumerate().flat_map(|(i, list)| {
            let from = NodeId::new(i);
            list.iter().map(move |&adj| (from, adj))
        })
    }

    /// Validates that `node` belongs to the indexed graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] for a foreign node.
    pub fn check_node(&self, node: NodeId) -> Result<()> {
        if node.index() < self.outgoing.len() {
            Ok(())
        } else {
            Err(Error::NodeNotFound(node))
        }
    }
}

impl GraphBase for AdjacencyIndex {
    fn node_count(&self) -> usize {
        self.outgoing.len()
    }
}

impl Network for AdjacencyIndex {
    fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.endpoints.get(edge.index()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    fn n(i: usize) -> NodeId {
        NodeId::new(i)
    }

    fn targets(index: &AdjacencyIndex, node: usize) -> Vec<usize> {
        index.neighbors(n(node)).iter().map(|a| a.node.index()).collect()
    }

    #[test]
    fn test_directed_lists_follow_orientation() {
        let graph =
            DirectedGraph::from_weighted_edges(3, &[(0, 1, 1.0), (0, 2, 1.0), (2, 1, 1.0)]).unwrap();
        let index = AdjacencyIndex::build(&graph, true).unwrap();

        assert!(index.is_directed());
        assert_eq!(targets(&index, 0), vec![1, 2]);
        assert_eq!(targets(&index, 1), Vec::<usize>::new());
        let into_one: Vec<usize> = index.incoming(n(1)).iter().map(|a| a.node.index()).collect();
        assert_eq!(into_one, vec![0, 2]);
    }

    #[test]
    fn test_undirected_lists_contain_both_directions() {
        let graph = DirectedGraph::from_weighted_edges(3, &[(0, 1, 1.0), (2, 0, 1.0)]).unwrap();
        let index = AdjacencyIndex::build(&graph, false).unwrap();

        assert_eq!(targets(&index, 0), vec![1, 2]);
        assert_eq!(targets(&index, 1), vec![0]);
        assert_eq!(targets(&index, 2), vec![0]);
        assert_eq!(index.incoming(n(0)), index.neighbors(n(0)));
        assert_eq!(index.arcs().count(), 4);
    }

    #[test]
    fn test_self_loop_single_entry() {
        let graph = DirectedGraph::from_weighted_edges(1, &[(0, 0, 1.0)]).unwrap();

        let undirected = AdjacencyIndex::build(&graph, false).unwrap();
        assert_eq!(undirected.neighbors(n(0)).len(), 1);

        let directed = AdjacencyIndex::build(&graph, true).unwrap();
        assert_eq!(directed.neighbors(n(0)).len(), 1);
        assert_eq!(directed.incoming(n(0)).len(), 1);
    }

    #[test]
    fn test_parallel_edges_not_collapsed() {
        let graph = DirectedGraph::from_weighted_edges(2, &[(0, 1, 1.0), (0, 1, 2.0)]).unwrap();
        let index = AdjacencyIndex::build(&graph, false).unwrap();

        let edges: Vec<EdgeId> = index.neighbors(n(1)).iter().map(|a| a.edge).collect();
        assert_eq!(edges, vec![EdgeId::new(0), EdgeId::new(1)]);
        assert_eq!(index.endpoints(EdgeId::new(1)), (n(0), n(1)));
    }

    #[test]
    fn test_empty_graph_rejected() {
        let graph: DirectedGraph<(), ()> = DirectedGraph::new();
        assert_eq!(
            AdjacencyIndex::build(&graph, true).unwrap_err(),
            Error::EmptyGraph
        );
    }

    #[test]
    fn test_foreign_endpoint_rejected() {
        struct Broken;

        impl GraphBase for Broken {
            fn node_count(&self) -> usize {
                1
            }
        }

        impl Network for Broken {
            fn edge_count(&self) -> usize {
                1
            }

            fn edge_endpoints(&self, _edge: EdgeId) -> Option<(NodeId, NodeId)> {
                Some((NodeId::new(0), NodeId::new(3)))
            }
        }

        let err = AdjacencyIndex::build(&Broken, true).unwrap_err();
        assert!(matches!(err, Error::GraphError(_)));
    }

    #[test]
    fn test_check_node() {
        let graph = DirectedGraph::from_weighted_edges(2, &[]).unwrap();
        let index = AdjacencyIndex::build(&graph, true).unwrap();

        assert!(index.check_node(n(1)).is_ok());
        assert_eq!(index.check_node(n(2)), Err(Error::NodeNotFound(n(2))));
    }
}
