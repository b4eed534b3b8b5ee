//! Local clustering coefficient.
//!
//! The neighbourhood of a node is the set of distinct nodes it shares an edge with in
//! either direction, itself excluded. Parallel edges and self-loops therefore add
//! nothing, and edge weights are never consulted.

use crate::{
    graph::{AdjacencyIndex, Network, NodeId, NodeSet},
    Result,
};

/// Returns the fraction of neighbour pairs of `node` that are themselves adjacent.
///
/// The coefficient is `2 * links / (k * (k - 1))` where `k` is the number of distinct
/// neighbours. Nodes with fewer than two neighbours score 0. Edges are always read as
/// undirected; the directedness flag is accepted for call-site symmetry with the other
/// centralities and does not change the result.
///
/// # Errors
///
/// - [`Error::EmptyGraph`](crate::Error::EmptyGraph) if the graph has no nodes
/// - [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `node` is not in the graph
///
/// # Examples
///
/// ```rust
/// use netscope::{centrality::get_clustering_coefficient, graph::{DirectedGraph, NodeId}};
///
/// // Triangle 0-1-2 with a pendant 3 on node 0
/// let graph = DirectedGraph::from_weighted_edges(
///     4,
///     &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (0, 3, 1.0)],
/// )?;
///
/// assert_eq!(get_clustering_coefficient(&graph, NodeId::new(1), false)?, 1.0);
/// assert!((get_clustering_coefficient(&graph, NodeId::new(0), true)? - 1.0 / 3.0).abs() < 1e-12);
/// # Ok::<(), netscope::Error>(())
/// ```
///
/// # Complexity
///
/// O(sum of the neighbours' degrees).
pub fn get_clustering_coefficient<G: Network>(
    graph: &G,
    node: NodeId,
    _directed: bool,
) -> Result<f64> {
    let index = AdjacencyIndex::build(graph, false)?;
    index.check_node(node)?;
    let mut scratch = Neighbourhood::new(index.node_count());
    Ok(scratch.coefficient(&index, node))
}

/// Coefficient of every node.
pub(crate) fn clustering_scores(undirected: &AdjacencyIndex) -> Vec<f64> {
    let mut scratch = Neighbourhood::new(undirected.node_count());
    (0..undirected.node_count())
        .map(|i| scratch.coefficient(undirected, NodeId::new(i)))
        .collect()
}

/// Reusable membership sets for neighbourhood scans.
///
/// Both sets are emptied bit by bit after each scan, so scoring a node stays local to
/// its neighbourhood no matter how large the graph is.
struct Neighbourhood {
    members: NodeSet,
    linked: NodeSet,
    list: Vec<NodeId>,
    touched: Vec<NodeId>,
}

impl Neighbourhood {
    fn new(capacity: usize) -> Self {
        Neighbourhood {
            members: NodeSet::new(capacity),
            linked: NodeSet::new(capacity),
            list: Vec::new(),
            touched: Vec::new(),
        }
    }

    fn coefficient(&mut self, index: &AdjacencyIndex, node: NodeId) -> f64 {
        self.list.clear();
        for adj in index.neighbors(node) {
            if adj.node != node && self.members.insert(adj.node) {
                self.list.push(adj.node);
            }
        }

        let k = self.list.len();
        let score = if k < 2 {
            0.0
        } else {
            2.0 * self.count_links(index) as f64 / (k * (k - 1)) as f64
        };

        for &member in &self.list {
            self.members.remove(member);
        }
        score
    }

    /// Number of distinct neighbour pairs joined by an edge.
    fn count_links(&mut self, index: &AdjacencyIndex) -> usize {
        let mut links = 0usize;
        for &a in &self.list {
            for adj in index.neighbors(a) {
                let b = adj.node;
                // Each unordered pair once, from its lower end
                if b.index() > a.index() && self.members.contains(b) && self.linked.insert(b) {
                    self.touched.push(b);
                    links += 1;
                }
            }
            for b in self.touched.drain(..) {
                self.linked.remove(b);
            }
        }
        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    fn n(i: usize) -> NodeId {
        NodeId::new(i)
    }

    #[test]
    fn test_complete_graph_is_one() {
        let mut edges = Vec::new();
        for a in 0..4 {
            for b in (a + 1)..4 {
                edges.push((a, b, 1.0));
            }
        }
        let graph = DirectedGraph::from_weighted_edges(4, &edges).unwrap();

        for i in 0..4 {
            assert_eq!(get_clustering_coefficient(&graph, n(i), false).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_star_is_zero() {
        let graph =
            DirectedGraph::from_weighted_edges(4, &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0)]).unwrap();

        assert_eq!(get_clustering_coefficient(&graph, n(0), false).unwrap(), 0.0);
        assert_eq!(get_clustering_coefficient(&graph, n(1), false).unwrap(), 0.0);
    }

    #[test]
    fn test_ignores_direction_duplicates_and_loops() {
        // 0 -> 1, 2 -> 0, 1 -> 2 twice, 2 -> 1, self-loop on 0
        let graph = DirectedGraph::from_weighted_edges(
            3,
            &[(0, 1, 1.0), (2, 0, 1.0), (1, 2, 1.0), (1, 2, 1.0), (2, 1, 1.0), (0, 0, 1.0)],
        )
        .unwrap();

        let directed = get_clustering_coefficient(&graph, n(0), true).unwrap();
        let undirected = get_clustering_coefficient(&graph, n(0), false).unwrap();
        assert_eq!(directed, 1.0);
        assert_eq!(undirected, 1.0);
    }

    #[test]
    fn test_scores_for_all_nodes() {
        // Square 0-1-2-3 with diagonal 0-2
        let graph = DirectedGraph::from_weighted_edges(
            4,
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0), (0, 2, 1.0)],
        )
        .unwrap();
        let index = AdjacencyIndex::build(&graph, false).unwrap();
        let scores = clustering_scores(&index);

        assert!((scores[0] - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(scores[1], 1.0);
        assert!((scores[2] - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(scores[3], 1.0);
    }

    #[test]
    fn test_scan_leaves_scratch_empty() {
        // Ring 0..6 with a pendant 6 on node 0 and a duplicate edge 1-2
        let graph = DirectedGraph::from_weighted_edges(
            7,
            &[
                (0, 1, 1.0),
                (1, 2, 1.0),
                (1, 2, 1.0),
                (2, 3, 1.0),
                (3, 4, 1.0),
                (4, 5, 1.0),
                (5, 0, 1.0),
                (0, 2, 1.0),
                (0, 6, 1.0),
            ],
        )
        .unwrap();
        let index = AdjacencyIndex::build(&graph, false).unwrap();
        let mut scratch = Neighbourhood::new(index.node_count());

        for i in 0..7 {
            scratch.coefficient(&index, n(i));
            assert!(scratch.members.is_empty());
            assert!(scratch.linked.is_empty());
            assert!(scratch.touched.is_empty());
        }
        // Node 1 sees 0 and 2, which are linked
        assert_eq!(scratch.coefficient(&index, n(1)), 1.0);
    }

    #[test]
    fn test_large_sparse_ring_with_chords() {
        // Every node links to the next two, so each sees 4 neighbours and 3 links among them
        let nodes = 200_000;
        let mut edges = Vec::with_capacity(2 * nodes);
        for i in 0..nodes {
            edges.push((i, (i + 1) % nodes, 1.0));
            edges.push((i, (i + 2) % nodes, 1.0));
        }
        let graph = DirectedGraph::from_weighted_edges(nodes, &edges).unwrap();
        let index = AdjacencyIndex::build(&graph, false).unwrap();

        let scores = clustering_scores(&index);
        assert_eq!(scores.len(), nodes);
        assert!(scores.iter().all(|&s| s == 0.5));
    }
}
