//! Dijkstra's single-source shortest paths for non-negative weights.

use crate::{
    algorithms::{
        frontier::Frontier,
        shortest_path::{Hop, PathTree},
    },
    graph::{AdjacencyIndex, EdgeId, EdgeWeights, Network, NodeId, NodeSet},
    Error, Result,
};

/// Result of [`find_path`].
///
/// # Examples
///
/// ```rust
/// use netscope::{algorithms::find_path, graph::{DirectedGraph, NodeId}};
///
/// let graph = DirectedGraph::from_weighted_edges(
///     3,
///     &[(0, 1, 4.0), (0, 2, 1.0), (2, 1, 2.0)],
/// )?;
///
/// let result = find_path(&graph, NodeId::new(0), true, |e| graph.weight(e))?;
/// assert_eq!(result.distance_to(NodeId::new(1))?, 3.0);
/// assert_eq!(result.predecessor_to(NodeId::new(1))?, Some(NodeId::new(2)));
/// assert_eq!(result.eccentricity(), 3.0);
/// # Ok::<(), netscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DijkstraResult {
    tree: PathTree,
}

impl DijkstraResult {
    /// Returns the source node.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.tree.source
    }

    /// Returns `true` if `target` is reachable from the source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] for a foreign node.
    pub fn has_path_to(&self, target: NodeId) -> Result<bool> {
        Ok(self.tree.dist[self.tree.check(target)?].is_finite())
    }

    /// Returns the shortest distance to `target`, `f64::INFINITY` if unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] for a foreign node.
    pub fn distance_to(&self, target: NodeId) -> Result<f64> {
        Ok(self.tree.dist[self.tree.check(target)?])
    }

    /// Returns the node preceding `target` on its shortest path.
    ///
    /// `None` for the source itself and for unreachable nodes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] for a foreign node.
    pub fn predecessor_to(&self, target: NodeId) -> Result<Option<NodeId>> {
        Ok(self.tree.pred[self.tree.check(target)?].map(|hop| hop.from))
    }

    /// Returns the edge through which `target` is entered on its shortest path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] for a foreign node.
    pub fn predecessor_edge_to(&self, target: NodeId) -> Result<Option<EdgeId>> {
        Ok(self.tree.pred[self.tree.check(target)?].map(|hop| hop.edge))
    }

    /// Returns the nodes of the shortest path to `target`, source first.
    ///
    /// Empty when `target` is unreachable; `[source]` when `target` is the source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] for a foreign node.
    pub fn path_to(&self, target: NodeId) -> Result<Vec<NodeId>> {
        if !self.has_path_to(target)? {
            return Ok(Vec::new());
        }
        Ok(self.tree.walk(target))
    }

    /// Returns the largest finite distance from the source (0 when nothing else is reachable).
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.tree
            .dist
            .iter()
            .copied()
            .filter(|d| d.is_finite())
            .fold(0.0, f64::max)
    }

    pub(crate) fn into_distances(self) -> Vec<f64> {
        self.tree.dist
    }
}

/// Computes shortest paths from `source` with Dijkstra's algorithm.
///
/// The weight function is evaluated once per edge. Ties between equally distant
/// frontier nodes are broken by discovery order, and a node keeps the first
/// predecessor that reached it with its final distance.
///
/// # Arguments
///
/// * `graph` - The graph to search
/// * `source` - The starting node
/// * `directed` - Whether edges may only be followed from source to target
/// * `weight` - Edge weight function; weights must be non-negative
///
/// # Errors
///
/// - [`Error::EmptyGraph`] if the graph has no nodes
/// - [`Error::NodeNotFound`] if `source` is not in the graph
/// - [`Error::InvalidWeight`] if any weight is NaN or infinite
/// - [`Error::NegativeWeight`] when a negative edge is relaxed; negative edges the
///   search never reaches are not reported
///
/// # Complexity
///
/// O((V + E) log V) time, O(V + E) space.
pub fn find_path<G, W>(graph: &G, source: NodeId, directed: bool, weight: W) -> Result<DijkstraResult>
where
    G: Network,
    W: Fn(EdgeId) -> f64,
{
    let index = AdjacencyIndex::build(graph, directed)?;
    index.check_node(source)?;
    let weights = EdgeWeights::collect(&index, weight)?;

    log::debug!(
        "dijkstra from {}: {} nodes, {} edges, directed={}",
        source,
        index.node_count(),
        index.edge_count(),
        directed
    );

    dijkstra_from(&index, &weights, source)
}

/// Dijkstra over an already built index; `source` must be valid.
pub(crate) fn dijkstra_from(
    index: &AdjacencyIndex,
    weights: &EdgeWeights,
    source: NodeId,
) -> Result<DijkstraResult> {
    let node_count = index.node_count();
    let mut tree = PathTree::new(source, node_count);
    let mut settled = NodeSet::new(node_count);
    let mut frontier = Frontier::with_capacity(node_count);
    frontier.push(0.0, source);

    while let Some((d, node)) = frontier.pop() {
        if !settled.insert(node) {
            continue;
        }

        for adj in index.neighbors(node) {
            let w = weights.get(adj.edge);
            if w < 0.0 {
                return Err(Error::NegativeWeight {
                    edge: adj.edge,
                    weight: w,
                });
            }
            if settled.contains(adj.node) {
                continue;
            }

            let candidate = d + w;
            if candidate < tree.dist[adj.node.index()] {
                tree.dist[adj.node.index()] = candidate;
                tree.pred[adj.node.index()] = Some(Hop {
                    from: node,
                    edge: adj.edge,
                });
                frontier.push(candidate, adj.node);
            }
        }
    }

    Ok(DijkstraResult { tree })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{unit_weight, DirectedGraph};

    fn n(i: usize) -> NodeId {
        NodeId::new(i)
    }

    /// 0 -> 1 (4), 0 -> 2 (1), 2 -> 1 (2), 1 -> 3 (1), 4 isolated
    fn create_weighted_graph() -> DirectedGraph<(), f64> {
        DirectedGraph::from_weighted_edges(
            5,
            &[(0, 1, 4.0), (0, 2, 1.0), (2, 1, 2.0), (1, 3, 1.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_distances_and_paths() {
        let graph = create_weighted_graph();
        let result = find_path(&graph, n(0), true, |e| graph.weight(e)).unwrap();

        assert_eq!(result.source(), n(0));
        assert_eq!(result.distance_to(n(0)).unwrap(), 0.0);
        assert_eq!(result.distance_to(n(1)).unwrap(), 3.0);
        assert_eq!(result.distance_to(n(3)).unwrap(), 4.0);
        assert_eq!(result.path_to(n(3)).unwrap(), vec![n(0), n(2), n(1), n(3)]);
        assert_eq!(result.path_to(n(0)).unwrap(), vec![n(0)]);
        assert_eq!(result.predecessor_edge_to(n(1)).unwrap(), Some(EdgeId::new(2)));
        assert_eq!(result.predecessor_to(n(0)).unwrap(), None);
    }

    #[test]
    fn test_unreachable_node() {
        let graph = create_weighted_graph();
        let result = find_path(&graph, n(0), true, |e| graph.weight(e)).unwrap();

        assert!(!result.has_path_to(n(4)).unwrap());
        assert_eq!(result.distance_to(n(4)).unwrap(), f64::INFINITY);
        assert_eq!(result.predecessor_to(n(4)).unwrap(), None);
        assert!(result.path_to(n(4)).unwrap().is_empty());
        assert_eq!(result.eccentricity(), 4.0);
    }

    #[test]
    fn test_tie_keeps_first_predecessor() {
        // Two equal-cost routes to 3: through 1 (discovered first) and through 2
        let graph = DirectedGraph::from_weighted_edges(
            4,
            &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)],
        )
        .unwrap();
        let result = find_path(&graph, n(0), true, unit_weight).unwrap();

        assert_eq!(result.predecessor_to(n(3)).unwrap(), Some(n(1)));
    }

    #[test]
    fn test_parallel_edges_lightest_wins() {
        let graph =
            DirectedGraph::from_weighted_edges(2, &[(0, 1, 5.0), (0, 1, 2.0), (0, 1, 2.0)]).unwrap();
        let result = find_path(&graph, n(0), false, |e| graph.weight(e)).unwrap();

        assert_eq!(result.distance_to(n(1)).unwrap(), 2.0);
        assert_eq!(result.predecessor_edge_to(n(1)).unwrap(), Some(EdgeId::new(1)));
    }

    #[test]
    fn test_negative_weight_detected_lazily() {
        // The negative edge 3 -> 2 is unreachable from 0 and is never relaxed.
        let graph =
            DirectedGraph::from_weighted_edges(4, &[(0, 1, 1.0), (3, 2, -1.0)]).unwrap();
        assert!(find_path(&graph, n(0), true, |e| graph.weight(e)).is_ok());

        let err = find_path(&graph, n(3), true, |e| graph.weight(e)).unwrap_err();
        assert_eq!(
            err,
            Error::NegativeWeight {
                edge: EdgeId::new(1),
                weight: -1.0
            }
        );
    }

    #[test]
    fn test_foreign_source() {
        let graph = create_weighted_graph();
        let err = find_path(&graph, n(10), true, unit_weight).unwrap_err();
        assert_eq!(err, Error::NodeNotFound(n(10)));
    }

    #[test]
    fn test_undirected_triangle() {
        let graph =
            DirectedGraph::from_weighted_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]).unwrap();
        let result = find_path(&graph, n(0), false, unit_weight).unwrap();

        assert_eq!(result.distance_to(n(1)).unwrap(), 1.0);
        assert_eq!(result.distance_to(n(2)).unwrap(), 1.0);
        assert_eq!(result.eccentricity(), 1.0);
    }
}
