//! Bellman-Ford single-source shortest paths with negative-cycle detection.

use std::collections::VecDeque;

use crate::{
    algorithms::shortest_path::{Hop, PathTree},
    graph::{AdjacencyIndex, EdgeId, EdgeWeights, Network, NodeId, NodeSet},
    Result,
};

/// Result of [`find_shortest_path`].
///
/// When [`has_negative_cycle`](Self::has_negative_cycle) is `true`, every node reachable
/// from a negative cycle is *affected*: its shortest distance is unbounded below. For
/// affected nodes `has_path_to` is `false`, `distance_to` is `f64::NEG_INFINITY`,
/// `predecessor_to` is `None` and `path_to` is empty. Distances of unaffected nodes
/// remain exact.
#[derive(Debug, Clone)]
pub struct BellmanFordResult {
    tree: PathTree,
    affected: NodeSet,
    negative_cycle: bool,
}

impl BellmanFordResult {
    /// Returns the source node.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.tree.source
    }

    /// Returns `true` if a negative cycle is reachable from the source.
    #[must_use]
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle
    }

    /// Returns `true` if `node` is reachable from a negative cycle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) for a foreign node.
    pub fn is_affected(&self, node: NodeId) -> Result<bool> {
        self.tree.check(node)?;
        Ok(self.affected.contains(node))
    }

    /// Returns `true` if `target` has a well-defined shortest path from the source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) for a foreign node.
    pub fn has_path_to(&self, target: NodeId) -> Result<bool> {
        let i = self.tree.check(target)?;
        Ok(self.tree.dist[i].is_finite() && !self.affected.contains(target))
    }

    /// Returns the shortest distance to `target`.
    ///
    /// `f64::INFINITY` when unreachable, `f64::NEG_INFINITY` when affected by a
    /// negative cycle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) for a foreign node.
    pub fn distance_to(&self, target: NodeId) -> Result<f64> {
        let i = self.tree.check(target)?;
        if self.affected.contains(target) {
            Ok(f64::NEG_INFINITY)
        } else {
            Ok(self.tree.dist[i])
        }
    }

    /// Returns the node preceding `target` on its shortest path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) for a foreign node.
    pub fn predecessor_to(&self, target: NodeId) -> Result<Option<NodeId>> {
        if !self.has_path_to(target)? {
            return Ok(None);
        }
        Ok(self.tree.pred[target.index()].map(|hop| hop.from))
    }

    /// Returns the nodes of the shortest path to `target`, source first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) for a foreign node.
    pub fn path_to(&self, target: NodeId) -> Result<Vec<NodeId>> {
        if !self.has_path_to(target)? {
            return Ok(Vec::new());
        }
        Ok(self.tree.walk(target))
    }

    pub(crate) fn into_distances(self) -> Vec<f64> {
        self.tree.dist
    }
}

/// Computes shortest paths from `source` with the Bellman-Ford algorithm.
///
/// Relaxes every arc for up to `V - 1` rounds, stopping early once a round changes
/// nothing, then runs one more round. Any arc that still relaxes lies downstream of a
/// negative cycle; its target and everything reachable from it are marked affected.
///
/// # Arguments
///
/// * `graph` - The graph to search
/// * `source` - The starting node
/// * `directed` - Whether edges may only be followed from source to target
/// * `weight` - Edge weight function; negative weights are allowed
///
/// # Errors
///
/// - [`Error::EmptyGraph`](crate::Error::EmptyGraph) if the graph has no nodes
/// - [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `source` is not in the graph
/// - [`Error::InvalidWeight`](crate::Error::InvalidWeight) if any weight is NaN or infinite
///
/// # Examples
///
/// ```rust
/// use netscope::{algorithms::find_shortest_path, graph::{DirectedGraph, NodeId}};
///
/// // A -> B (1) -> C (1) -> A (-5)
/// let graph = DirectedGraph::from_weighted_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, -5.0)])?;
///
/// let result = find_shortest_path(&graph, NodeId::new(0), true, |e| graph.weight(e))?;
/// assert!(result.has_negative_cycle());
/// assert!(!result.has_path_to(NodeId::new(2))?);
/// # Ok::<(), netscope::Error>(())
/// ```
///
/// # Complexity
///
/// O(V * E) time, O(V + E) space.
pub fn find_shortest_path<G, W>(
    graph: &G,
    source: NodeId,
    directed: bool,
    weight: W,
) -> Result<BellmanFordResult>
where
    G: Network,
    W: Fn(EdgeId) -> f64,
{
    let index = AdjacencyIndex::build(graph, directed)?;
    index.check_node(source)?;
    let weights = EdgeWeights::collect(&index, weight)?;

    log::debug!(
        "bellman-ford from {}: {} nodes, {} edges, directed={}",
        source,
        index.node_count(),
        index.edge_count(),
        directed
    );

    let result = bellman_ford_from(&index, &weights, source);
    if result.negative_cycle {
        log::warn!(
            "negative cycle reachable from {}: {} nodes have unbounded distance",
            source,
            result.affected.len()
        );
    }
    Ok(result)
}

/// Bellman-Ford over an already built index; `source` must be valid.
pub(crate) fn bellman_ford_from(
    index: &AdjacencyIndex,
    weights: &EdgeWeights,
    source: NodeId,
) -> BellmanFordResult {
    let node_count = index.node_count();
    let mut tree = PathTree::new(source, node_count);

    let mut rounds = 0;
    for _ in 1..node_count {
        rounds += 1;
        let mut changed = false;
        for (from, adj) in index.arcs() {
            let base = tree.dist[from.index()];
            if base == f64::INFINITY {
                continue;
            }
            let candidate = base + weights.get(adj.edge);
            if candidate < tree.dist[adj.node.index()] {
                tree.dist[adj.node.index()] = candidate;
                tree.pred[adj.node.index()] = Some(Hop {
                    from,
                    edge: adj.edge,
                });
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    let mut affected = NodeSet::new(node_count);
    let mut queue = VecDeque::new();
    for (from, adj) in index.arcs() {
        let base = tree.dist[from.index()];
        if base != f64::INFINITY
            && base + weights.get(adj.edge) < tree.dist[adj.node.index()]
            && affected.insert(adj.node)
        {
            queue.push_back(adj.node);
        }
    }

    let negative_cycle = !affected.is_empty();
    while let Some(node) = queue.pop_front() {
        for adj in index.neighbors(node) {
            if affected.insert(adj.node) {
                queue.push_back(adj.node);
            }
        }
    }

    log::trace!("bellman-ford from {} settled after {} rounds", source, rounds);

    BellmanFordResult {
        tree,
        affected,
        negative_cycle,
    }
}
