//! Floyd-Warshall all-pairs shortest paths.

use crate::{
    algorithms::shortest_path::Hop,
    graph::{AdjacencyIndex, EdgeId, EdgeWeights, Network, NodeId},
    Error, Result,
};

/// Result of [`find_all_pair_shortest_path`].
///
/// Distances are held in a dense `V x V` matrix together with, per pair, the last hop
/// of the shortest path (predecessor node and the concrete edge). Between parallel
/// edges the lightest one is used, the lowest `EdgeId` on equal weight.
///
/// # Negative cycles
///
/// A pair `(s, t)` is *affected* when `s` reaches a node on a negative cycle that in
/// turn reaches `t`. Affected pairs have no well-defined shortest path: `has_path` is
/// `false`, `distance` is `f64::NEG_INFINITY` and `path` is empty.
#[derive(Debug, Clone)]
pub struct FloydWarshallResult {
    node_count: usize,
    dist: Vec<f64>,
    last: Vec<Option<Hop>>,
    on_cycle: Vec<bool>,
    /// Row-major affected-pair matrix; empty when there is no negative cycle
    affected: Vec<bool>,
    /// One reconstructed cycle, for reporting only
    cycle: Vec<EdgeId>,
}

impl FloydWarshallResult {
    /// Derives the negative cycle data from relaxed `V x V` distance and last-hop matrices.
    fn from_matrices(n: usize, dist: Vec<f64>, last: Vec<Option<Hop>>) -> Self {
        let on_cycle: Vec<bool> = (0..n).map(|i| dist[i * n + i] < 0.0).collect();
        let cycle_nodes: Vec<usize> = (0..n).filter(|&c| on_cycle[c]).collect();

        let (affected, cycle) = match cycle_nodes.first() {
            None => (Vec::new(), Vec::new()),
            Some(&first) => {
                log::warn!(
                    "floyd-warshall found {} nodes on negative cycles",
                    cycle_nodes.len()
                );
                let cycle = reconstruct_cycle(&last, n, first);
                if cycle.is_empty() {
                    log::warn!("floyd-warshall could not trace the negative cycle through n{first}");
                }
                (affected_pairs(&dist, &cycle_nodes, n), cycle)
            }
        };

        FloydWarshallResult {
            node_count: n,
            dist,
            last,
            on_cycle,
            affected,
            cycle,
        }
    }

    fn check(&self, node: NodeId) -> Result<usize> {
        if node.index() < self.node_count {
            Ok(node.index())
        } else {
            Err(Error::NodeNotFound(node))
        }
    }

    fn cell(&self, source: NodeId, target: NodeId) -> Result<usize> {
        Ok(self.check(source)? * self.node_count + self.check(target)?)
    }

    fn is_affected_cell(&self, cell: usize) -> bool {
        !self.affected.is_empty() && self.affected[cell]
    }

    /// Returns `true` if any negative cycle exists in the graph.
    #[must_use]
    pub fn has_negative_cycle(&self) -> bool {
        self.on_cycle.iter().any(|&c| c)
    }

    /// Returns the edges of one negative cycle in traversal order, or an empty vector.
    ///
    /// The cycle is reconstructed from the first node (in node order) found to lie on
    /// a negative cycle.
    #[must_use]
    pub fn negative_cycle(&self) -> &[EdgeId] {
        &self.cycle
    }

    /// Returns `true` if `node` lies on a negative cycle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] for a foreign node.
    pub fn is_on_negative_cycle(&self, node: NodeId) -> Result<bool> {
        Ok(self.on_cycle[self.check(node)?])
    }

    /// Returns `true` if `target` is reachable from `source` by a well-defined shortest path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if either node is foreign.
    pub fn has_path(&self, source: NodeId, target: NodeId) -> Result<bool> {
        let cell = self.cell(source, target)?;
        Ok(self.dist[cell].is_finite() && !self.is_affected_cell(cell))
    }

    /// Returns the shortest distance from `source` to `target`.
    ///
    /// `f64::INFINITY` when unreachable, `f64::NEG_INFINITY` for affected pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if either node is foreign.
    pub fn distance(&self, source: NodeId, target: NodeId) -> Result<f64> {
        let cell = self.cell(source, target)?;
        if self.is_affected_cell(cell) {
            Ok(f64::NEG_INFINITY)
        } else {
            Ok(self.dist[cell])
        }
    }

    /// Returns the edges of the shortest path from `source` to `target`, in order.
    ///
    /// Empty when there is no path, the pair is affected, or `source == target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if either node is foreign.
    pub fn path(&self, source: NodeId, target: NodeId) -> Result<Vec<EdgeId>> {
        if !self.has_path(source, target)? {
            return Ok(Vec::new());
        }

        let row = source.index() * self.node_count;
        let mut edges = Vec::new();
        let mut current = target;
        while current != source && edges.len() < self.node_count {
            let Some(hop) = self.last[row + current.index()] else {
                break;
            };
            edges.push(hop.edge);
            current = hop.from;
        }
        edges.reverse();
        Ok(edges)
    }
}

/// Computes shortest paths between all pairs of nodes with the Floyd-Warshall algorithm.
///
/// # Arguments
///
/// * `graph` - The graph to search
/// * `directed` - Whether edges may only be followed from source to target
/// * `weight` - Edge weight function; negative weights are allowed
///
/// # Errors
///
/// - [`Error::EmptyGraph`] if the graph has no nodes
/// - [`Error::InvalidWeight`] if any weight is NaN or infinite
///
/// # Examples
///
/// ```rust
/// use netscope::{algorithms::find_all_pair_shortest_path, graph::{DirectedGraph, EdgeId, NodeId}};
///
/// let graph = DirectedGraph::from_weighted_edges(3, &[(0, 1, 2.0), (1, 2, 2.0), (0, 2, 5.0)])?;
///
/// let result = find_all_pair_shortest_path(&graph, true, |e| graph.weight(e))?;
/// assert_eq!(result.distance(NodeId::new(0), NodeId::new(2))?, 4.0);
/// assert_eq!(result.path(NodeId::new(0), NodeId::new(2))?, vec![EdgeId::new(0), EdgeId::new(1)]);
/// assert!(!result.has_path(NodeId::new(2), NodeId::new(0))?);
/// # Ok::<(), netscope::Error>(())
/// ```
///
/// # Complexity
///
/// O(V³) time, O(V²) space.
pub fn find_all_pair_shortest_path<G, W>(
    graph: &G,
    directed: bool,
    weight: W,
) -> Result<FloydWarshallResult>
where
    G: Network,
    W: Fn(EdgeId) -> f64,
{
    let index = AdjacencyIndex::build(graph, directed)?;
    let weights = EdgeWeights::collect(&index, weight)?;
    let n = index.node_count();

    log::debug!(
        "floyd-warshall: {} nodes, {} edges, directed={}",
        n,
        index.edge_count(),
        directed
    );

    let mut dist = vec![f64::INFINITY; n * n];
    let mut last: Vec<Option<Hop>> = vec![None; n * n];
    for i in 0..n {
        dist[i * n + i] = 0.0;
    }

    // Direct edges; the strict comparison keeps the first of equally light parallel edges.
    for (from, adj) in index.arcs() {
        let w = weights.get(adj.edge);
        let cell = from.index() * n + adj.node.index();
        if w < dist[cell] {
            dist[cell] = w;
            last[cell] = Some(Hop {
                from,
                edge: adj.edge,
            });
        }
    }

    for k in 0..n {
        for i in 0..n {
            let ik = dist[i * n + k];
            if ik == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                let kj = dist[k * n + j];
                if kj == f64::INFINITY {
                    continue;
                }
                let candidate = ik + kj;
                if candidate < dist[i * n + j] {
                    dist[i * n + j] = candidate;
                    last[i * n + j] = last[k * n + j];
                }
            }
        }
    }

    Ok(FloydWarshallResult::from_matrices(n, dist, last))
}

/// Marks every pair `(s, t)` where `s` reaches a cycle node that reaches `t`.
fn affected_pairs(dist: &[f64], cycle_nodes: &[usize], n: usize) -> Vec<bool> {
    let mut affected = vec![false; n * n];
    for s in 0..n {
        for &c in cycle_nodes {
            if dist[s * n + c] == f64::INFINITY {
                continue;
            }
            for t in 0..n {
                if dist[c * n + t] != f64::INFINITY {
                    affected[s * n + t] = true;
                }
            }
        }
    }
    affected
}

/// Follows the last-hop links of row `k` until a node repeats and returns the cycle's edges.
fn reconstruct_cycle(last: &[Option<Hop>], n: usize, k: usize) -> Vec<EdgeId> {
    let row = k * n;

    // After `n` steps back the walk is guaranteed to be inside the cycle.
    let mut node = k;
    for _ in 0..n {
        match last[row + node] {
            Some(hop) => node = hop.from.index(),
            None => return Vec::new(),
        }
    }

    let start = node;
    let mut edges = Vec::new();
    loop {
        let Some(hop) = last[row + node] else {
            return Vec::new();
        };
        edges.push(hop.edge);
        node = hop.from.index();
        if node == start || edges.len() > n {
            break;
        }
    }
    edges.reverse();
    edges
}
