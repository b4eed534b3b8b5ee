//! PageRank by power iteration.

use crate::{
    centrality::ScoreMap,
    config::PageRankConfig,
    graph::{AdjacencyIndex, EdgeId, EdgeWeights, Network, NodeId},
    Result,
};

/// Result of [`get_pageranks`] / [`get_pageranks_with`].
///
/// Scores form a probability distribution over the nodes and sum to 1 up to rounding.
#[derive(Debug, Clone)]
pub struct PagerankResults {
    scores: ScoreMap<NodeId>,
    iterations: usize,
    residual: f64,
    converged: bool,
}

impl PagerankResults {
    /// Returns the PageRank of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) for a foreign node.
    pub fn pagerank(&self, node: NodeId) -> Result<f64> {
        self.scores.get(node)
    }

    /// Returns all scores keyed by node.
    #[must_use]
    pub fn scores(&self) -> &ScoreMap<NodeId> {
        &self.scores
    }

    /// Returns the number of power iterations performed.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns `true` if the residual dropped below `epsilon` before the iteration cap.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Returns the L1 change of the last iteration.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.residual
    }
}

/// Computes PageRank with the default [`PageRankConfig`].
///
/// # Errors
///
/// See [`get_pageranks_with`].
pub fn get_pageranks<G, W>(graph: &G, weight: W, directed: bool) -> Result<PagerankResults>
where
    G: Network,
    W: Fn(EdgeId) -> f64,
{
    get_pageranks_with(graph, weight, directed, PageRankConfig::default())
}

/// Computes PageRank by power iteration over the weighted transition matrix.
///
/// A node passes the fraction `alpha` of its score along its out-edges, split in
/// proportion to edge weight, and the rest is teleported uniformly. Nodes with no
/// out-weight (no out-edges, or only zero-weight ones) are dangling and spread their
/// whole score uniformly over all nodes. Undirected graphs treat every edge as a link
/// in both directions. Parallel edges add up; a self-loop links a node to itself.
///
/// # Arguments
///
/// * `graph` - The graph to rank
/// * `weight` - Edge weight function; use [`unit_weight`](crate::graph::unit_weight)
///   for the unweighted variant
/// * `directed` - Whether links follow edge orientation
/// * `config` - Damping, threshold and iteration cap
///
/// # Errors
///
/// - [`Error::InvalidParameter`](crate::Error::InvalidParameter) for an invalid `config`
/// - [`Error::EmptyGraph`](crate::Error::EmptyGraph) if the graph has no nodes
/// - [`Error::InvalidWeight`](crate::Error::InvalidWeight) for a NaN or infinite weight
/// - [`Error::NegativeWeight`](crate::Error::NegativeWeight) for a negative weight
///
/// # Examples
///
/// ```rust
/// use netscope::{
///     algorithms::get_pageranks_with,
///     config::PageRankConfig,
///     graph::{unit_weight, DirectedGraph, NodeId},
/// };
///
/// // Directed cycle 0 -> 1 -> 2 -> 0: every node is equally important
/// let graph = DirectedGraph::from_weighted_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)])?;
///
/// let ranks = get_pageranks_with(&graph, unit_weight, true, PageRankConfig::strict())?;
/// assert!(ranks.converged());
/// assert!((ranks.pagerank(NodeId::new(1))? - 1.0 / 3.0).abs() < 1e-9);
/// # Ok::<(), netscope::Error>(())
/// ```
///
/// # Complexity
///
/// O(iterations * (V + E)) time, O(V + E) space.
pub fn get_pageranks_with<G, W>(
    graph: &G,
    weight: W,
    directed: bool,
    config: PageRankConfig,
) -> Result<PagerankResults>
where
    G: Network,
    W: Fn(EdgeId) -> f64,
{
    config.validate()?;
    let index = AdjacencyIndex::build(graph, directed)?;
    let weights = EdgeWeights::collect(&index, weight)?;
    weights.require_non_negative()?;

    let n = index.node_count();
    let n_f64 = n as f64;

    let out_weight: Vec<f64> = (0..n)
        .map(|i| {
            index
                .neighbors(NodeId::new(i))
                .iter()
                .map(|adj| weights.get(adj.edge))
                .sum()
        })
        .collect();

    log::debug!(
        "pagerank: {} nodes, {} edges, directed={}, alpha={}, epsilon={}",
        n,
        index.edge_count(),
        directed,
        config.alpha,
        config.epsilon
    );

    let mut scores = vec![1.0 / n_f64; n];
    let mut next = vec![0.0; n];
    let mut iterations = 0;
    let mut residual = f64::INFINITY;
    let mut converged = false;

    while iterations < config.max_iterations {
        iterations += 1;

        let dangling: f64 = (0..n)
            .filter(|&i| out_weight[i] <= 0.0)
            .map(|i| scores[i])
            .sum();
        next.fill((1.0 - config.alpha) / n_f64 + config.alpha * dangling / n_f64);

        for (from, adj) in index.arcs() {
            let total = out_weight[from.index()];
            if total > 0.0 {
                next[adj.node.index()] +=
                    config.alpha * scores[from.index()] * weights.get(adj.edge) / total;
            }
        }

        residual = scores
            .iter()
            .zip(&next)
            .map(|(old, new)| (old - new).abs())
            .sum();
        std::mem::swap(&mut scores, &mut next);

        log::trace!("pagerank iteration {}: residual {}", iterations, residual);
        if residual < config.epsilon {
            converged = true;
            break;
        }
    }

    if converged {
        log::debug!("pagerank converged after {} iterations", iterations);
    } else {
        log::warn!(
            "pagerank did not converge within {} iterations (residual {})",
            config.max_iterations,
            residual
        );
    }

    Ok(PagerankResults {
        scores: ScoreMap::from_vec(scores),
        iterations,
        residual,
        converged,
    })
}
