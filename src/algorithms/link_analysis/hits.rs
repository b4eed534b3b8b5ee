//! HITS hub and authority scores.

use crate::{
    centrality::ScoreMap,
    config::HitsConfig,
    graph::{AdjacencyIndex, Network, NodeId},
    Result,
};

/// Result of [`get_hits_scores`] / [`get_hits_scores_with`].
///
/// Both score vectors have unit L2 norm, unless the graph has no edges, in which case
/// every score is 0.
#[derive(Debug, Clone)]
pub struct HitsResults {
    hubs: ScoreMap<NodeId>,
    authorities: ScoreMap<NodeId>,
    iterations: usize,
    residual: f64,
    converged: bool,
}

impl HitsResults {
    /// Returns the hub score of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) for a foreign node.
    pub fn hub(&self, node: NodeId) -> Result<f64> {
        self.hubs.get(node)
    }

    /// Returns the authority score of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) for a foreign node.
    pub fn authority(&self, node: NodeId) -> Result<f64> {
        self.authorities.get(node)
    }

    /// Returns all hub scores.
    #[must_use]
    pub fn hubs(&self) -> &ScoreMap<NodeId> {
        &self.hubs
    }

    /// Returns all authority scores.
    #[must_use]
    pub fn authorities(&self) -> &ScoreMap<NodeId> {
        &self.authorities
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

    /// Returns the combined L1 change of hubs and authorities in the last iteration.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.residual
    }
}

/// Computes HITS scores with the default [`HitsConfig`].
///
/// # Errors
///
/// See [`get_hits_scores_with`].
pub fn get_hits_scores<G: Network>(graph: &G, directed: bool) -> Result<HitsResults> {
    get_hits_scores_with(graph, directed, HitsConfig::default())
}

/// Computes hub and authority scores by alternating power iteration.
///
/// Each round sets `authority(v) = sum(hub(u))` over links `u -> v`, normalises,
/// then sets `hub(u) = sum(authority(v))` over links `u -> v` and normalises. Undirected
/// graphs link every edge both ways.
///
/// # Errors
///
/// - [`Error::InvalidParameter`](crate::Error::InvalidParameter) for an invalid `config`
/// - [`Error::EmptyGraph`](crate::Error::EmptyGraph) if the graph has no nodes
///
/// # Examples
///
/// ```rust
/// use netscope::{algorithms::get_hits_scores, graph::{DirectedGraph, NodeId}};
///
/// // 0 and 1 both point at 2
/// let graph = DirectedGraph::from_weighted_edges(3, &[(0, 2, 1.0), (1, 2, 1.0)])?;
///
/// let hits = get_hits_scores(&graph, true)?;
/// assert!((hits.authority(NodeId::new(2))? - 1.0).abs() < 1e-9);
/// assert_eq!(hits.hub(NodeId::new(2))?, 0.0);
/// # Ok::<(), netscope::Error>(())
/// ```
pub fn get_hits_scores_with<G: Network>(
    graph: &G,
    directed: bool,
    config: HitsConfig,
) -> Result<HitsResults> {
    config.validate()?;
    let index = AdjacencyIndex::build(graph, directed)?;
    let n = index.node_count();

    log::debug!(
        "hits: {} nodes, {} edges, directed={}, epsilon={}",
        n,
        index.edge_count(),
        directed,
        config.epsilon
    );

    if index.edge_count() == 0 {
        return Ok(HitsResults {
            hubs: ScoreMap::from_vec(vec![0.0; n]),
            authorities: ScoreMap::from_vec(vec![0.0; n]),
            iterations: 0,
            residual: 0.0,
            converged: true,
        });
    }

    let initial = 1.0 / (n as f64).sqrt();
    let mut hubs = vec![initial; n];
    let mut auths = vec![initial; n];
    let mut next_hubs = vec![0.0; n];
    let mut next_auths = vec![0.0; n];

    let mut iterations = 0;
    let mut residual = f64::INFINITY;
    let mut converged = false;

    while iterations < config.max_iterations {
        iterations += 1;

        next_auths.fill(0.0);
        for (from, adj) in index.arcs() {
            next_auths[adj.node.index()] += hubs[from.index()];
        }
        normalize(&mut next_auths);

        next_hubs.fill(0.0);
        for (from, adj) in index.arcs() {
            next_hubs[from.index()] += next_auths[adj.node.index()];
        }
        normalize(&mut next_hubs);

        residual = l1_distance(&hubs, &next_hubs) + l1_distance(&auths, &next_auths);
        std::mem::swap(&mut hubs, &mut next_hubs);
        std::mem::swap(&mut auths, &mut next_auths);

        log::trace!("hits iteration {}: residual {}", iterations, residual);
        if residual < config.epsilon {
            converged = true;
            break;
        }
    }

    if !converged {
        log::warn!(
            "hits did not converge within {} iterations (residual {})",
            config.max_iterations,
            residual
        );
    }

    Ok(HitsResults {
        hubs: ScoreMap::from_vec(hubs),
        authorities: ScoreMap::from_vec(auths),
        iterations,
        residual,
        converged,
    })
}

/// Scales `values` to unit L2 norm; a zero vector is left as is.
fn normalize(values: &mut [f64]) {
    let norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in values.iter_mut() {
            *v /= norm;
        }
    }
}

fn l1_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}
