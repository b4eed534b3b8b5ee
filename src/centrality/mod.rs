//! Node and edge centrality measures.
//!
//! Two families of metrics are provided:
//!
//! | Family | Metrics | Cost |
//! |--------|---------|------|
//! | Local | degree, in/out-degree, clustering coefficient | O(degree) per node |
//! | Path based | closeness, eccentricity, radiality, diameter, betweenness, stress | one shortest-path pass per node |
//!
//! Path-based metrics run Dijkstra from every node, or Bellman-Ford when any weight is
//! negative. Betweenness and stress follow Brandes' dependency accumulation over the
//! shortest-path DAG of each source and are reported as raw pair counts; for undirected
//! runs every unordered pair is counted once.
//!
//! [`compute_all`] and [`compute`] share one pass between all selected metrics and
//! return a [`NetworkStatsResults`]. The `get_*` functions answer single questions.
//!
//! # Examples
//!
//! ```rust
//! use netscope::{
//!     centrality::{compute, Metrics},
//!     graph::{unit_weight, DirectedGraph, NodeId},
//! };
//!
//! // Star with center 0 and four leaves
//! let graph = DirectedGraph::from_weighted_edges(
//!     5,
//!     &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0), (0, 4, 1.0)],
//! )?;
//!
//! let stats = compute(&graph, false, unit_weight, Metrics::DEGREE | Metrics::CLOSENESS)?;
//! assert_eq!(stats.degree_map()?.get(NodeId::new(0))?, 4.0);
//! assert_eq!(stats.closeness_map()?.get(NodeId::new(0))?, 1.0);
//! assert!(stats.betweenness_map().is_err());
//! # Ok::<(), netscope::Error>(())
//! ```
//!
//! # Parallelism
//!
//! With the `parallel` feature the per-source passes run on the rayon thread pool.
//! Partial sums are merged in source order, so results match a sequential run exactly.

mod clustering;
mod degree;
mod paths;
mod stats;

pub use clustering::get_clustering_coefficient;
pub use degree::{get_degree, get_indegree, get_outdegree};
pub use stats::{BetweennessStress, Metric, Metrics, NetworkStatsResults, PathAlgorithm, ScoreMap};

use crate::{
    graph::{unit_weight, AdjacencyIndex, EdgeId, EdgeWeights, Network, NodeId},
    Result,
};

use paths::PathContext;

/// Computes every metric.
///
/// Equivalent to [`compute`] with [`Metrics::all()`].
///
/// # Arguments
///
/// * `graph` - The graph to analyse
/// * `directed` - Whether edges may only be followed from source to target
/// * `weight` - Edge weight function for the path-based metrics
///
/// # Errors
///
/// - [`Error::EmptyGraph`](crate::Error::EmptyGraph) if the graph has no nodes
/// - [`Error::InvalidWeight`](crate::Error::InvalidWeight) if any weight is NaN or infinite
/// - [`Error::NegativeCycle`](crate::Error::NegativeCycle) if a negative cycle makes
///   shortest distances undefined
pub fn compute_all<G, W>(graph: &G, directed: bool, weight: W) -> Result<NetworkStatsResults>
where
    G: Network,
    W: Fn(EdgeId) -> f64,
{
    compute(graph, directed, weight, Metrics::all())
}

/// Computes the selected metrics in a single pass.
///
/// The weight function is only evaluated when a path-based metric is selected.
/// Selecting [`Metrics::RADIALITY`] computes the diameter as a by-product but only
/// reports it when [`Metrics::DIAMETER`] is selected too.
///
/// # Errors
///
/// See [`compute_all`].
///
/// # Complexity
///
/// Path-based metrics cost O(V (V + E) log V) with non-negative weights and
/// O(V^2 E) otherwise; local metrics are O(V + E) plus the clustering scans.
pub fn compute<G, W>(
    graph: &G,
    directed: bool,
    weight: W,
    metrics: Metrics,
) -> Result<NetworkStatsResults>
where
    G: Network,
    W: Fn(EdgeId) -> f64,
{
    let index = AdjacencyIndex::build(graph, directed)?;

    log::debug!(
        "centrality over {} nodes, {} edges, directed={}, metrics={:?}",
        index.node_count(),
        index.edge_count(),
        directed,
        metrics
    );

    let mut results = NetworkStatsResults {
        directed,
        selected: metrics,
        algorithm: None,
        betweenness: None,
        edge_betweenness: None,
        stress: None,
        closeness: None,
        eccentricity: None,
        radiality: None,
        diameter: None,
        clustering: None,
        degree: None,
        indegree: None,
        outdegree: None,
    };

    if metrics.intersects(Metrics::PATH_BASED) {
        let weights = EdgeWeights::collect(&index, weight)?;
        let context = PathContext::new(&index, &weights);
        let mut summary =
            context.run_all(metrics.intersects(Metrics::BETWEENNESS | Metrics::STRESS))?;
        let diameter = summary.diameter();

        results.algorithm = Some(context.algorithm());
        if metrics.contains(Metrics::CLOSENESS) {
            results.closeness = Some(scores(summary.reach.iter().map(|r| r.closeness())));
        }
        if metrics.contains(Metrics::ECCENTRICITY) {
            results.eccentricity = Some(scores(summary.reach.iter().map(|r| r.farthest)));
        }
        if metrics.contains(Metrics::RADIALITY) {
            results.radiality = Some(scores(summary.reach.iter().map(|r| r.radiality(diameter))));
        }
        if metrics.contains(Metrics::DIAMETER) {
            results.diameter = Some(diameter);
        }
        if metrics.contains(Metrics::BETWEENNESS) {
            results.betweenness = Some(ScoreMap::from_vec(std::mem::take(&mut summary.betweenness)));
            results.edge_betweenness =
                Some(ScoreMap::from_vec(std::mem::take(&mut summary.edge_betweenness)));
        }
        if metrics.contains(Metrics::STRESS) {
            results.stress = Some(ScoreMap::from_vec(summary.stress));
        }
    }

    if metrics.intersects(Metrics::CLUSTERING | Metrics::DEGREE) {
        let undirected = if directed {
            AdjacencyIndex::build(graph, false)?
        } else {
            index.clone()
        };

        if metrics.contains(Metrics::CLUSTERING) {
            results.clustering = Some(ScoreMap::from_vec(clustering::clustering_scores(&undirected)));
        }
        if metrics.contains(Metrics::DEGREE) {
            results.degree = Some(ScoreMap::from_vec(degree::degree_scores(&undirected)));
            if directed {
                let (indegree, outdegree) = degree::directed_degree_scores(&index);
                results.indegree = Some(ScoreMap::from_vec(indegree));
                results.outdegree = Some(ScoreMap::from_vec(outdegree));
            }
        }
    }

    Ok(results)
}

fn scores(values: impl Iterator<Item = f64>) -> ScoreMap<NodeId> {
    ScoreMap::from_vec(values.collect())
}

/// Computes unweighted betweenness and stress for every node, and betweenness for
/// every edge.
///
/// # Errors
///
/// Returns [`Error::EmptyGraph`](crate::Error::EmptyGraph) if the graph has no nodes.
///
/// # Examples
///
/// ```rust
/// use netscope::{centrality::get_betweenness_stress, graph::{DirectedGraph, EdgeId, NodeId}};
///
/// // 0 - 1 - 2
/// let graph = DirectedGraph::from_weighted_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)])?;
/// let scores = get_betweenness_stress(&graph, false)?;
///
/// assert_eq!(scores.node(NodeId::new(1))?, (1.0, 1.0));
/// assert_eq!(scores.edge(EdgeId::new(0))?, 2.0);
/// # Ok::<(), netscope::Error>(())
/// ```
pub fn get_betweenness_stress<G: Network>(graph: &G, directed: bool) -> Result<BetweennessStress> {
    let index = AdjacencyIndex::build(graph, directed)?;
    let weights = EdgeWeights::collect(&index, unit_weight)?;
    let summary = PathContext::new(&index, &weights).run_all(true)?;

    Ok(BetweennessStress {
        betweenness: ScoreMap::from_vec(summary.betweenness),
        stress: ScoreMap::from_vec(summary.stress),
        edge_betweenness: ScoreMap::from_vec(summary.edge_betweenness),
    })
}

/// Returns the closeness of `node`: the number of other reachable nodes divided by
/// the sum of their distances, or 0 when nothing is reachable.
///
/// # Errors
///
/// - [`Error::EmptyGraph`](crate::Error::EmptyGraph) if the graph has no nodes
/// - [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `node` is not in the graph
/// - [`Error::InvalidWeight`](crate::Error::InvalidWeight) if any weight is NaN or infinite
/// - [`Error::NegativeCycle`](crate::Error::NegativeCycle) if `node` reaches a negative cycle
pub fn get_closeness<G, W>(graph: &G, node: NodeId, directed: bool, weight: W) -> Result<f64>
where
    G: Network,
    W: Fn(EdgeId) -> f64,
{
    let index = AdjacencyIndex::build(graph, directed)?;
    index.check_node(node)?;
    let weights = EdgeWeights::collect(&index, weight)?;
    Ok(PathContext::new(&index, &weights).reach(node)?.closeness())
}

/// Returns the eccentricity of `node`: its largest finite distance to another node.
///
/// # Errors
///
/// Same as [`get_closeness`].
pub fn get_eccentricity<G, W>(graph: &G, node: NodeId, directed: bool, weight: W) -> Result<f64>
where
    G: Network,
    W: Fn(EdgeId) -> f64,
{
    let index = AdjacencyIndex::build(graph, directed)?;
    index.check_node(node)?;
    let weights = EdgeWeights::collect(&index, weight)?;
    Ok(PathContext::new(&index, &weights).reach(node)?.farthest)
}

/// Returns the radiality of `node`: the mean of `diameter + 1 - d` over the nodes it
/// reaches.
///
/// Needs the diameter, so every node is searched.
///
/// # Errors
///
/// Same as [`get_closeness`], except that a negative cycle reachable from any node
/// fails the call.
pub fn get_radiality<G, W>(graph: &G, node: NodeId, directed: bool, weight: W) -> Result<f64>
where
    G: Network,
    W: Fn(EdgeId) -> f64,
{
    let index = AdjacencyIndex::build(graph, directed)?;
    index.check_node(node)?;
    let weights = EdgeWeights::collect(&index, weight)?;
    let summary = PathContext::new(&index, &weights).run_all(false)?;
    Ok(summary.reach[node.index()].radiality(summary.diameter()))
}

/// Returns the diameter: the largest finite shortest distance between any two nodes.
///
/// # Errors
///
/// - [`Error::EmptyGraph`](crate::Error::EmptyGraph) if the graph has no nodes
/// - [`Error::InvalidWeight`](crate::Error::InvalidWeight) if any weight is NaN or infinite
/// - [`Error::NegativeCycle`](crate::Error::NegativeCycle) if a negative cycle is reachable
pub fn get_diameter<G, W>(graph: &G, directed: bool, weight: W) -> Result<f64>
where
    G: Network,
    W: Fn(EdgeId) -> f64,
{
    let index = AdjacencyIndex::build(graph, directed)?;
    let weights = EdgeWeights::collect(&index, weight)?;
    Ok(PathContext::new(&index, &weights).run_all(false)?.diameter())
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{graph::DirectedGraph, Error};

    fn n(i: usize) -> NodeId {
        NodeId::new(i)
    }

    fn create_star_graph() -> DirectedGraph<(), f64> {
        DirectedGraph::from_weighted_edges(5, &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0), (0, 4, 1.0)])
            .unwrap()
    }

    /// 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
    fn create_diamond_graph() -> DirectedGraph<(), f64> {
        DirectedGraph::from_weighted_edges(4, &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)])
            .unwrap()
    }

    #[test]
    fn test_star_scenario() {
        let graph = create_star_graph();

        assert_eq!(get_degree(&graph, n(0)).unwrap(), 4);
        let leaf = get_closeness(&graph, n(1), false, unit_weight).unwrap();
        assert!((leaf - 4.0 / 7.0).abs() < 1e-12);
        assert_eq!(get_closeness(&graph, n(0), false, unit_weight).unwrap(), 1.0);
        assert_eq!(get_eccentricity(&graph, n(1), false, unit_weight).unwrap(), 2.0);
        assert_eq!(get_diameter(&graph, false, unit_weight).unwrap(), 2.0);
    }

    #[test]
    fn test_star_betweenness() {
        let graph = create_star_graph();
        let scores = get_betweenness_stress(&graph, false).unwrap();

        // C(4, 2) leaf pairs route through the center
        assert_eq!(scores.node(n(0)).unwrap(), (6.0, 6.0));
        assert_eq!(scores.node(n(1)).unwrap(), (0.0, 0.0));
        assert_eq!(scores.edge(EdgeId::new(0)).unwrap(), 4.0);
    }

    #[test]
    fn test_radiality() {
        // 0 - 1 - 2, diameter 2
        let graph = DirectedGraph::from_weighted_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();

        assert_eq!(get_radiality(&graph, n(1), false, unit_weight).unwrap(), 2.0);
        assert_eq!(get_radiality(&graph, n(0), false, unit_weight).unwrap(), 1.5);
    }

    #[test]
    fn test_compute_all_directed() {
        let graph = create_diamond_graph();
        let stats = compute_all(&graph, true, unit_weight).unwrap();

        assert!(stats.is_directed());
        assert_eq!(stats.selected(), Metrics::all());
        assert_eq!(stats.path_algorithm(), Some(PathAlgorithm::Dijkstra));
        assert_eq!(stats.betweenness_map().unwrap().values(), &[0.0, 0.5, 0.5, 0.0]);
        assert_eq!(stats.stress_map().unwrap().values(), &[0.0, 1.0, 1.0, 0.0]);
        assert_eq!(stats.diameter().unwrap(), 2.0);
        assert_eq!(stats.eccentricity_map().unwrap().get(n(3)).unwrap(), 0.0);
        assert_eq!(stats.closeness_map().unwrap().get(n(3)).unwrap(), 0.0);
        assert_eq!(stats.indegree_map().unwrap().get(n(3)).unwrap(), 2.0);
        assert_eq!(stats.outdegree_map().unwrap().get(n(0)).unwrap(), 2.0);
        assert_eq!(stats.degree_map().unwrap().get(n(1)).unwrap(), 2.0);
        assert_eq!(stats.clustering_coefficient_map().unwrap().get(n(0)).unwrap(), 0.0);
        assert_eq!(stats.edge_betweenness_map().unwrap().len(), 4);
    }

    #[test]
    fn test_compute_all_undirected_has_no_directed_degrees() {
        let stats = compute_all(&create_diamond_graph(), false, unit_weight).unwrap();

        assert!(stats.degree_map().is_ok());
        assert_eq!(
            stats.indegree_map().unwrap_err(),
            Error::MetricNotComputed(Metric::Indegree)
        );
        assert!(stats.outdegree_map().is_err());
    }

    #[test]
    fn test_compute_subset_skips_weights() {
        let graph = create_star_graph();
        // The weight function is never consulted for local metrics
        let stats = compute(&graph, false, |_| f64::NAN, Metrics::DEGREE | Metrics::CLUSTERING).unwrap();

        assert_eq!(stats.path_algorithm(), None);
        assert!(stats.degree_map().is_ok());
        assert!(stats.clustering_coefficient_map().is_ok());
        assert_eq!(
            stats.diameter().unwrap_err(),
            Error::MetricNotComputed(Metric::Diameter)
        );
        assert_eq!(
            stats.betweenness_map().unwrap_err(),
            Error::MetricNotComputed(Metric::Betweenness)
        );
    }

    #[test]
    fn test_metric_flags_cover_selection() {
        let union = Metric::iter().fold(Metrics::empty(), |acc, m| acc | m.flag());
        assert_eq!(union, Metrics::all());
    }

    #[test]
    fn test_negative_weights_use_bellman_ford() {
        // 0 -> 1 (2), 0 -> 2 (5), 2 -> 1 (-4)
        let graph =
            DirectedGraph::from_weighted_edges(3, &[(0, 1, 2.0), (0, 2, 5.0), (2, 1, -4.0)]).unwrap();
        let stats = compute_all(&graph, true, |e| graph.weight(e)).unwrap();

        assert_eq!(stats.path_algorithm(), Some(PathAlgorithm::BellmanFord));
        assert_eq!(stats.betweenness_map().unwrap().get(n(2)).unwrap(), 1.0);
        assert_eq!(stats.eccentricity_map().unwrap().get(n(0)).unwrap(), 5.0);
    }

    #[test]
    fn test_negative_cycle_is_error() {
        let graph =
            DirectedGraph::from_weighted_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, -5.0)]).unwrap();

        let err = compute_all(&graph, true, |e| graph.weight(e)).unwrap_err();
        assert_eq!(err, Error::NegativeCycle { node: n(0) });
        assert!(err.is_invalid_argument());
        assert!(get_diameter(&graph, true, |e| graph.weight(e)).is_err());
    }

    #[test]
    fn test_isolated_node() {
        let graph = DirectedGraph::from_weighted_edges(3, &[(0, 1, 1.0)]).unwrap();
        let stats = compute_all(&graph, false, unit_weight).unwrap();

        assert_eq!(stats.closeness_map().unwrap().get(n(2)).unwrap(), 0.0);
        assert_eq!(stats.radiality_map().unwrap().get(n(2)).unwrap(), 0.0);
        assert_eq!(stats.eccentricity_map().unwrap().get(n(2)).unwrap(), 0.0);
        assert_eq!(stats.degree_map().unwrap().get(n(2)).unwrap(), 0.0);
    }

    #[test]
    fn test_empty_graph() {
        let graph: DirectedGraph<(), f64> = DirectedGraph::new();
        assert_eq!(compute_all(&graph, true, unit_weight).unwrap_err(), Error::EmptyGraph);
        assert_eq!(get_diameter(&graph, true, unit_weight).unwrap_err(), Error::EmptyGraph);
    }

    #[test]
    fn test_foreign_node() {
        let graph = create_star_graph();
        assert_eq!(
            get_closeness(&graph, n(7), false, unit_weight),
            Err(Error::NodeNotFound(n(7)))
        );
        assert_eq!(
            get_radiality(&graph, n(7), false, unit_weight),
            Err(Error::NodeNotFound(n(7)))
        );
    }
}
