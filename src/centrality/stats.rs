//! Result types of the centrality suite.

use std::{collections::HashMap, marker::PhantomData};

use bitflags::bitflags;
use strum::{Display, EnumIter};

use crate::{
    graph::{EdgeId, Handle, NodeId},
    Error, Result,
};

/// An immutable score per node or per edge.
///
/// Scores are stored densely, indexed by handle, so lookups are O(1) and iteration
/// follows ascending handle order.
///
/// # Examples
///
/// ```rust
/// use netscope::{centrality::compute_all, graph::{unit_weight, DirectedGraph, NodeId}};
///
/// let graph = DirectedGraph::from_weighted_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)])?;
/// let stats = compute_all(&graph, false, unit_weight)?;
///
/// let betweenness = stats.betweenness_map()?;
/// assert_eq!(betweenness.get(NodeId::new(1))?, 1.0);
/// assert_eq!(betweenness.len(), 3);
/// # Ok::<(), netscope::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMap<K: Handle> {
    values: Vec<f64>,
    _key: PhantomData<K>,
}

impl<K: Handle> ScoreMap<K> {
    pub(crate) fn from_vec(values: Vec<f64>) -> Self {
        ScoreMap {
            values,
            _key: PhantomData,
        }
    }

    /// Returns the score of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] / [`Error::EdgeNotFound`] for a foreign handle.
    pub fn get(&self, key: K) -> Result<f64> {
        self.values
            .get(key.to_index())
            .copied()
            .ok_or_else(|| key.not_found())
    }

    /// Returns an iterator over `(key, score)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (K, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| (K::from_index(i), v))
    }

    /// Returns the scores as a slice indexed by handle.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copies the scores into a `HashMap`.
    #[must_use]
    pub fn to_hash_map(&self) -> HashMap<K, f64> {
        self.iter().collect()
    }
}

/// A single metric of [`NetworkStatsResults`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Metric {
    /// Shortest-path betweenness per node
    Betweenness,
    /// Shortest-path betweenness per edge
    EdgeBetweenness,
    /// Number of shortest paths through each node
    Stress,
    /// Closeness per node
    Closeness,
    /// Eccentricity per node
    Eccentricity,
    /// Radiality per node
    Radiality,
    /// Largest eccentricity in the graph
    Diameter,
    /// Local clustering coefficient per node
    ClusteringCoefficient,
    /// Undirected degree per node
    Degree,
    /// In-degree per node, directed runs only
    Indegree,
    /// Out-degree per node, directed runs only
    Outdegree,
}

impl Metric {
    /// Returns the selection flag that computes this metric.
    #[must_use]
    pub fn flag(self) -> Metrics {
        match self {
            Metric::Betweenness | Metric::EdgeBetweenness => Metrics::BETWEENNESS,
            Metric::Stress => Metrics::STRESS,
            Metric::Closeness => Metrics::CLOSENESS,
            Metric::Eccentricity => Metrics::ECCENTRICITY,
            Metric::Radiality => Metrics::RADIALITY,
            Metric::Diameter => Metrics::DIAMETER,
            Metric::ClusteringCoefficient => Metrics::CLUSTERING,
            Metric::Degree | Metric::Indegree | Metric::Outdegree => Metrics::DEGREE,
        }
    }
}

bitflags! {
    /// Selection of metrics for [`compute`](crate::centrality::compute).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Metrics: u16 {
        /// Node and edge betweenness
        const BETWEENNESS = 0x0001;
        /// Stress
        const STRESS = 0x0002;
        /// Closeness
        const CLOSENESS = 0x0004;
        /// Eccentricity
        const ECCENTRICITY = 0x0008;
        /// Radiality (requires the diameter, computed alongside)
        const RADIALITY = 0x0010;
        /// Diameter
        const DIAMETER = 0x0020;
        /// Clustering coefficient
        const CLUSTERING = 0x0040;
        /// Degree, plus in/out-degree on directed runs
        const DEGREE = 0x0080;

        /// Metrics that need a shortest-path pass from every node
        const PATH_BASED = Self::BETWEENNESS.bits()
            | Self::STRESS.bits()
            | Self::CLOSENESS.bits()
            | Self::ECCENTRICITY.bits()
            | Self::RADIALITY.bits()
            | Self::DIAMETER.bits();
    }
}

/// Shortest-path algorithm used for the path-based metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum PathAlgorithm {
    /// All weights were non-negative
    Dijkstra,
    /// At least one weight was negative
    BellmanFord,
}

/// Pairs of betweenness and stress per node, and betweenness per edge.
///
/// Returned by [`get_betweenness_stress`](crate::centrality::get_betweenness_stress).
#[derive(Debug, Clone, PartialEq)]
pub struct BetweennessStress {
    pub(crate) betweenness: ScoreMap<NodeId>,
    pub(crate) stress: ScoreMap<NodeId>,
    pub(crate) edge_betweenness: ScoreMap<EdgeId>,
}

impl BetweennessStress {
    /// Returns `(betweenness, stress)` of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] for a foreign node.
    pub fn node(&self, node: NodeId) -> Result<(f64, f64)> {
        Ok((self.betweenness.get(node)?, self.stress.get(node)?))
    }

    /// Returns the betweenness of `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`] for a foreign edge.
    pub fn edge(&self, edge: EdgeId) -> Result<f64> {
        self.edge_betweenness.get(edge)
    }

    /// Returns node betweenness.
    #[must_use]
    pub fn betweenness(&self) -> &ScoreMap<NodeId> {
        &self.betweenness
    }

    /// Returns node stress.
    #[must_use]
    pub fn stress(&self) -> &ScoreMap<NodeId> {
        &self.stress
    }

    /// Returns edge betweenness.
    #[must_use]
    pub fn edge_betweenness(&self) -> &ScoreMap<EdgeId> {
        &self.edge_betweenness
    }
}

/// Bundled results of [`compute_all`](crate::centrality::compute_all) and
/// [`compute`](crate::centrality::compute).
///
/// Each accessor returns [`Error::MetricNotComputed`] when its metric was not part of
/// the selection.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkStatsResults {
    pub(crate) directed: bool,
    pub(crate) selected: Metrics,
    pub(crate) algorithm: Option<PathAlgorithm>,
    pub(crate) betweenness: Option<ScoreMap<NodeId>>,
    pub(crate) edge_betweenness: Option<ScoreMap<EdgeId>>,
    pub(crate) stress: Option<ScoreMap<NodeId>>,
    pub(crate) closeness: Option<ScoreMap<NodeId>>,
    pub(crate) eccentricity: Option<ScoreMap<NodeId>>,
    pub(crate) radiality: Option<ScoreMap<NodeId>>,
    pub(crate) diameter: Option<f64>,
    pub(crate) clustering: Option<ScoreMap<NodeId>>,
    pub(crate) degree: Option<ScoreMap<NodeId>>,
    pub(crate) indegree: Option<ScoreMap<NodeId>>,
    pub(crate) outdegree: Option<ScoreMap<NodeId>>,
}

fn computed<T>(value: Option<&T>, metric: Metric) -> Result<&T> {
    value.ok_or(Error::MetricNotComputed(metric))
}

impl NetworkStatsResults {
    /// Returns `true` if edges were followed by orientation.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the metrics that were selected.
    #[must_use]
    pub fn selected(&self) -> Metrics {
        self.selected
    }

    /// Returns the shortest-path algorithm used, `None` if no path-based metric was selected.
    #[must_use]
    pub fn path_algorithm(&self) -> Option<PathAlgorithm> {
        self.algorithm
    }

    /// Returns node betweenness.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MetricNotComputed`] if betweenness was not selected.
    pub fn betweenness_map(&self) -> Result<&ScoreMap<NodeId>> {
        computed(self.betweenness.as_ref(), Metric::Betweenness)
    }

    /// Returns edge betweenness.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MetricNotComputed`] if betweenness was not selected.
    pub fn edge_betweenness_map(&self) -> Result<&ScoreMap<EdgeId>> {
        computed(self.edge_betweenness.as_ref(), Metric::EdgeBetweenness)
    }

    /// Returns node stress.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MetricNotComputed`] if stress was not selected.
    pub fn stress_map(&self) -> Result<&ScoreMap<NodeId>> {
        computed(self.stress.as_ref(), Metric::Stress)
    }

    /// Returns node closeness.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MetricNotComputed`] if closeness was not selected.
    pub fn closeness_map(&self) -> Result<&ScoreMap<NodeId>> {
        computed(self.closeness.as_ref(), Metric::Closeness)
    }

    /// Returns node eccentricity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MetricNotComputed`] if eccentricity was not selected.
    pub fn eccentricity_map(&self) -> Result<&ScoreMap<NodeId>> {
        computed(self.eccentricity.as_ref(), Metric::Eccentricity)
    }

    /// Returns node radiality.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MetricNotComputed`] if radiality was not selected.
    pub fn radiality_map(&self) -> Result<&ScoreMap<NodeId>> {
        computed(self.radiality.as_ref(), Metric::Radiality)
    }

    /// Returns the diameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MetricNotComputed`] if the diameter was not selected.
    pub fn diameter(&self) -> Result<f64> {
        computed(self.diameter.as_ref(), Metric::Diameter).copied()
    }

    /// Returns the local clustering coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MetricNotComputed`] if clustering was not selected.
    pub fn clustering_coefficient_map(&self) -> Result<&ScoreMap<NodeId>> {
        computed(self.clustering.as_ref(), Metric::ClusteringCoefficient)
    }

    /// Returns the undirected degrees.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MetricNotComputed`] if degrees were not selected.
    pub fn degree_map(&self) -> Result<&ScoreMap<NodeId>> {
        computed(self.degree.as_ref(), Metric::Degree)
    }

    /// Returns the in-degrees.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MetricNotComputed`] if degrees were not selected or the run
    /// was undirected.
    pub fn indegree_map(&self) -> Result<&ScoreMap<NodeId>> {
        computed(self.indegree.as_ref(), Metric::Indegree)
    }

    /// Returns the out-degrees.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MetricNotComputed`] if degrees were not selected or the run
    /// was undirected.
    pub fn outdegree_map(&self) -> Result<&ScoreMap<NodeId>> {
        computed(self.outdegree.as_ref(), Metric::Outdegree)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_score_map_lookup() {
        let map: ScoreMap<NodeId> = ScoreMap::from_vec(vec![0.5, 1.5]);

        assert_eq!(map.get(NodeId::new(1)).unwrap(), 1.5);
        assert_eq!(map.get(NodeId::new(2)), Err(Error::NodeNotFound(NodeId::new(2))));
        assert_eq!(map.len(), 2);
        assert!(!map.is_empty());

        let pairs: Vec<(NodeId, f64)> = map.iter().collect();
        assert_eq!(pairs, vec![(NodeId::new(0), 0.5), (NodeId::new(1), 1.5)]);
        assert_eq!(map.to_hash_map().get(&NodeId::new(0)), Some(&0.5));
    }

    #[test]
    fn test_edge_score_map_foreign_key() {
        let map: ScoreMap<EdgeId> = ScoreMap::from_vec(vec![1.0]);
        assert_eq!(map.get(EdgeId::new(3)), Err(Error::EdgeNotFound(EdgeId::new(3))));
    }

    #[test]
    fn test_metric_names() {
        assert_eq!(Metric::ClusteringCoefficient.to_string(), "clustering_coefficient");
        assert_eq!(Metric::EdgeBetweenness.to_string(), "edge_betweenness");
        assert_eq!(PathAlgorithm::BellmanFord.to_string(), "bellman-ford");
    }

    #[test]
    fn test_every_metric_has_a_flag() {
        for metric in Metric::iter() {
            assert!(Metrics::all().contains(metric.flag()));
        }
        assert!(Metrics::PATH_BASED.contains(Metrics::RADIALITY));
        assert!(!Metrics::PATH_BASED.contains(Metrics::DEGREE));
    }
}
