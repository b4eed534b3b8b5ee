//! Per-source shortest-path passes and Brandes-style accumulation.
//!
//! Every path-based metric is derived from one shortest-path computation per source
//! node. For each source the pass records a [`Reach`] summary (reachable count,
//! distance sum, farthest distance) and, when betweenness or stress are wanted,
//! accumulates dependencies over the shortest-path DAG:
//!
//! 1. Distances come from Dijkstra, or from Bellman-Ford when any weight is negative
//! 2. Tight arcs `u -> v` with `d(u) + w = d(v)` form the DAG; self-loops are ignored
//! 3. The DAG is ordered topologically; `sigma(v)` counts shortest paths from the source
//! 4. In reverse order, each tight arc `v -> w` receives
//!    `sigma(v) / sigma(w) * (1 + delta(w))`, which is summed into edge betweenness and
//!    into `delta(v)`; `delta(v)` is node betweenness
//! 5. Stress adds `sigma(v)` times the number of shortest-path continuations from `v`
//!
//! Parallel tight edges are distinct arcs and therefore distinct shortest paths.
//!
//! Zero-weight cycles make the tight graph cyclic. Nodes are then ordered by Kahn's
//! algorithm, falling back to the closest unprocessed node that already has a
//! processed tight predecessor, and tight arcs pointing backwards in that order are
//! ignored.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use std::collections::VecDeque;

use crate::{
    algorithms::{bellman_ford_from, dijkstra_from},
    centrality::stats::PathAlgorithm,
    graph::{AdjacencyIndex, EdgeId, EdgeWeights, NodeId},
    Error, Result,
};

/// Sources handled per unit of work. Chunks are merged in source order, so results do
/// not depend on whether they ran in parallel.
const SOURCES_PER_CHUNK: usize = 32;

/// Relative tolerance for recognising a tight arc.
const TIGHT_TOLERANCE: f64 = 1e-9;

/// Distance summary of one source.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Reach {
    /// Number of other nodes reachable from the source
    pub(crate) reached: usize,
    /// Sum of the distances to those nodes
    pub(crate) total: f64,
    /// Largest of those distances, 0 when nothing is reachable
    pub(crate) farthest: f64,
}

impl Reach {
    fn from_distances(source: NodeId, dist: &[f64]) -> Self {
        let mut reach = Reach::default();
        for (i, &d) in dist.iter().enumerate() {
            if i == source.index() || !d.is_finite() {
                continue;
            }
            reach.reached += 1;
            reach.total += d;
            reach.farthest = reach.farthest.max(d);
        }
        reach
    }

    /// `reached / total`, or 0 when either is 0.
    pub(crate) fn closeness(&self) -> f64 {
        if self.reached == 0 || self.total == 0.0 {
            0.0
        } else {
            self.reached as f64 / self.total
        }
    }

    /// Mean of `diameter + 1 - d` over the reachable nodes, or 0 when nothing is reachable.
    pub(crate) fn radiality(&self, diameter: f64) -> f64 {
        if self.reached == 0 {
            0.0
        } else {
            diameter + 1.0 - self.total / self.reached as f64
        }
    }
}

/// Output of a pass over every source.
#[derive(Debug, Clone, Default)]
pub(crate) struct PathSummary {
    /// One entry per source, in node order
    pub(crate) reach: Vec<Reach>,
    /// Empty unless dependencies were accumulated
    pub(crate) betweenness: Vec<f64>,
    pub(crate) stress: Vec<f64>,
    pub(crate) edge_betweenness: Vec<f64>,
}

impl PathSummary {
    /// Largest eccentricity over all sources.
    pub(crate) fn diameter(&self) -> f64 {
        self.reach.iter().map(|r| r.farthest).fold(0.0, f64::max)
    }

    fn merge(&mut self, other: PathSummary) {
        self.reach.extend(other.reach);
        add_into(&mut self.betweenness, &other.betweenness);
        add_into(&mut self.stress, &other.stress);
        add_into(&mut self.edge_betweenness, &other.edge_betweenness);
    }
}

fn add_into(target: &mut Vec<f64>, values: &[f64]) {
    if target.is_empty() {
        target.extend_from_slice(values);
    } else {
        for (t, v) in target.iter_mut().zip(values) {
            *t += v;
        }
    }
}

/// Shortest-path machinery bound to one indexed graph and its weights.
pub(crate) struct PathContext<'a> {
    index: &'a AdjacencyIndex,
    weights: &'a EdgeWeights,
    algorithm: PathAlgorithm,
}

impl<'a> PathContext<'a> {
    pub(crate) fn new(index: &'a AdjacencyIndex, weights: &'a EdgeWeights) -> Self {
        let algorithm = if weights.has_negative() {
            PathAlgorithm::BellmanFord
        } else {
            PathAlgorithm::Dijkstra
        };
        PathContext {
            index,
            weights,
            algorithm,
        }
    }

    pub(crate) fn algorithm(&self) -> PathAlgorithm {
        self.algorithm
    }

    /// Shortest distances from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeCycle`] naming `source` if a negative cycle is reachable
    /// from it.
    pub(crate) fn distances(&self, source: NodeId) -> Result<Vec<f64>> {
        match self.algorithm {
            PathAlgorithm::Dijkstra => {
                Ok(dijkstra_from(self.index, self.weights, source)?.into_distances())
            }
            PathAlgorithm::BellmanFord => {
                let result = bellman_ford_from(self.index, self.weights, source);
                if result.has_negative_cycle() {
                    log::warn!(
                        "negative cycle reachable from {}, path based metrics are undefined",
                        source
                    );
                    return Err(Error::NegativeCycle { node: source });
                }
                Ok(result.into_distances())
            }
        }
    }

    /// Distance summary of a single source.
    pub(crate) fn reach(&self, source: NodeId) -> Result<Reach> {
        let dist = self.distances(source)?;
        Ok(Reach::from_distances(source, &dist))
    }

    /// Runs a pass from every node.
    ///
    /// With `dependencies` set, betweenness, stress and edge betweenness are
    /// accumulated too; for undirected indices they are halved, since every unordered
    /// pair is seen from both ends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeCycle`] for the first source, in node order, that
    /// reaches a negative cycle.
    pub(crate) fn run_all(&self, dependencies: bool) -> Result<PathSummary> {
        let sources: Vec<NodeId> = (0..self.index.node_count()).map(NodeId::new).collect();

        log::debug!(
            "path pass over {} sources with {}, dependencies={}",
            sources.len(),
            self.algorithm,
            dependencies
        );

        #[cfg(feature = "parallel")]
        let chunks: Vec<Result<PathSummary>> = sources
            .par_chunks(SOURCES_PER_CHUNK)
            .map(|chunk| self.run_chunk(chunk, dependencies))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let chunks = sources
            .chunks(SOURCES_PER_CHUNK)
            .map(|chunk| self.run_chunk(chunk, dependencies));

        let mut summary = PathSummary::default();
        for chunk in chunks {
            summary.merge(chunk?);
        }

        if dependencies && !self.index.is_directed() {
            for v in summary
                .betweenness
                .iter_mut()
                .chain(summary.stress.iter_mut())
                .chain(summary.edge_betweenness.iter_mut())
            {
                *v /= 2.0;
            }
        }

        Ok(summary)
    }

    fn run_chunk(&self, sources: &[NodeId], dependencies: bool) -> Result<PathSummary> {
        let mut summary = PathSummary {
            reach: Vec::with_capacity(sources.len()),
            ..PathSummary::default()
        };
        let mut scratch = dependencies.then(|| Scratch::new(self.index));
        if dependencies {
            summary.betweenness = vec![0.0; self.index.node_count()];
            summary.stress = vec![0.0; self.index.node_count()];
            summary.edge_betweenness = vec![0.0; self.index.edge_count()];
        }

        for &source in sources {
            let dist = self.distances(source)?;
            summary.reach.push(Reach::from_distances(source, &dist));
            if let Some(scratch) = scratch.as_mut() {
                scratch.accumulate(self.index, self.weights, source, &dist, &mut summary);
            }
        }

        Ok(summary)
    }
}

/// Per-source working buffers, reused across the sources of a chunk.
struct Scratch {
    tight_out: Vec<Vec<(NodeId, EdgeId)>>,
    pending: Vec<usize>,
    has_processed_pred: Vec<bool>,
    queued: Vec<bool>,
    position: Vec<Option<usize>>,
    order: Vec<NodeId>,
    sigma: Vec<f64>,
    delta: Vec<f64>,
    continuations: Vec<f64>,
}

impl Scratch {
    fn new(index: &AdjacencyIndex) -> Self {
        let n = index.node_count();
        Scratch {
            tight_out: vec![Vec::new(); n],
            pending: vec![0; n],
            has_processed_pred: vec![false; n],
            queued: vec![false; n],
            position: vec![None; n],
            order: Vec::with_capacity(n),
            sigma: vec![0.0; n],
            delta: vec![0.0; n],
            continuations: vec![0.0; n],
        }
    }

    fn reset(&mut self) {
        for list in &mut self.tight_out {
            list.clear();
        }
        self.pending.fill(0);
        self.has_processed_pred.fill(false);
        self.queued.fill(false);
        self.position.fill(None);
        self.order.clear();
        self.sigma.fill(0.0);
        self.delta.fill(0.0);
        self.continuations.fill(0.0);
    }

    fn accumulate(
        &mut self,
        index: &AdjacencyIndex,
        weights: &EdgeWeights,
        source: NodeId,
        dist: &[f64],
        summary: &mut PathSummary,
    ) {
        self.reset();
        self.collect_tight_arcs(index, weights, dist);
        self.order_dag(source, dist);

        // Shortest-path counts, forward
        self.sigma[source.index()] = 1.0;
        for i in 0..self.order.len() {
            let u = self.order[i];
            let pos_u = i;
            for &(v, _) in &self.tight_out[u.index()] {
                if self.position[v.index()].is_some_and(|p| p > pos_u) {
                    self.sigma[v.index()] += self.sigma[u.index()];
                }
            }
        }

        // Dependencies, backward
        for i in (0..self.order.len()).rev() {
            let u = self.order[i];
            for &(w, edge) in &self.tight_out[u.index()] {
                if !self.position[w.index()].is_some_and(|p| p > i) {
                    continue;
                }
                let share = self.sigma[u.index()] / self.sigma[w.index()]
                    * (1.0 + self.delta[w.index()]);
                summary.edge_betweenness[edge.index()] += share;
                self.delta[u.index()] += share;
                self.continuations[u.index()] += 1.0 + self.continuations[w.index()];
            }

            if u != source {
                summary.betweenness[u.index()] += self.delta[u.index()];
                summary.stress[u.index()] += self.sigma[u.index()] * self.continuations[u.index()];
            }
        }
    }

    fn collect_tight_arcs(&mut self, index: &AdjacencyIndex, weights: &EdgeWeights, dist: &[f64]) {
        for (from, adj) in index.arcs() {
            let du = dist[from.index()];
            if from == adj.node || !du.is_finite() {
                continue;
            }
            let dv = dist[adj.node.index()];
            let candidate = du + weights.get(adj.edge);
            if (candidate - dv).abs() <= TIGHT_TOLERANCE * dv.abs().max(1.0) {
                self.tight_out[from.index()].push((adj.node, adj.edge));
                self.pending[adj.node.index()] += 1;
            }
        }
    }

    /// Orders the reachable nodes so that tight arcs point forward wherever possible.
    fn order_dag(&mut self, source: NodeId, dist: &[f64]) {
        let reachable = dist.iter().filter(|d| d.is_finite()).count();
        let mut queue = VecDeque::new();
        self.queued[source.index()] = true;
        queue.push_back(source);

        while self.order.len() < reachable {
            let Some(u) = queue.pop_front().or_else(|| self.fallback(dist)) else {
                break;
            };
            self.queued[u.index()] = true;
            self.position[u.index()] = Some(self.order.len());
            self.order.push(u);

            for &(v, _) in &self.tight_out[u.index()] {
                self.has_processed_pred[v.index()] = true;
                self.pending[v.index()] = self.pending[v.index()].saturating_sub(1);
                if self.pending[v.index()] == 0 && !self.queued[v.index()] {
                    self.queued[v.index()] = true;
                    queue.push_back(v);
                }
            }
        }
    }

    /// Closest unqueued node with a processed tight predecessor; ties by node index.
    fn fallback(&self, dist: &[f64]) -> Option<NodeId> {
        let mut best: Option<usize> = None;
        for v in 0..dist.len() {
            if self.queued[v] || !self.has_processed_pred[v] {
                continue;
            }
            match best {
                Some(b) if dist[b] <= dist[v] => {}
                _ => best = Some(v),
            }
        }
        best.map(NodeId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{unit_weight, DirectedGraph};

    fn summary(
        edges: &[(usize, usize, f64)],
        nodes: usize,
        directed: bool,
    ) -> Result<PathSummary> {
        let graph = DirectedGraph::from_weighted_edges(nodes, edges).unwrap();
        let index = AdjacencyIndex::build(&graph, directed).unwrap();
        let weights = EdgeWeights::collect(&index, |e| graph.weight(e)).unwrap();
        PathContext::new(&index, &weights).run_all(true)
    }

    #[test]
    fn test_line_betweenness() {
        // 0 - 1 - 2 - 3
        let s = summary(&[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)], 4, false).unwrap();

        assert_eq!(s.betweenness, vec![0.0, 2.0, 2.0, 0.0]);
        assert_eq!(s.stress, vec![0.0, 2.0, 2.0, 0.0]);
        // Edge 1-2 carries the pairs (0,2), (0,3), (1,2), (1,3)
        assert_eq!(s.edge_betweenness, vec![3.0, 4.0, 3.0]);
        assert_eq!(s.diameter(), 3.0);
    }

    #[test]
    fn test_diamond_splits_dependency() {
        // 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3: two shortest paths from 0 to 3
        let s = summary(
            &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)],
            4,
            true,
        )
        .unwrap();

        assert_eq!(s.betweenness, vec![0.0, 0.5, 0.5, 0.0]);
        assert_eq!(s.stress, vec![0.0, 1.0, 1.0, 0.0]);
        assert_eq!(s.edge_betweenness, vec![1.5, 1.5, 1.5, 1.5]);
    }

    #[test]
    fn test_parallel_edges_are_distinct_paths() {
        // 0 => 1 (two edges) -> 2
        let s = summary(&[(0, 1, 1.0), (0, 1, 1.0), (1, 2, 1.0)], 3, true).unwrap();

        assert_eq!(s.betweenness[1], 1.0);
        assert_eq!(s.stress[1], 2.0);
        assert_eq!(s.edge_betweenness[0], 1.0);
        assert_eq!(s.edge_betweenness[1], 1.0);
    }

    #[test]
    fn test_zero_weight_cycle_terminates() {
        // 0 -> 1 (1), 1 <-> 2 (0), 2 -> 3 (1)
        let s = summary(
            &[(0, 1, 1.0), (1, 2, 0.0), (2, 1, 0.0), (2, 3, 1.0)],
            4,
            true,
        )
        .unwrap();

        assert!(s.betweenness.iter().all(|b| b.is_finite()));
        assert!(s.betweenness[1] > 0.0);
        assert!(s.betweenness[2] > 0.0);
    }

    #[test]
    fn test_weighted_detour_is_shortest() {
        // Direct 0 -> 2 costs 5, detour via 1 costs 2
        let s = summary(&[(0, 2, 5.0), (0, 1, 1.0), (1, 2, 1.0)], 3, true).unwrap();

        assert_eq!(s.betweenness, vec![0.0, 1.0, 0.0]);
        assert_eq!(s.edge_betweenness[0], 0.0);
    }

    #[test]
    fn test_negative_cycle_fails() {
        let err = summary(&[(0, 1, 1.0), (1, 0, -2.0)], 2, true).unwrap_err();
        assert_eq!(
            err,
            Error::NegativeCycle {
                node: NodeId::new(0)
            }
        );
    }

    #[test]
    fn test_reach_summary() {
        let graph = DirectedGraph::from_weighted_edges(4, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        let index = AdjacencyIndex::build(&graph, false).unwrap();
        let weights = EdgeWeights::collect(&index, unit_weight).unwrap();
        let context = PathContext::new(&index, &weights);

        let reach = context.reach(NodeId::new(0)).unwrap();
        assert_eq!(reach.reached, 2);
        assert_eq!(reach.total, 3.0);
        assert_eq!(reach.farthest, 2.0);
        assert!((reach.closeness() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(reach.radiality(2.0), 1.5);

        let isolated = context.reach(NodeId::new(3)).unwrap();
        assert_eq!(isolated.closeness(), 0.0);
        assert_eq!(isolated.radiality(2.0), 0.0);
        assert_eq!(context.algorithm(), PathAlgorithm::Dijkstra);
    }
}
