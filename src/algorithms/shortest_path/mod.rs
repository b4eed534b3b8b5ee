//! Weighted shortest paths.
//!
//! # Available Algorithms
//!
//! | Algorithm | Weights | Scope | Complexity |
//! |-----------|---------|-------|------------|
//! | [`find_path`] (Dijkstra) | non-negative | single source | O((V + E) log V) |
//! | [`find_shortest_path`] (Bellman-Ford) | any | single source | O(V * E) |
//! | [`find_all_pair_shortest_path`] (Floyd-Warshall) | any | all pairs | O(V³) |
//!
//! Negative weights are an error for Dijkstra. Bellman-Ford and Floyd-Warshall accept
//! them and report negative cycles as a flag on the result; distances influenced by a
//! cycle are reported as `-inf` and never as a finite number.
//!
//! On undirected queries every edge is usable both ways, so a single negative edge
//! already forms a negative cycle.

mod bellman_ford;
mod dijkstra;
mod floyd_warshall;

pub use bellman_ford::{find_shortest_path, BellmanFordResult};
pub use dijkstra::{find_path, DijkstraResult};
pub use floyd_warshall::{find_all_pair_shortest_path, FloydWarshallResult};

pub(crate) use bellman_ford::bellman_ford_from;
pub(crate) use dijkstra::dijkstra_from;

use crate::{
    graph::{EdgeId, NodeId},
    Error, Result,
};

/// The last step of a shortest path: the edge taken and the node it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Hop {
    pub(crate) from: NodeId,
    pub(crate) edge: EdgeId,
}

/// Distance and predecessor tables of a single-source computation.
#[derive(Debug, Clone)]
pub(crate) struct PathTree {
    pub(crate) source: NodeId,
    pub(crate) dist: Vec<f64>,
    pub(crate) pred: Vec<Option<Hop>>,
}

impl PathTree {
    pub(crate) fn new(source: NodeId, node_count: usize) -> Self {
        let mut dist = vec![f64::INFINITY; node_count];
        dist[source.index()] = 0.0;
        PathTree {
            source,
            dist,
            pred: vec![None; node_count],
        }
    }

    pub(crate) fn check(&self, node: NodeId) -> Result<usize> {
        if node.index() < self.dist.len() {
            Ok(node.index())
        } else {
            Err(Error::NodeNotFound(node))
        }
    }

    /// Walks predecessor links back from `target`; at most `V` steps.
    pub(crate) fn walk(&self, target: NodeId) -> Vec<NodeId> {
        let mut path = vec![target];
        let mut current = target;
        for _ in 0..self.dist.len() {
            match self.pred[current.index()] {
                Some(hop) => {
                    path.push(hop.from);
                    current = hop.from;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }
}
