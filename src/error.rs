use thiserror::Error;

use crate::{
    centrality::Metric,
    graph::{EdgeId, NodeId},
};

macro_rules! graph_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::GraphError($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::GraphError(format!($fmt, $($arg)*))
    };
}

macro_rules! invalid_parameter {
    ($msg:expr) => {
        crate::Error::InvalidParameter($msg.to_string())
    };

    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidParameter(format!($fmt, $($arg)*))
    };
}

pub(crate) use graph_error;
pub(crate) use invalid_parameter;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every variant describes a caller mistake that is detected before (or, for lazily detected
/// negative weights, instead of) producing a result: no algorithm ever hands back a partially
/// built result together with an error.
///
/// Conditions that are *properties of the graph* rather than misuse are not errors:
///
/// - unreachable targets are reported through `has_path_to` and an infinite distance
/// - negative cycles found by Bellman-Ford or Floyd-Warshall are a flag on the result
/// - PageRank / HITS hitting their iteration cap is reported via `converged()`
///
/// # Error Categories
///
/// ## Graph and handle errors
/// - [`Error::EmptyGraph`] - The graph has no nodes where at least one is required
/// - [`Error::NodeNotFound`] - A node handle does not belong to the graph or result
/// - [`Error::EdgeNotFound`] - An edge handle does not belong to the graph or result
/// - [`Error::GraphError`] - The graph snapshot is inconsistent
///
/// ## Weight errors
/// - [`Error::NegativeWeight`] - A negative weight reached an algorithm that forbids it
/// - [`Error::InvalidWeight`] - The weight function produced NaN or an infinity
///
/// ## Parameter errors
/// - [`Error::InvalidParameter`] - A numeric configuration value is out of range
/// - [`Error::NegativeCycle`] - Path-based centralities are undefined on this graph
/// - [`Error::MetricNotComputed`] - A metric was not part of the requested selection
///
/// # Examples
///
/// ```rust
/// use netscope::{algorithms::breadth_first_search, graph::{DirectedGraph, NodeId}, Error};
///
/// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
/// graph.add_node("A");
///
/// match breadth_first_search(&graph, NodeId::new(7), true, |_, _, _| true) {
///     Err(Error::NodeNotFound(node)) => assert_eq!(node, NodeId::new(7)),
///     _ => unreachable!(),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The graph contains no nodes.
    ///
    /// Building an adjacency index, spanning trees, link analysis and centralities all
    /// require at least one node.
    #[error("The graph contains no nodes")]
    EmptyGraph,

    /// A node handle is not part of the graph (or of the graph a result was computed on).
    #[error("Node {0} does not exist in the graph")]
    NodeNotFound(NodeId),

    /// An edge handle is not part of the graph (or of the graph a result was computed on).
    #[error("Edge {0} does not exist in the graph")]
    EdgeNotFound(EdgeId),

    /// A negative edge weight was found by an algorithm that requires non-negative weights.
    ///
    /// Dijkstra reports this lazily, when the offending edge is first relaxed, so negative
    /// edges that are unreachable from the source are never looked at.
    ///
    /// # Fields
    ///
    /// * `edge` - The edge carrying the negative weight
    /// * `weight` - The weight that was returned for it
    #[error("Edge {edge} has negative weight {weight}")]
    NegativeWeight {
        /// The offending edge
        edge: EdgeId,
        /// The weight returned by the weight function
        weight: f64,
    },

    /// The weight function returned NaN or an infinite value.
    #[error("Edge {edge} has invalid weight {weight}")]
    InvalidWeight {
        /// The offending edge
        edge: EdgeId,
        /// The weight returned by the weight function
        weight: f64,
    },

    /// A numeric configuration value is out of range (damping factor, epsilon, iteration cap).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Shortest-path based centralities were requested on a graph whose weights form a
    /// negative cycle reachable from `node`; distances and therefore the metrics are undefined.
    #[error("Negative cycle reachable from node {node}, path based metrics are undefined")]
    NegativeCycle {
        /// The first source node from which a negative cycle was detected
        node: NodeId,
    },

    /// The requested metric was not part of the [`crate::centrality::Metrics`] selection the
    /// result was computed with.
    #[error("Metric {0} was not computed")]
    MetricNotComputed(Metric),

    /// The graph snapshot is internally inconsistent.
    ///
    /// Raised when the graph reports an edge whose endpoints are not nodes of the same graph,
    /// which would otherwise cause out-of-bounds access while building the adjacency index.
    #[error("{0}")]
    GraphError(String),
}

impl Error {
    /// Returns `true` for every error caused by an argument the caller passed in.
    ///
    /// All current variants belong to this class; the method exists so callers can match on
    /// the category rather than on the individual variants.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::EmptyGraph
                | Error::NodeNotFound(_)
                | Error::EdgeNotFound(_)
                | Error::NegativeWeight { .. }
                | Error::InvalidWeight { .. }
                | Error::InvalidParameter(_)
                | Error::NegativeCycle { .. }
                | Error::MetricNotComputed(_)
                | Error::GraphError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::NodeNotFound(NodeId::new(3)).to_string(),
            "Node n3 does not exist in the graph"
        );
        assert_eq!(
            Error::NegativeWeight {
                edge: EdgeId::new(1),
                weight: -2.5
            }
            .to_string(),
            "Edge e1 has negative weight -2.5"
        );
        assert_eq!(
            Error::MetricNotComputed(Metric::Stress).to_string(),
            "Metric stress was not computed"
        );
    }

    #[test]
    fn test_macros() {
        let err = graph_error!("edge {} points at {}", EdgeId::new(0), NodeId::new(9));
        assert_eq!(err.to_string(), "edge e0 points at n9");

        let err = invalid_parameter!("alpha");
        assert_eq!(err, Error::InvalidParameter("alpha".to_string()));
    }

    #[test]
    fn test_all_variants_are_invalid_argument() {
        assert!(Error::EmptyGraph.is_invalid_argument());
        assert!(Error::GraphError(String::new()).is_invalid_argument());
        assert!(Error::NegativeCycle {
            node: NodeId::new(0)
        }
        .is_invalid_argument());
    }
}
