//! Arena-backed host graph.
//!
//! This module provides [`DirectedGraph`], a small multigraph that owns node and edge
//! data and hands out [`NodeId`] / [`EdgeId`] handles. It implements the [`Network`]
//! contract, so every algorithm in the crate can run on it directly. Consumers with
//! their own graph model implement [`Network`] instead and never need this type.
//!
//! Whether a computation treats the edges as directed is decided per call, not by the
//! graph: the same `DirectedGraph` can be analysed both ways.

use crate::{
    graph::{
        handle::{EdgeId, NodeId},
        traits::{GraphBase, Network},
    },
    Error, Result,
};

/// Internal storage for edge data and endpoints.
#[derive(Debug, Clone)]
struct EdgeData<E> {
    /// Source node of the edge
    source: NodeId,
    /// Target node of the edge
    target: NodeId,
    /// User-provided edge data
    data: E,
}

/// A graph with typed node and edge data, stored in insertion-ordered arenas.
///
/// - Parallel edges and self-loops are allowed
/// - Node and edge ids are dense and assigned sequentially from 0
/// - Nothing can be removed, so handles stay valid for the lifetime of the graph
///
/// # Examples
///
/// ```rust
/// use netscope::graph::{DirectedGraph, GraphBase, Network};
///
/// let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let c = graph.add_node("C");
///
/// graph.add_edge(a, b, 1.5)?;
/// graph.add_edge(b, c, 2.0)?;
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), netscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, E> {
    /// Node data storage
    nodes: Vec<N>,
    /// Edge data storage
    edges: Vec<EdgeData<E>>,
    /// Number of edges leaving each node
    out_degree: Vec<usize>,
    /// Number of edges entering each node
    in_degree: Vec<usize>,
}

impl<N, E> Default for DirectedGraph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E> DirectedGraph<N, E> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            edges: Vec::new(),
            out_degree: Vec::new(),
            in_degree: Vec::new(),
        }
    }

    /// Creates a new empty graph with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `node_capacity` - Expected number of nodes
    /// * `edge_capacity` - Expected number of edges
    #[must_use]
    pub fn with_capacity(node_capacity: usize, edge_capacity: usize) -> Self {
        DirectedGraph {
            nodes: Vec::with_capacity(node_capacity),
            edges: Vec::with_capacity(edge_capacity),
            out_degree: Vec::with_capacity(node_capacity),
            in_degree: Vec::with_capacity(node_capacity),
        }
    }

    /// Adds a node and returns its handle.
    ///
    /// The node is assigned the next sequential `NodeId`, starting from 0.
    pub fn add_node(&mut self, data: N) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(data);
        self.out_degree.push(0);
        self.in_degree.push(0);
        id
    }

    /// Adds an edge from `source` to `target` and returns its handle.
    ///
    /// The edge is assigned the next sequential `EdgeId`, starting from 0. Multiple edges
    /// between the same pair of nodes are kept as distinct edges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if either endpoint is not a node of this graph.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId, data: E) -> Result<EdgeId> {
        for node in [source, target] {
            if node.index() >= self.nodes.len() {
                return Err(Error::NodeNotFound(node));
            }
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(EdgeData {
            source,
            target,
            data,
        });
        self.out_degree[source.index()] += 1;
        self.in_degree[target.index()] += 1;

        Ok(id)
    }

    /// Returns the data associated with `node`, or `None` for a foreign node.
    #[must_use]
    pub fn node(&self, node: NodeId) -> Option<&N> {
        self.nodes.get(node.index())
    }

    /// Returns the data associated with `edge`, or `None` for a foreign edge.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&E> {
        self.edges.get(edge.index()).map(|e| &e.data)
    }

    /// Returns an iterator over all nodes with their identifiers.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &N)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, data)| (NodeId::new(i), data))
    }

    /// Returns an iterator over all edges as `(id, source, target, data)`.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, NodeId, NodeId, &E)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeId::new(i), e.source, e.target, &e.data))
    }

    /// Returns the number of edges leaving `node` (0 for a foreign node).
    #[must_use]
    pub fn out_degree(&self, node: NodeId) -> usize {
        self.out_degree.get(node.index()).copied().unwrap_or(0)
    }

    /// Returns the number of edges entering `node` (0 for a foreign node).
    #[must_use]
    pub fn in_degree(&self, node: NodeId) -> usize {
        self.in_degree.get(node.index()).copied().unwrap_or(0)
    }

    /// Returns `true` if the graph contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<N> DirectedGraph<N, f64> {
    /// Returns the weight stored on `edge`.
    ///
    /// Intended as a ready-made weight function for graphs whose edge data *is* the
    /// weight: `|e| graph.weight(e)`. A foreign edge yields NaN, which every weighted
    /// algorithm rejects with [`Error::InvalidWeight`].
    #[must_use]
    pub fn weight(&self, edge: EdgeId) -> f64 {
        self.edge(edge).copied().unwrap_or(f64::NAN)
    }
}

impl DirectedGraph<(), f64> {
    /// Builds a graph with `node_count` unit nodes from `(source, target, weight)` triples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if a triple references a node `>= node_count`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use netscope::graph::{DirectedGraph, Network};
    ///
    /// let graph = DirectedGraph::from_weighted_edges(3, &[(0, 1, 1.0), (1, 2, 4.0)])?;
    /// assert_eq!(graph.edge_count(), 2);
    /// # Ok::<(), netscope::Error>(())
    /// ```
    pub fn from_weighted_edges(node_count: usize, edges: &[(usize, usize, f64)]) -> Result<Self> {
        let mut graph = DirectedGraph::with_capacity(node_count, edges.len());
        for _ in 0..node_count {
            graph.add_node(());
        }
        for &(source, target, weight) in edges {
            graph.add_edge(NodeId::new(source), NodeId::new(target), weight)?;
        }
        Ok(graph)
    }
}

impl<N, E> GraphBase for DirectedGraph<N, E> {
    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl<N, E> Network for DirectedGraph<N, E> {
    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn edge_endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.edges.get(edge.index()).map(|e| (e.source, e.target))
    }
}
