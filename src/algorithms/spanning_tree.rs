//! Minimum spanning trees and forests.
//!
//! Spanning trees are inherently undirected: both algorithms ignore edge orientation.
//! Weights may be negative. Self-loops never enter a tree; of several parallel edges at
//! most one does.
//!
//! # Disconnected graphs
//!
//! - [`find_kruskal_tree`] spans every component and returns a minimum spanning forest
//! - [`find_prim_tree`] / [`find_prim_tree_from`] span only the component containing
//!   the root
//!
//! On a connected graph both produce trees of equal total weight, although the edge
//! sets may differ when weights tie.

use crate::{
    algorithms::{frontier::Frontier, union_find::UnionFind},
    graph::{Adjacent, AdjacencyIndex, EdgeId, EdgeWeights, Network, NodeId, NodeSet},
    Error, Result,
};

/// A minimum spanning tree or forest.
///
/// # Examples
///
/// ```rust
/// use netscope::{algorithms::find_kruskal_tree, graph::DirectedGraph};
///
/// // Two disjoint edges: A-B (3) and C-D (1)
/// let graph = DirectedGraph::from_weighted_edges(4, &[(0, 1, 3.0), (2, 3, 1.0)])?;
///
/// let mst = find_kruskal_tree(&graph, |e| graph.weight(e))?;
/// assert_eq!(mst.weight(), 4.0);
/// assert_eq!(mst.tree_count(), 2);
/// # Ok::<(), netscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MstResult {
    edges: Vec<EdgeId>,
    in_tree: Vec<bool>,
    weight: f64,
    trees: usize,
}

impl MstResult {
    fn new(edge_count: usize) -> Self {
        MstResult {
            edges: Vec::new(),
            in_tree: vec![false; edge_count],
            weight: 0.0,
            trees: 1,
        }
    }

    fn add(&mut self, edge: EdgeId, weight: f64) {
        self.edges.push(edge);
        self.in_tree[edge.index()] = true;
        self.weight += weight;
    }

    /// Returns the total weight of the tree edges.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the tree edges in the order they were added.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns `true` if `edge` is part of the tree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`] for a foreign edge.
    pub fn contains(&self, edge: EdgeId) -> Result<bool> {
        self.in_tree
            .get(edge.index())
            .copied()
            .ok_or(Error::EdgeNotFound(edge))
    }

    /// Returns the number of trees spanned.
    ///
    /// Always 1 for Prim. For Kruskal this is the number of connected components,
    /// isolated nodes counting as trees of their own.
    #[must_use]
    pub fn tree_count(&self) -> usize {
        self.trees
    }
}

/// Builds a minimum spanning forest with Kruskal's algorithm.
///
/// Edges are processed by ascending weight, ties in `EdgeId` order, and kept when they
/// join two different components. Stops after `V - 1` edges.
///
/// # Errors
///
/// - [`Error::EmptyGraph`] if the graph has no nodes
/// - [`Error::InvalidWeight`] if any weight is NaN or infinite
///
/// # Complexity
///
/// O(E log E) time, O(V + E) space.
pub fn find_kruskal_tree<G, W>(graph: &G, weight: W) -> Result<MstResult>
where
    G: Network,
    W: Fn(EdgeId) -> f64,
{
    let index = AdjacencyIndex::build(graph, false)?;
    let weights = EdgeWeights::collect(&index, weight)?;
    let node_count = index.node_count();

    let mut order: Vec<EdgeId> = (0..index.edge_count()).map(EdgeId::new).collect();
    order.sort_by(|a, b| weights.get(*a).total_cmp(&weights.get(*b)));

    let mut sets = UnionFind::new(node_count);
    let mut result = MstResult::new(index.edge_count());
    for edge in order {
        if result.edges.len() + 1 >= node_count {
            break;
        }
        let (source, target) = index.endpoints(edge);
        if sets.union(source, target) {
            result.add(edge, weights.get(edge));
        }
    }
    result.trees = sets.set_count();

    log::debug!(
        "kruskal: {} edges in a forest of {} trees, weight {}",
        result.edges.len(),
        result.trees,
        result.weight
    );

    Ok(result)
}

/// Builds a minimum spanning tree with Prim's algorithm, rooted at the first node.
///
/// Only the component containing `NodeId(0)` is spanned.
///
/// # Errors
///
/// - [`Error::EmptyGraph`] if the graph has no nodes
/// - [`Error::InvalidWeight`] if any weight is NaN or infinite
pub fn find_prim_tree<G, W>(graph: &G, weight: W) -> Result<MstResult>
where
    G: Network,
    W: Fn(EdgeId) -> f64,
{
    find_prim_tree_from(graph, NodeId::new(0), weight)
}

/// Builds a minimum spanning tree with Prim's algorithm, grown from `root`.
///
/// The cheapest edge leaving the tree is added at each step; among equally cheap
/// edges the one discovered first wins. Only the component containing `root` is
/// spanned.
///
/// # Errors
///
/// - [`Error::EmptyGraph`] if the graph has no nodes
/// - [`Error::NodeNotFound`] if `root` is not in the graph
/// - [`Error::InvalidWeight`] if any weight is NaN or infinite
///
/// # Examples
///
/// ```rust
/// use netscope::{algorithms::find_prim_tree_from, graph::{DirectedGraph, EdgeId, NodeId}};
///
/// let graph = DirectedGraph::from_weighted_edges(3, &[(0, 1, 5.0), (1, 2, 1.0), (0, 2, 2.0)])?;
///
/// let mst = find_prim_tree_from(&graph, NodeId::new(1), |e| graph.weight(e))?;
/// assert_eq!(mst.weight(), 3.0);
/// assert_eq!(mst.edges(), &[EdgeId::new(1), EdgeId::new(2)]);
/// # Ok::<(), netscope::Error>(())
/// ```
///
/// # Complexity
///
/// O(E log E) time, O(V + E) space.
pub fn find_prim_tree_from<G, W>(graph: &G, root: NodeId, weight: W) -> Result<MstResult>
where
    G: Network,
    W: Fn(EdgeId) -> f64,
{
    let index = AdjacencyIndex::build(graph, false)?;
    index.check_node(root)?;
    let weights = EdgeWeights::collect(&index, weight)?;

    let mut in_tree = NodeSet::new(index.node_count());
    let mut frontier: Frontier<Adjacent> = Frontier::with_capacity(index.edge_count());
    let mut result = MstResult::new(index.edge_count());

    in_tree.insert(root);
    for &adj in index.neighbors(root) {
        frontier.push(weights.get(adj.edge), adj);
    }

    while let Some((w, adj)) = frontier.pop() {
        if !in_tree.insert(adj.node) {
            continue;
        }
        result.add(adj.edge, w);

        for &next in index.neighbors(adj.node) {
            if !in_tree.contains(next.node) {
                frontier.push(weights.get(next.edge), next);
            }
        }
    }

    log::debug!(
        "prim from {}: spanned {} of {} nodes, weight {}",
        root,
        in_tree.len(),
        index.node_count(),
        result.weight
    );

    Ok(result)
}
