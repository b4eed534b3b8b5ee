//! Degree counts read straight from adjacency cardinalities.

use crate::{
    graph::{AdjacencyIndex, Network, NodeId},
    Result,
};

/// Returns the number of edges incident to `node`, ignoring orientation.
///
/// Parallel edges count individually; a self-loop counts once.
///
/// # Errors
///
/// - [`Error::EmptyGraph`](crate::Error::EmptyGraph) if the graph has no nodes
/// - [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `node` is not in the graph
///
/// # Examples
///
/// ```rust
/// use netscope::{centrality::get_degree, graph::{DirectedGraph, NodeId}};
///
/// let graph = DirectedGraph::from_weighted_edges(3, &[(0, 1, 1.0), (2, 0, 1.0)])?;
/// assert_eq!(get_degree(&graph, NodeId::new(0))?, 2);
/// # Ok::<(), netscope::Error>(())
/// ```
pub fn get_degree<G: Network>(graph: &G, node: NodeId) -> Result<usize> {
    let index = AdjacencyIndex::build(graph, false)?;
    index.check_node(node)?;
    Ok(index.neighbors(node).len())
}

/// Returns the number of edges whose target is `node`.
///
/// # Errors
///
/// - [`Error::EmptyGraph`](crate::Error::EmptyGraph) if the graph has no nodes
/// - [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `node` is not in the graph
pub fn get_indegree<G: Network>(graph: &G, node: NodeId) -> Result<usize> {
    let index = AdjacencyIndex::build(graph, true)?;
    index.check_node(node)?;
    Ok(index.incoming(node).len())
}

/// Returns the number of edges whose source is `node`.
///
/// # Errors
///
/// - [`Error::EmptyGraph`](crate::Error::EmptyGraph) if the graph has no nodes
/// - [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `node` is not in the graph
pub fn get_outdegree<G: Network>(graph: &G, node: NodeId) -> Result<usize> {
    let index = AdjacencyIndex::build(graph, true)?;
    index.check_node(node)?;
    Ok(index.neighbors(node).len())
}

/// Degree of every node as scores.
pub(crate) fn degree_scores(undirected: &AdjacencyIndex) -> Vec<f64> {
    (0..undirected.node_count())
        .map(|i| undirected.neighbors(NodeId::new(i)).len() as f64)
        .collect()
}

/// `(indegree, outdegree)` of every node as scores.
pub(crate) fn directed_degree_scores(directed: &AdjacencyIndex) -> (Vec<f64>, Vec<f64>) {
    (0..directed.node_count())
        .map(NodeId::new)
        .map(|node| {
            (
                directed.incoming(node).len() as f64,
                directed.neighbors(node).len() as f64,
            )
        })
        .unzip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::DirectedGraph, Error};

    fn n(i: usize) -> NodeId {
        NodeId::new(i)
    }

    /// Center 0 with leaves 1..=4, edges pointing outwards
    fn create_star_graph() -> DirectedGraph<(), f64> {
        DirectedGraph::from_weighted_edges(5, &[(0, 1, 1.0), (0, 2, 1.0), (0, 3, 1.0), (0, 4, 1.0)])
            .unwrap()
    }

    #[test]
    fn test_star_degrees() {
        let graph = create_star_graph();

        assert_eq!(get_degree(&graph, n(0)).unwrap(), 4);
        assert_eq!(get_degree(&graph, n(3)).unwrap(), 1);
        assert_eq!(get_outdegree(&graph, n(0)).unwrap(), 4);
        assert_eq!(get_indegree(&graph, n(0)).unwrap(), 0);
        assert_eq!(get_indegree(&graph, n(2)).unwrap(), 1);
        assert_eq!(get_outdegree(&graph, n(2)).unwrap(), 0);
    }

    #[test]
    fn test_parallel_edges_and_self_loop() {
        let graph =
            DirectedGraph::from_weighted_edges(2, &[(0, 1, 1.0), (0, 1, 1.0), (1, 1, 1.0)]).unwrap();

        assert_eq!(get_degree(&graph, n(0)).unwrap(), 2);
        assert_eq!(get_degree(&graph, n(1)).unwrap(), 3);
        assert_eq!(get_indegree(&graph, n(1)).unwrap(), 3);
        assert_eq!(get_outdegree(&graph, n(1)).unwrap(), 1);
    }

    #[test]
    fn test_score_vectors() {
        let graph = create_star_graph();
        let undirected = AdjacencyIndex::build(&graph, false).unwrap();
        let directed = AdjacencyIndex::build(&graph, true).unwrap();

        assert_eq!(degree_scores(&undirected), vec![4.0, 1.0, 1.0, 1.0, 1.0]);
        let (indegree, outdegree) = directed_degree_scores(&directed);
        assert_eq!(indegree, vec![0.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(outdegree, vec![4.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_foreign_node() {
        let graph = create_star_graph();
        assert_eq!(get_degree(&graph, n(9)), Err(Error::NodeNotFound(n(9))));
    }
}
