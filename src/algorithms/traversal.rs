//! Breadth-first and depth-first search with cooperative cancellation.
//!
//! Both searches walk an [`AdjacencyIndex`] from a source node and invoke a callback
//! once per newly discovered node with `(node, time, dist)`:
//!
//! - `time` is the 0-based discovery order (the source is 0)
//! - `dist` is the hop count from the source for BFS, always 0 for DFS
//!
//! The callback returns `true` to continue. Returning `false` stops the search at once;
//! the node that triggered the stop is kept as discovered and the partial result is
//! returned as usual, with [`was_cancelled`](BfsResult::was_cancelled) set.
//!
//! Neighbours are explored in adjacency order, so discovery order is deterministic.
//!
//! # Complexity
//!
//! Both searches run in O(V + E) time and O(V) space.

use std::collections::VecDeque;

use crate::{
    graph::{AdjacencyIndex, Network, NodeId, NodeSet},
    Result,
};

/// Discovery bookkeeping shared by both searches.
#[derive(Debug, Clone)]
struct SearchTree {
    source: NodeId,
    time: Vec<Option<usize>>,
    parent: Vec<Option<NodeId>>,
    order: Vec<NodeId>,
    cancelled: bool,
}

impl SearchTree {
    fn new(source: NodeId, node_count: usize) -> Self {
        SearchTree {
            source,
            time: vec![None; node_count],
            parent: vec![None; node_count],
            order: Vec::new(),
            cancelled: false,
        }
    }

    /// Records `node` as discovered from `parent` and returns its discovery time.
    fn discover(&mut self, node: NodeId, parent: Option<NodeId>) -> usize {
        let t = self.order.len();
        self.time[node.index()] = Some(t);
        self.parent[node.index()] = parent;
        self.order.push(node);
        t
    }

    fn check(&self, node: NodeId) -> Result<usize> {
        if node.index() < self.time.len() {
            Ok(node.index())
        } else {
            Err(crate::Error::NodeNotFound(node))
        }
    }

    fn has_path_to(&self, target: NodeId) -> Result<bool> {
        Ok(self.time[self.check(target)?].is_some())
    }

    fn time_of(&self, node: NodeId) -> Result<Option<usize>> {
        Ok(self.time[self.check(node)?])
    }

    fn path_to(&self, target: NodeId) -> Result<Vec<NodeId>> {
        if !self.has_path_to(target)? {
            return Ok(Vec::new());
        }

        let mut path = vec![target];
        let mut current = target;
        while let Some(parent) = self.parent[current.index()] {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Ok(path)
    }
}

/// Result of [`breadth_first_search`].
///
/// Hop distances follow the BFS tree, so they are shortest in edge count.
/// Unvisited nodes (unreachable, or not reached before cancellation) report no path and
/// an infinite distance.
#[derive(Debug, Clone)]
pub struct BfsResult {
    tree: SearchTree,
    dist: Vec<usize>,
}

impl BfsResult {
    /// Returns the node the search started from.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.tree.source
    }

    /// Returns `true` if `target` was discovered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) for a foreign node.
    pub fn has_path_to(&self, target: NodeId) -> Result<bool> {
        self.tree.has_path_to(target)
    }

    /// Returns the hop distance to `target`, or `f64::INFINITY` if it was not discovered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) for a foreign node.
    pub fn distance_to(&self, target: NodeId) -> Result<f64> {
        if self.tree.has_path_to(target)? {
            Ok(self.dist[target.index()] as f64)
        } else {
            Ok(f64::INFINITY)
        }
    }

    /// Returns the BFS tree path from the source to `target`, source first.
    ///
    /// The path is empty when `target` was not discovered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) for a foreign node.
    pub fn path_to(&self, target: NodeId) -> Result<Vec<NodeId>> {
        self.tree.path_to(target)
    }

    /// Returns the discovery time of `node`, if it was discovered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) for a foreign node.
    pub fn time_of(&self, node: NodeId) -> Result<Option<usize>> {
        self.tree.time_of(node)
    }

    /// Returns the discovered nodes in discovery order.
    #[must_use]
    pub fn visited(&self) -> &[NodeId] {
        &self.tree.order
    }

    /// Returns `true` if the callback stopped the search early.
    #[must_use]
    pub fn was_cancelled(&self) -> bool {
        self.tree.cancelled
    }
}

/// Result of [`depth_first_search`].
#[derive(Debug, Clone)]
pub struct DfsResult {
    tree: SearchTree,
}

impl DfsResult {
    /// Returns the node the search started from.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.tree.source
    }

    /// Returns `true` if `target` was discovered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) for a foreign node.
    pub fn has_path_to(&self, target: NodeId) -> Result<bool> {
        self.tree.has_path_to(target)
    }

    /// Returns the DFS tree path from the source to `target`, source first.
    ///
    /// The path is a valid walk but generally not a shortest one. It is empty when
    /// `target` was not discovered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) for a foreign node.
    pub fn path_to(&self, target: NodeId) -> Result<Vec<NodeId>> {
        self.tree.path_to(target)
    }

    /// Returns the discovery time of `node`, if it was discovered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`](crate::Error::NodeNotFound) for a foreign node.
    pub fn time_of(&self, node: NodeId) -> Result<Option<usize>> {
        self.tree.time_of(node)
    }

    /// Returns the discovered nodes in pre-order.
    #[must_use]
    pub fn visited(&self) -> &[NodeId] {
        &self.tree.order
    }

    /// Returns `true` if the callback stopped the search early.
    #[must_use]
    pub fn was_cancelled(&self) -> bool {
        self.tree.cancelled
    }
}

/// Runs a breadth-first search from `source`.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `source` - The starting node
/// * `directed` - Whether edges may only be followed from source to target
/// * `callback` - Called as `(node, time, dist)` per discovered node; `false` stops the search
///
/// # Errors
///
/// - [`Error::EmptyGraph`](crate::Error::EmptyGraph) if the graph has no nodes
/// - [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `source` is not in the graph
///
/// # Examples
///
/// ```rust
/// use netscope::{algorithms::breadth_first_search, graph::{DirectedGraph, NodeId}};
///
/// // Triangle A-B-C-A
/// let graph = DirectedGraph::from_weighted_edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)])?;
///
/// let mut seen = Vec::new();
/// let result = breadth_first_search(&graph, NodeId::new(0), false, |node, _time, dist| {
///     seen.push((node.index(), dist));
///     true
/// })?;
///
/// assert_eq!(seen, vec![(0, 0), (1, 1), (2, 1)]);
/// assert_eq!(result.distance_to(NodeId::new(2))?, 1.0);
/// # Ok::<(), netscope::Error>(())
/// ```
pub fn breadth_first_search<G, F>(
    graph: &G,
    source: NodeId,
    directed: bool,
    mut callback: F,
) -> Result<BfsResult>
where
    G: Network,
    F: FnMut(NodeId, usize, usize) -> bool,
{
    let index = AdjacencyIndex::build(graph, directed)?;
    index.check_node(source)?;

    let node_count = index.node_count();
    let mut tree = SearchTree::new(source, node_count);
    let mut dist = vec![0usize; node_count];
    let mut queue = VecDeque::new();

    let t = tree.discover(source, None);
    if !callback(source, t, 0) {
        tree.cancelled = true;
        return Ok(BfsResult { tree, dist });
    }
    queue.push_back(source);

    'search: while let Some(node) = queue.pop_front() {
        let next_dist = dist[node.index()] + 1;
        for adj in index.neighbors(node) {
            if tree.time[adj.node.index()].is_some() {
                continue;
            }

            let t = tree.discover(adj.node, Some(node));
            dist[adj.node.index()] = next_dist;
            if !callback(adj.node, t, next_dist) {
                tree.cancelled = true;
                break 'search;
            }
            queue.push_back(adj.node);
        }
    }

    log::debug!(
        "bfs from {}: visited {} of {} nodes{}",
        source,
        tree.order.len(),
        node_count,
        if tree.cancelled { " (cancelled)" } else { "" }
    );

    Ok(BfsResult { tree, dist })
}

/// Runs a depth-first search from `source`.
///
/// Discovery is true pre-order: the first unvisited neighbour in adjacency order is
/// entered before any of its siblings are looked at. The callback's `dist` argument is
/// always 0.
///
/// # Arguments
///
/// * `graph` - The graph to traverse
/// * `source` - The starting node
/// * `directed` - Whether edges may only be followed from source to target
/// * `callback` - Called as `(node, time, 0)` per discovered node; `false` stops the search
///
/// # Errors
///
/// - [`Error::EmptyGraph`](crate::Error::EmptyGraph) if the graph has no nodes
/// - [`Error::NodeNotFound`](crate::Error::NodeNotFound) if `source` is not in the graph
///
/// # Examples
///
/// ```rust
/// use netscope::{algorithms::depth_first_search, graph::{DirectedGraph, NodeId}};
///
/// // Diamond: 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
/// let graph = DirectedGraph::from_weighted_edges(
///     4,
///     &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)],
/// )?;
///
/// let result = depth_first_search(&graph, NodeId::new(0), true, |_, _, _| true)?;
/// let order: Vec<usize> = result.visited().iter().map(|n| n.index()).collect();
/// assert_eq!(order, vec![0, 1, 3, 2]);
/// # Ok::<(), netscope::Error>(())
/// ```
pub fn depth_first_search<G, F>(
    graph: &G,
    source: NodeId,
    directed: bool,
    mut callback: F,
) -> Result<DfsResult>
where
    G: Network,
    F: FnMut(NodeId, usize, usize) -> bool,
{
    let index = AdjacencyIndex::build(graph, directed)?;
    index.check_node(source)?;

    let node_count = index.node_count();
    let mut tree = SearchTree::new(source, node_count);
    let mut on_tree = NodeSet::new(node_count);

    on_tree.insert(source);
    let t = tree.discover(source, None);
    if !callback(source, t, 0) {
        tree.cancelled = true;
        return Ok(DfsResult { tree });
    }

    // (node, position of the next adjacency entry to examine)
    let mut stack: Vec<(NodeId, usize)> = vec![(source, 0)];

    while let Some(top) = stack.last_mut() {
        let (node, cursor) = *top;
        let neighbors = index.neighbors(node);

        let next = neighbors[cursor..]
            .iter()
            .position(|adj| !on_tree.contains(adj.node))
            .map(|offset| cursor + offset);

        let Some(pos) = next else {
            stack.pop();
            continue;
        };

        top.1 = pos + 1;
        let child = neighbors[pos].node;
        on_tree.insert(child);
        let t = tree.discover(child, Some(node));
        if !callback(child, t, 0) {
            tree.cancelled = true;
            break;
        }
        stack.push((child, 0));
    }

    log::debug!(
        "dfs from {}: visited {} of {} nodes{}",
        source,
        tree.order.len(),
        node_count,
        if tree.cancelled { " (cancelled)" } else { "" }
    );

    Ok(DfsResult { tree })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{graph::DirectedGraph, Error};

    fn n(i: usize) -> NodeId {
        NodeId::new(i)
    }

    /// Linear graph: 0 -> 1 -> 2 -> 3
    fn create_linear_graph() -> DirectedGraph<(), f64> {
        DirectedGraph::from_weighted_edges(4, &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]).unwrap()
    }

    /// Diamond graph: 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3
    fn create_diamond_graph() -> DirectedGraph<(), f64> {
        DirectedGraph::from_weighted_edges(4, &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)])
            .unwrap()
    }

    #[test]
    fn test_bfs_times_and_distances() {
        let graph = create_diamond_graph();
        let mut calls = Vec::new();
        let result = breadth_first_search(&graph, n(0), true, |node, time, dist| {
            calls.push((node.index(), time, dist));
            true
        })
        .unwrap();

        assert_eq!(calls, vec![(0, 0, 0), (1, 1, 1), (2, 2, 1), (3, 3, 2)]);
        assert_eq!(result.source(), n(0));
        assert_eq!(result.distance_to(n(3)).unwrap(), 2.0);
        assert_eq!(result.path_to(n(3)).unwrap(), vec![n(0), n(1), n(3)]);
        assert!(!result.was_cancelled());
    }

    #[test]
    fn test_bfs_directed_unreachable() {
        let graph = create_linear_graph();
        let result = breadth_first_search(&graph, n(2), true, |_, _, _| true).unwrap();

        assert!(!result.has_path_to(n(0)).unwrap());
        assert_eq!(result.distance_to(n(0)).unwrap(), f64::INFINITY);
        assert!(result.path_to(n(0)).unwrap().is_empty());
        assert_eq!(result.time_of(n(0)).unwrap(), None);
        assert_eq!(result.visited(), &[n(2), n(3)]);
    }

    #[test]
    fn test_bfs_undirected_reaches_backwards() {
        let graph = create_linear_graph();
        let result = breadth_first_search(&graph, n(2), false, |_, _, _| true).unwrap();

        assert_eq!(result.distance_to(n(0)).unwrap(), 2.0);
        assert_eq!(result.path_to(n(0)).unwrap(), vec![n(2), n(1), n(0)]);
    }

    #[test]
    fn test_bfs_cancellation_keeps_partial_result() {
        let graph = create_linear_graph();
        let result =
            breadth_first_search(&graph, n(0), true, |node, _, _| node != n(1)).unwrap();

        assert!(result.was_cancelled());
        assert!(result.has_path_to(n(1)).unwrap());
        assert!(!result.has_path_to(n(2)).unwrap());
        assert_eq!(result.visited().len(), 2);
    }

    #[test]
    fn test_bfs_cancel_on_source() {
        let graph = create_linear_graph();
        let mut calls = 0;
        let result = breadth_first_search(&graph, n(0), true, |_, _, _| {
            calls += 1;
            false
        })
        .unwrap();

        assert_eq!(calls, 1);
        assert_eq!(result.visited(), &[n(0)]);
        assert!(result.was_cancelled());
    }

    #[test]
    fn test_bfs_foreign_nodes() {
        let graph = create_linear_graph();
        assert_eq!(
            breadth_first_search(&graph, n(9), true, |_, _, _| true).unwrap_err(),
            Error::NodeNotFound(n(9))
        );

        let result = breadth_first_search(&graph, n(0), true, |_, _, _| true).unwrap();
        assert_eq!(result.has_path_to(n(4)), Err(Error::NodeNotFound(n(4))));
    }

    #[test]
    fn test_dfs_preorder() {
        let graph = create_diamond_graph();
        let mut calls = Vec::new();
        let result = depth_first_search(&graph, n(0), true, |node, time, dist| {
            calls.push((node.index(), time, dist));
            true
        })
        .unwrap();

        assert_eq!(calls, vec![(0, 0, 0), (1, 1, 0), (3, 2, 0), (2, 3, 0)]);
        assert_eq!(result.path_to(n(3)).unwrap(), vec![n(0), n(1), n(3)]);
        assert_eq!(result.path_to(n(2)).unwrap(), vec![n(0), n(2)]);
    }

    #[test]
    fn test_dfs_goes_deep_before_wide() {
        // 0 -> 1, 0 -> 2, 1 -> 2: DFS reaches 2 through 1
        let graph =
            DirectedGraph::from_weighted_edges(3, &[(0, 1, 1.0), (0, 2, 1.0), (1, 2, 1.0)]).unwrap();
        let result = depth_first_search(&graph, n(0), true, |_, _, _| true).unwrap();

        assert_eq!(result.path_to(n(2)).unwrap(), vec![n(0), n(1), n(2)]);
        assert_eq!(result.time_of(n(2)).unwrap(), Some(2));
    }

    #[test]
    fn test_dfs_cancellation() {
        let graph = create_linear_graph();
        let result = depth_first_search(&graph, n(0), false, |_, time, _| time < 2).unwrap();

        assert!(result.was_cancelled());
        assert_eq!(result.visited(), &[n(0), n(1), n(2)]);
        assert!(!result.has_path_to(n(3)).unwrap());
    }

    #[test]
    fn test_self_loop_and_cycle_terminate() {
        let graph =
            DirectedGraph::from_weighted_edges(2, &[(0, 0, 1.0), (0, 1, 1.0), (1, 0, 1.0)]).unwrap();

        let bfs = breadth_first_search(&graph, n(0), true, |_, _, _| true).unwrap();
        assert_eq!(bfs.visited().len(), 2);

        let dfs = depth_first_search(&graph, n(1), true, |_, _, _| true).unwrap();
        assert_eq!(dfs.visited(), &[n(1), n(0)]);
    }
}
