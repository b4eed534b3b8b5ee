//! Graph algorithms over read-only graph snapshots.
//!
//! Every entry point takes any [`Network`](crate::graph::Network), builds its own
//! [`AdjacencyIndex`](crate::graph::AdjacencyIndex) for the call, and returns an
//! immutable result object. Nothing is cached between calls.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`breadth_first_search`] - BFS with hop distances and early exit
//! - [`depth_first_search`] - Pre-order DFS with early exit
//!
//! ## Shortest Paths
//!
//! - [`find_path`] - Dijkstra, non-negative weights
//! - [`find_shortest_path`] - Bellman-Ford, negative weights and cycle detection
//! - [`find_all_pair_shortest_path`] - Floyd-Warshall, all pairs with cycle reconstruction
//!
//! ## Spanning Trees
//!
//! - [`find_kruskal_tree`] - Minimum spanning forest over all components
//! - [`find_prim_tree`] / [`find_prim_tree_from`] - Minimum spanning tree of one component
//!
//! ## Link Analysis
//!
//! - [`get_pageranks`] / [`get_pageranks_with`] - PageRank
//! - [`get_hits_scores`] / [`get_hits_scores_with`] - HITS hubs and authorities
//!
//! ## Building Blocks
//!
//! - [`Frontier`] - Min-priority queue with FIFO tie-break
//! - [`UnionFind`] - Disjoint-set union
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | BFS/DFS | O(V + E) | Reachability, hop distances |
//! | Dijkstra | O((V + E) log V) | Weighted paths, non-negative weights |
//! | Bellman-Ford | O(V * E) | Negative weights, cycle detection |
//! | Floyd-Warshall | O(V³) | Dense all-pairs queries |
//! | Kruskal / Prim | O(E log E) | Minimum spanning trees |
//! | PageRank / HITS | O(k * (V + E)) | Importance scores, k iterations |
//!
//! # Examples
//!
//! ```rust
//! use netscope::{
//!     algorithms::{find_kruskal_tree, find_path},
//!     graph::{DirectedGraph, NodeId},
//! };
//!
//! let graph = DirectedGraph::from_weighted_edges(
//!     4,
//!     &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 4.0), (2, 3, 1.0)],
//! )?;
//!
//! let paths = find_path(&graph, NodeId::new(0), false, |e| graph.weight(e))?;
//! assert_eq!(paths.distance_to(NodeId::new(3))?, 4.0);
//!
//! let mst = find_kruskal_tree(&graph, |e| graph.weight(e))?;
//! assert_eq!(mst.weight(), 4.0);
//! # Ok::<(), netscope::Error>(())
//! ```

mod frontier;
mod link_analysis;
mod shortest_path;
mod spanning_tree;
mod traversal;
mod union_find;

pub use frontier::Frontier;
pub use link_analysis::{
    get_hits_scores, get_hits_scores_with, get_pageranks, get_pageranks_with, HitsResults,
    PagerankResults,
};
pub use shortest_path::{
    find_all_pair_shortest_path, find_path, find_shortest_path, BellmanFordResult,
    DijkstraResult, FloydWarshallResult,
};
pub use spanning_tree::{find_kruskal_tree, find_prim_tree, find_prim_tree_from, MstResult};
pub use traversal::{breadth_first_search, depth_first_search, BfsResult, DfsResult};
pub use union_find::UnionFind;

pub(crate) use shortest_path::{bellman_ford_from, dijkstra_from};
