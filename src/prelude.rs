//! # netscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and
//! functions of the netscope library. Import it to get quick access to graph handles,
//! the host graph and every algorithm entry point.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all netscope operations
pub use crate::Error;

/// The result type used throughout netscope
pub use crate::Result;

// ================================================================================================
// Graph Model
// ================================================================================================

/// Node and edge handles
pub use crate::graph::{EdgeId, Handle, NodeId};

/// The graph contract and the in-crate host graph
pub use crate::graph::{DirectedGraph, GraphBase, Network};

/// Adjacency projection and weights
pub use crate::graph::{unit_weight, AdjacencyIndex};

// ================================================================================================
// Algorithms
// ================================================================================================

/// Traversal
pub use crate::algorithms::{breadth_first_search, depth_first_search, BfsResult, DfsResult};

/// Shortest paths
pub use crate::algorithms::{
    find_all_pair_shortest_path, find_path, find_shortest_path, BellmanFordResult,
    DijkstraResult, FloydWarshallResult,
};

/// Spanning trees
pub use crate::algorithms::{find_kruskal_tree, find_prim_tree, find_prim_tree_from, MstResult};

/// Link analysis
pub use crate::algorithms::{
    get_hits_scores, get_hits_scores_with, get_pageranks, get_pageranks_with, HitsResults,
    PagerankResults,
};

// ================================================================================================
// Centrality
// ================================================================================================

/// Bundled metrics
pub use crate::centrality::{
    compute, compute_all, Metric, Metrics, NetworkStatsResults, PathAlgorithm, ScoreMap,
};

/// Single metrics
pub use crate::centrality::{
    get_betweenness_stress, get_closeness, get_clustering_coefficient, get_degree,
    get_diameter, get_eccentricity, get_indegree, get_outdegree, get_radiality,
    BetweennessStress,
};

// ================================================================================================
// Configuration
// ================================================================================================

/// Convergence settings
pub use crate::config::{HitsConfig, PageRankConfig};
