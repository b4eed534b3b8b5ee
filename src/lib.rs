// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # netscope
//!
//! A deterministic graph-algorithms engine for directed and undirected multigraphs.
//!
//! `netscope` runs classic algorithms over any graph model that can list its nodes and
//! edges. Each call takes a read-only snapshot, projects it into an adjacency index,
//! and hands back an immutable result object. Tie-breaking follows node and edge
//! insertion order, so identical inputs always give identical outputs.
//!
//! ## Features
//!
//! - **Traversal** - BFS and DFS with discovery callbacks that can stop the search
//! - **Shortest paths** - Dijkstra, Bellman-Ford and Floyd-Warshall, with negative-cycle
//!   detection and reconstruction
//! - **Spanning trees** - Kruskal forests and Prim trees
//! - **Link analysis** - PageRank and HITS with configurable convergence
//! - **Centrality** - degree, closeness, eccentricity, radiality, diameter, clustering,
//!   betweenness and stress
//!
//! ## Quick Start
//!
//! ```rust
//! use netscope::prelude::*;
//!
//! let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! graph.add_edge(a, b, 1.0)?;
//! graph.add_edge(b, c, 2.0)?;
//! graph.add_edge(a, c, 5.0)?;
//!
//! let paths = find_path(&graph, a, true, |e| graph.weight(e))?;
//! assert_eq!(paths.distance_to(c)?, 3.0);
//! assert_eq!(paths.path_to(c)?, vec![a, b, c]);
//!
//! let stats = compute_all(&graph, true, |e| graph.weight(e))?;
//! assert_eq!(stats.betweenness_map()?.get(b)?, 1.0);
//! # Ok::<(), netscope::Error>(())
//! ```
//!
//! ## Bringing your own graph
//!
//! Algorithms accept anything implementing [`graph::Network`]. Node and edge handles
//! are dense indices, and edge weights come from a caller-supplied function that is
//! evaluated once per edge per call.
//!
//! ## Architecture
//!
//! - [`graph`] - Handles, the graph contract, the host graph and the adjacency index
//! - [`algorithms`] - Traversal, shortest paths, spanning trees and link analysis
//! - [`centrality`] - Local and path-based centrality measures
//! - [`config`] - Convergence settings for the iterative algorithms
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Cargo features
//!
//! - `parallel` - run the per-source centrality passes on the rayon thread pool
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger. Algorithm
//! entry and exit are logged at `debug`, per-iteration residuals at `trace`, and
//! non-convergence or negative cycles at `warn`.

mod error;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use netscope::prelude::*;
///
/// let graph = DirectedGraph::from_weighted_edges(2, &[(0, 1, 1.0)])?;
/// let result = breadth_first_search(&graph, NodeId::new(0), true, |_, _, _| true)?;
/// assert!(result.has_path_to(NodeId::new(1))?);
/// # Ok::<(), netscope::Error>(())
/// ```
pub mod prelude;

/// Graph algorithms: traversal, shortest paths, spanning trees and link analysis.
pub mod algorithms;

/// Centrality measures and the bundled [`centrality::NetworkStatsResults`].
pub mod centrality;

/// Convergence configuration for PageRank and HITS.
pub mod config;

/// Graph handles, the graph contract, the host graph and the adjacency index.
pub mod graph;

/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use netscope::{algorithms::find_path, graph::{unit_weight, DirectedGraph, NodeId}, Result};
///
/// fn hops(graph: &DirectedGraph<(), f64>, to: NodeId) -> Result<f64> {
///     find_path(graph, NodeId::new(0), true, unit_weight)?.distance_to(to)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `netscope` Error type
///
/// Every failure is a rejected argument: an empty graph, a foreign handle, an invalid
/// weight or parameter, or a metric that is undefined for the input.
///
/// # Examples
///
/// ```rust
/// use netscope::{algorithms::find_path, graph::{DirectedGraph, NodeId}, Error};
///
/// let graph = DirectedGraph::from_weighted_edges(2, &[(0, 1, -1.0)])?;
///
/// match find_path(&graph, NodeId::new(0), true, |e| graph.weight(e)) {
///     Err(Error::NegativeWeight { edge, weight }) => println!("{} weighs {}", edge, weight),
///     Err(e) => println!("Error: {}", e),
///     Ok(_) => unreachable!(),
/// }
/// # Ok::<(), netscope::Error>(())
/// ```
pub use error::Error;
