//! Graph contract, handles and the per-call adjacency projection.
//!
//! This module holds everything the algorithms share before any algorithm-specific
//! work starts.
//!
//! # Architecture
//!
//! - **Handles**: [`NodeId`] and [`EdgeId`] are arena indices into the host graph;
//!   identity is the index, never the data
//! - **Contract**: [`GraphBase`] and [`Network`] are all an external graph model has to
//!   implement
//! - **Host graph**: [`DirectedGraph`] is a ready-made multigraph implementing the contract
//! - **Projection**: [`AdjacencyIndex`] turns a snapshot into ordered neighbour lists,
//!   directed or undirected, once per call
//! - **Weights**: [`EdgeWeights`] evaluates a weight function once per edge
//!
//! # Design Principles
//!
//! ## Read-only snapshots
//!
//! Algorithms never mutate the graph and keep no state between calls. Everything a call
//! needs is allocated at entry and released at return, so concurrent calls on the same,
//! unchanging graph are safe.
//!
//! ## Deterministic order
//!
//! Node order is ascending `NodeId`; adjacency order is edge insertion order. Every
//! tie-break in the crate derives from these two orders.
//!
//! # Usage Examples
//!
//! ```rust
//! use netscope::graph::{AdjacencyIndex, DirectedGraph, NodeId};
//!
//! // Triangle A-B-C-A
//! let mut graph: DirectedGraph<&str, f64> = DirectedGraph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! graph.add_edge(a, b, 1.0)?;
//! graph.add_edge(b, c, 1.0)?;
//! graph.add_edge(c, a, 1.0)?;
//!
//! let index = AdjacencyIndex::build(&graph, false)?;
//! assert_eq!(index.neighbors(a).len(), 2);
//! # Ok::<(), netscope::Error>(())
//! ```

mod directed;
mod handle;
mod index;
mod nodeset;
mod traits;
mod weights;

pub use directed::DirectedGraph;
pub use handle::{EdgeId, Handle, NodeId};
pub use index::{Adjacent, AdjacencyIndex};
pub use nodeset::NodeSet;
pub use traits::{GraphBase, Network};
pub use weights::{unit_weight, EdgeWeights};
