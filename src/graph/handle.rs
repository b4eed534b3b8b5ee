//! Opaque node and edge handles.
//!
//! Graphs hand out [`NodeId`] and [`EdgeId`] values as arena indices: the host graph owns
//! the node and edge data, the engine only ever sees the index. Two handles are equal
//! exactly when they refer to the same arena slot, never because the data behind them
//! happens to compare equal.
//!
//! Both types implement [`Handle`], which lets per-node and per-edge result tables
//! ([`ScoreMap`](crate::centrality::ScoreMap)) be written once for either key type.

use std::fmt;

use crate::Error;

/// Common behaviour of arena-indexed handles.
///
/// Implemented by [`NodeId`] and [`EdgeId`]. Result tables use it to translate between
/// dense vector positions and handles, and to report a foreign handle with the
/// matching error variant.
pub trait Handle: Copy + Eq + std::hash::Hash + fmt::Debug {
    /// Builds a handle from its arena index.
    fn from_index(index: usize) -> Self;

    /// Returns the arena index of this handle.
    fn to_index(self) -> usize;

    /// Returns the error reported when this handle is not part of a graph or result.
    fn not_found(self) -> Error;
}

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident, $prefix:literal, $err:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub(crate) usize);

        impl $name {
            #[doc = concat!("Creates a `", stringify!($name), "` from a raw arena index.")]
            ///
            /// Handles are normally obtained from the host graph; constructing one by hand
            /// is mostly useful in tests and when bridging an external arena.
            #[must_use]
            #[inline]
            pub const fn new(index: usize) -> Self {
                $name(index)
            }

            /// Returns the raw arena index, suitable for indexing per-element vectors.
            #[must_use]
            #[inline]
            pub const fn index(self) -> usize {
                self.0
            }
        }

        impl Handle for $name {
            #[inline]
            fn from_index(index: usize) -> Self {
                $name(index)
            }

            #[inline]
            fn to_index(self) -> usize {
                self.0
            }

            fn not_found(self) -> Error {
                Error::$err(self)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                $name(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(handle: $name) -> Self {
                handle.0
            }
        }
    };
}

define_handle!(
    /// A node handle: the arena index of a node in the host graph.
    ///
    /// Node ids are dense, `0..node_count`, in the order the host graph created them.
    /// That order is the iteration order every algorithm in this crate uses, so it is
    /// also the order that decides ties.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use netscope::graph::{DirectedGraph, NodeId};
    ///
    /// let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
    /// let a = graph.add_node("A");
    /// assert_eq!(a, NodeId::new(0));
    /// assert_eq!(a.to_string(), "n0");
    /// ```
    NodeId,
    "n",
    NodeNotFound
);

define_handle!(
    /// An edge handle: the arena index of an edge in the host graph.
    ///
    /// Parallel edges between the same pair of nodes have distinct ids and are treated as
    /// independent options by every algorithm.
    EdgeId,
    "e",
    EdgeNotFound
);
