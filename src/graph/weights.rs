//! Edge weights, evaluated once per call.
//!
//! A weight function is any `Fn(EdgeId) -> f64`. Algorithms call it exactly once per
//! edge at entry and keep the values in an [`EdgeWeights`] table, so a weight function
//! never observes more than one query per edge within a computation.

use crate::{
    graph::{handle::EdgeId, index::AdjacencyIndex},
    Error, Result,
};

/// Weight function assigning `1.0` to every edge.
///
/// Passing it to a weighted algorithm gives hop-count semantics.
///
/// # Examples
///
/// ```rust
/// use netscope::graph::{unit_weight, EdgeId};
///
/// assert_eq!(unit_weight(EdgeId::new(3)), 1.0);
/// ```
#[must_use]
pub fn unit_weight(_edge: EdgeId) -> f64 {
    1.0
}

/// Materialised weights for every edge of an indexed graph.
#[derive(Debug, Clone)]
pub struct EdgeWeights {
    weights: Vec<f64>,
    /// First negative edge in insertion order, if any
    first_negative: Option<EdgeId>,
}

impl EdgeWeights {
    /// Evaluates `weight` for every edge of `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWeight`] for the first edge whose weight is NaN or infinite.
    pub fn collect<W>(index: &AdjacencyIndex, weight: W) -> Result<Self>
    where
        W: Fn(EdgeId) -> f64,
    {
        let mut weights = Vec::with_capacity(index.edge_count());
        let mut first_negative = None;

        for i in 0..index.edge_count() {
            let edge = EdgeId::new(i);
            let w = weight(edge);
            if !w.is_finite() {
                return Err(Error::InvalidWeight { edge, weight: w });
            }
            if w < 0.0 && first_negative.is_none() {
                first_negative = Some(edge);
            }
            weights.push(w);
        }

        Ok(EdgeWeights {
            weights,
            first_negative,
        })
    }

    /// Returns the weight of `edge`.
    ///
    /// # Panics
    ///
    /// Panics if `edge` is not part of the graph the weights were collected for.
    #[must_use]
    #[inline]
    pub fn get(&self, edge: EdgeId) -> f64 {
        self.weights[edge.index()]
    }

    /// Returns `true` if any edge has a negative weight.
    #[must_use]
    pub fn has_negative(&self) -> bool {
        self.first_negative.is_some()
    }

    /// Fails with [`Error::NegativeWeight`] naming the first negative edge, if any.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeWeight`] when a negative weight is present.
    pub fn require_non_negative(&self) -> Result<()> {
        match self.first_negative {
            Some(edge) => Err(Error::NegativeWeight {
                edge,
                weight: self.get(edge),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    fn index(edges: &[(usize, usize, f64)]) -> (DirectedGraph<(), f64>, AdjacencyIndex) {
        let graph = DirectedGraph::from_weighted_edges(3, edges).unwrap();
        let index = AdjacencyIndex::build(&graph, true).unwrap();
        (graph, index)
    }

    #[test]
    fn test_collect_and_lookup() {
        let (graph, index) = index(&[(0, 1, 2.0), (1, 2, 0.5)]);
        let weights = EdgeWeights::collect(&index, |e| graph.weight(e)).unwrap();

        assert_eq!(weights.get(EdgeId::new(1)), 0.5);
        assert!(!weights.has_negative());
        assert!(weights.require_non_negative().is_ok());
    }

    #[test]
    fn test_negative_weight_tracked() {
        let (graph, index) = index(&[(0, 1, 2.0), (1, 2, -1.0), (2, 0, -3.0)]);
        let weights = EdgeWeights::collect(&index, |e| graph.weight(e)).unwrap();

        assert!(weights.has_negative());
        assert_eq!(
            weights.require_non_negative(),
            Err(Error::NegativeWeight {
                edge: EdgeId::new(1),
                weight: -1.0
            })
        );
    }

    #[test]
    fn test_non_finite_rejected() {
        let (_graph, index) = index(&[(0, 1, 1.0), (1, 2, 1.0)]);
        let result = EdgeWeights::collect(&index, |e| {
            if e.index() == 1 {
                f64::INFINITY
            } else {
                1.0
            }
        });

        assert!(matches!(
            result,
            Err(Error::InvalidWeight { edge, .. }) if edge == EdgeId::new(1)
        ));
    }

    #[test]
    fn test_unit_weight() {
        let (_graph, index) = index(&[(0, 1, 7.0)]);
        let weights = EdgeWeights::collect(&index, unit_weight).unwrap();
        assert_eq!(weights.get(EdgeId::new(0)), 1.0);
    }
}
