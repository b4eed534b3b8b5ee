//! Convergence configuration for the iterative link-analysis algorithms.
//!
//! PageRank and HITS iterate until the L1 change between successive score vectors
//! drops below `epsilon`, or until `max_iterations` rounds have run. Hitting the cap is
//! not an error: the best estimate is returned and `converged()` on the result is
//! `false`.

use crate::{error::invalid_parameter, Result};

/// Configuration for [`get_pageranks_with`](crate::algorithms::get_pageranks_with).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageRankConfig {
    /// Damping probability of following an out-link (default: 0.85)
    pub alpha: f64,
    /// L1 convergence threshold between successive score vectors (default: 0.001)
    pub epsilon: f64,
    /// Safety cap on the number of power iterations (default: 1000)
    pub max_iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            alpha: 0.85,
            epsilon: 0.001,
            max_iterations: 1000,
        }
    }
}

impl PageRankConfig {
    /// Creates a configuration with the given damping and threshold and the default cap.
    #[must_use]
    pub fn new(alpha: f64, epsilon: f64) -> Self {
        Self {
            alpha,
            epsilon,
            ..Self::default()
        }
    }

    /// Creates a configuration converging to a tight tolerance
    ///
    /// Uses `epsilon = 1e-9` and allows up to 10 000 iterations.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            alpha: 0.85,
            epsilon: 1e-9,
            max_iterations: 10_000,
        }
    }

    /// Creates a configuration for quick, coarse estimates
    #[must_use]
    pub fn fast() -> Self {
        Self {
            alpha: 0.85,
            epsilon: 0.01,
            max_iterations: 100,
        }
    }

    /// Checks that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter) if `alpha` is
    /// outside `[0, 1]`, `epsilon` is not finite and positive, or `max_iterations` is 0.
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(invalid_parameter!("alpha must be in [0, 1], got {}", self.alpha));
        }
        validate_convergence(self.epsilon, self.max_iterations)
    }
}

/// Configuration for [`get_hits_scores_with`](crate::algorithms::get_hits_scores_with).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitsConfig {
    /// L1 convergence threshold over hub plus authority changes (default: 0.001)
    pub epsilon: f64,
    /// Safety cap on the number of power iterations (default: 1000)
    pub max_iterations: usize,
}

impl Default for HitsConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.001,
            max_iterations: 1000,
        }
    }
}

impl HitsConfig {
    /// Creates a configuration converging to a tight tolerance
    #[must_use]
    pub fn strict() -> Self {
        Self {
            epsilon: 1e-9,
            max_iterations: 10_000,
        }
    }

    /// Creates a configuration for quick, coarse estimates
    #[must_use]
    pub fn fast() -> Self {
        Self {
            epsilon: 0.01,
            max_iterations: 100,
        }
    }

    /// Checks that every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`](crate::Error::InvalidParameter) if `epsilon` is
    /// not finite and positive, or `max_iterations` is 0.
    pub fn validate(&self) -> Result<()> {
        validate_convergence(self.epsilon, self.max_iterations)
    }
}

fn validate_convergence(epsilon: f64, max_iterations: usize) -> Result<()> {
    if !epsilon.is_finite() || epsilon <= 0.0 {
        return Err(invalid_parameter!(
            "epsilon must be finite and > 0, got {}",
            epsilon
        ));
    }
    if max_iterations == 0 {
        return Err(invalid_parameter!("max_iterations must be > 0"));
    }
    Ok(())
}
