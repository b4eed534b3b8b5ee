//! Link analysis: PageRank and HITS.
//!
//! Both are power iterations that stop once the L1 change between successive score
//! vectors drops below the configured `epsilon`. Running out of iterations is reported
//! on the result, never as an error. See [`crate::config`] for the knobs.

mod hits;
mod pagerank;

pub use hits::{get_hits_scores, get_hits_scores_with, HitsResults};
pub use pagerank::{get_pageranks, get_pageranks_with, PagerankResults};
