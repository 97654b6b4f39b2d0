//! PageRank algorithms
//!
//! [`standard`] runs power iteration over a [`CsrGraph`](crate::graph::csr::CsrGraph);
//! [`engine`] wraps it behind an id-keyed lookup table.

pub mod engine;
pub mod standard;

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Largest per-node change in the final iteration
    pub delta: f64,
    /// Whether the algorithm converged before the iteration limit
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }
}
