//! Sparse TF-IDF vectors
//!
//! Only non-zero dimensions are stored. The Euclidean norm is computed once
//! when a vector is built.

use super::stats::{IdfTable, TermStatistics};
use rustc_hash::FxHashMap;

/// L2 norm of a sparse vector's values
fn l2_norm<'a>(values: impl Iterator<Item = &'a f64>) -> f64 {
    values.map(|v| v * v).sum::<f64>().sqrt()
}

/// TF-IDF vector of one document
#[derive(Debug, Clone, Default)]
pub struct DocumentVector {
    /// Non-zero dimensions: term -> TF * IDF
    weights: FxHashMap<String, f64>,
    /// L2 norm of the vector
    norm: f64,
}

impl DocumentVector {
    /// Create from a map of weights
    pub fn from_weights(weights: FxHashMap<String, f64>) -> Self {
        let norm = l2_norm(weights.values());
        Self { weights, norm }
    }

    /// Build the vector for a token sequence against a corpus IDF table
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S], idf: &IdfTable) -> Self {
        let weights = TermStatistics::compute_tf(tokens)
            .into_iter()
            .filter_map(|(term, tf)| idf.get(term).map(|w| (term.to_string(), tf * w)))
            .collect();
        Self::from_weights(weights)
    }

    /// Weight of a term (0 if absent)
    pub fn weight(&self, term: &str) -> f64 {
        self.weights.get(term).copied().unwrap_or(0.0)
    }

    /// Cached L2 norm
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Iterate over non-zero dimensions
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(t, &w)| (t.as_str(), w))
    }

    /// Number of stored dimensions
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// TF-IDF vector of a query, borrowing the query's tokens
#[derive(Debug, Clone, Default)]
pub struct QueryVector<'q> {
    weights: FxHashMap<&'q str, f64>,
    norm: f64,
}

impl<'q> QueryVector<'q> {
    /// Build a query vector; terms unknown to the IDF table are dropped
    pub fn new<S: AsRef<str>>(tokens: &'q [S], idf: &IdfTable) -> Self {
        let weights: FxHashMap<&'q str, f64> = TermStatistics::compute_tf(tokens)
            .into_iter()
            .filter_map(|(term, tf)| idf.get(term).map(|w| (term, tf * w)))
            .collect();
        let norm = l2_norm(weights.values());
        Self { weights, norm }
    }

    /// L2 norm
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// Check if no query term is known to the corpus
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Cosine similarity with a document, in `[0, 1]`
    ///
    /// Cost is proportional to the number of distinct query terms.
    pub fn similarity(&self, doc: &DocumentVector) -> f64 {
        let dot = self
            .weights
            .iter()
            .map(|(term, w)| w * doc.weight(term))
            .sum::<f64>();
        cosine(dot, doc.norm, self.norm)
    }
}

/// Cosine from a dot product and two norms; 0 when either norm is 0
fn cosine(dot: f64, a_norm: f64, b_norm: f64) -> f64 {
    if a_norm == 0.0 || b_norm == 0.0 {
        return 0.0;
    }
    (dot / (a_norm * b_norm)).clamp(0.0, 1.0)
}
