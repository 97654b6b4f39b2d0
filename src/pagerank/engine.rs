//! Id-keyed PageRank table
//!
//! [`PageRankEngine`] runs PageRank once at construction and keeps only the
//! resulting rank per document; the link graph is dropped afterwards.

use super::standard::StandardPageRank;
use crate::errors::{RankError, Result};
use crate::graph::builder::{LinkGraph, LinkGraphBuilder};
use crate::graph::csr::CsrGraph;
use crate::types::{DocId, Document, RankConfig};
use rustc_hash::FxHashMap;

/// Authority scores for a fixed corpus
#[derive(Debug, Clone)]
pub struct PageRankEngine {
    ranks: FxHashMap<DocId, f64>,
    iterations: usize,
    delta: f64,
    converged: bool,
}

impl PageRankEngine {
    /// Compute ranks for a link graph
    ///
    /// Fails on an empty graph or an out-of-range parameter.
    pub fn new(graph: LinkGraph, decay: f64, epsilon: f64, max_iterations: usize) -> Result<Self> {
        let config = RankConfig {
            decay,
            epsilon,
            max_iterations,
        };
        Self::with_config(graph, &config)
    }

    /// Compute ranks for a link graph using a [`RankConfig`]
    pub fn with_config(graph: LinkGraph, config: &RankConfig) -> Result<Self> {
        config.validate()?;
        if graph.is_empty() {
            return Err(RankError::EmptyCorpus);
        }
        trace_stage!("pagerank");

        let csr = CsrGraph::from_link_graph(&graph);
        drop(graph);

        let result = StandardPageRank::from_config(config).run(&csr);
        let ranks = csr.ids.into_iter().zip(result.scores).collect();

        Ok(Self {
            ranks,
            iterations: result.iterations,
            delta: result.delta,
            converged: result.converged,
        })
    }

    /// Build the link graph for `documents` and rank it
    pub fn from_documents(documents: &[Document], config: &RankConfig) -> Result<Self> {
        Self::with_config(LinkGraphBuilder::build(documents), config)
    }

    /// Rank of a document
    ///
    /// Fails with [`RankError::UnknownDocument`] if `id` wasn't in the graph.
    pub fn score(&self, id: &str) -> Result<f64> {
        self.get(id).ok_or_else(|| RankError::UnknownDocument(id.to_string()))
    }

    /// Rank of a document, if it is known
    pub fn get(&self, id: &str) -> Option<f64> {
        self.ranks.get(id).copied()
    }

    /// Get the top N documents by rank, ties broken by id
    pub fn top_n(&self, n: usize) -> Vec<(&str, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }

    /// Iterate over `(id, rank)` pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.ranks.iter().map(|(id, &rank)| (id.as_str(), rank))
    }

    /// Number of ranked documents
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Always false for a constructed engine
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Iterations performed
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the ranks converged before the iteration limit
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Largest per-document change in the final iteration
    pub fn delta(&self) -> f64 {
        self.delta
    }
}
