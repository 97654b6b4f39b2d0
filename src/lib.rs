//! # rapid_relevance
//!
//! Relevance signals for a fixed corpus of crawled documents.
//!
//! Two independent pipelines are provided:
//!
//! - **Authority**: documents are turned into a directed, self-contained link
//!   graph and ranked with PageRank ([`PageRankEngine`]).
//! - **Textual similarity**: documents are turned into sparse TF-IDF vectors
//!   and compared against a query by cosine similarity ([`RelevanceEngine`]).
//!
//! Both engines are built once from a snapshot of the corpus and are
//! read-only afterwards, so they can be shared freely across threads.
//! Combining the two scores is left to the caller.
//!
//! ```rust
//! use rapid_relevance::{Document, PageRankEngine, RankConfig, RelevanceEngine};
//!
//! let docs = vec![
//!     Document::new("a", ["b"], ["rust", "search"]),
//!     Document::new("b", ["a"], ["rust", "graph"]),
//! ];
//!
//! let ranks = PageRankEngine::from_documents(&docs, &RankConfig::default()).unwrap();
//! let text = RelevanceEngine::new(&docs).unwrap();
//!
//! assert!((ranks.score("a").unwrap() - 0.5).abs() < 1e-6);
//! assert!(text.relevance(&["search"], "a").unwrap() > 0.0);
//! ```

/// Enter a tracing span for an engine stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("rank_stage", stage = $name).entered();
    };
}

pub mod errors;
pub mod graph;
pub mod pagerank;
pub mod tfidf;
pub mod types;

// Re-export commonly used types
pub use errors::{RankError, Result};
pub use types::{DocId, Document, RankConfig};

// Re-export main functionality
pub use graph::{
    builder::{LinkGraph, LinkGraphBuilder},
    csr::CsrGraph,
};
pub use pagerank::{engine::PageRankEngine, standard::StandardPageRank, PageRankResult};
pub use tfidf::{
    relevance::RelevanceEngine,
    stats::{IdfTable, TermStatistics},
    vector::DocumentVector,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
