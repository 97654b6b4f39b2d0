//! Link graph builder
//!
//! Converts a set of documents into an unweighted, directed graph in
//! adjacency-set form. The graph is self-contained: links to documents
//! outside the corpus and self-links are dropped.

use crate::types::{DocId, Document};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Adjacency sets keyed by document id
///
/// Every document of the corpus is a key exactly once, even when its
/// neighbor set is empty (a dangling node).
pub type LinkGraph = FxHashMap<DocId, FxHashSet<DocId>>;

/// Corpus size above which neighbor filtering runs in parallel
#[cfg_attr(not(feature = "parallel"), allow(dead_code))]
const PARALLEL_THRESHOLD: usize = 1000;

/// Builds a [`LinkGraph`] from a document set
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkGraphBuilder;

impl LinkGraphBuilder {
    /// Build the link graph for a document set
    ///
    /// Never fails; malformed or external links are silently dropped.
    pub fn build(documents: &[Document]) -> LinkGraph {
        let known: FxHashSet<&str> = documents.iter().map(|d| d.id.as_str()).collect();

        #[cfg(feature = "parallel")]
        if documents.len() >= PARALLEL_THRESHOLD {
            return documents
                .par_iter()
                .map(|doc| (doc.id.clone(), Self::neighbors(doc, &known)))
                .collect();
        }

        Self::build_sequential(documents, &known)
    }

    fn build_sequential(documents: &[Document], known: &FxHashSet<&str>) -> LinkGraph {
        let mut graph = FxHashMap::with_capacity_and_hasher(documents.len(), Default::default());
        for doc in documents {
            graph.insert(doc.id.clone(), Self::neighbors(doc, known));
        }
        graph
    }

    /// Outbound links of `doc` that stay inside the corpus, minus self-links
    fn neighbors(doc: &Document, known: &FxHashSet<&str>) -> FxHashSet<DocId> {
        doc.links
            .iter()
            .filter(|link| **link != doc.id && known.contains(link.as_str()))
            .cloned()
            .collect()
    }

    /// Total number of directed edges
    pub fn edge_count(graph: &LinkGraph) -> usize {
        graph.values().map(FxHashSet::len).sum()
    }

    /// Ids of documents with no outbound edges
    pub fn dangling(graph: &LinkGraph) -> Vec<&str> {
        graph
            .iter()
            .filter(|(_, links)| links.is_empty())
            .map(|(id, _)| id.as_str())
            .collect()
    }
}
