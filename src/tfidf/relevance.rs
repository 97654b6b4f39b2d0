//! Query-to-document relevance
//!
//! [`RelevanceEngine`] precomputes one [`DocumentVector`] per document and
//! answers cosine-similarity queries against them.

use super::stats::{IdfTable, TermStatistics};
use super::vector::{DocumentVector, QueryVector};
use crate::errors::{RankError, Result};
use crate::types::{DocId, Document};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// TF-IDF cosine relevance over a fixed corpus
#[derive(Debug, Clone)]
pub struct RelevanceEngine {
    idf: IdfTable,
    vectors: FxHashMap<DocId, DocumentVector>,
}

impl RelevanceEngine {
    /// Compute IDF scores and every document's TF-IDF vector
    ///
    /// Fails with [`RankError::EmptyCorpus`] when `documents` is empty.
    pub fn new(documents: &[Document]) -> Result<Self> {
        if documents.is_empty() {
            return Err(RankError::EmptyCorpus);
        }
        trace_stage!("tfidf");

        let idf = TermStatistics::compute_idf(documents);

        #[cfg(feature = "parallel")]
        let vectors = documents
            .par_iter()
            .map(|doc| (doc.id.clone(), DocumentVector::from_tokens(&doc.words, &idf)))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let vectors = documents
            .iter()
            .map(|doc| (doc.id.clone(), DocumentVector::from_tokens(&doc.words, &idf)))
            .collect();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            documents = documents.len(),
            vocabulary = idf.len(),
            "tf-idf vectors built"
        );

        Ok(Self { idf, vectors })
    }

    /// Cosine similarity between `query` and document `id`, in `[0, 1]`
    ///
    /// Query terms unknown to the corpus are ignored. Returns 0 when the
    /// document or the query has no weighted terms. Fails with
    /// [`RankError::UnknownDocument`] if `id` wasn't in the corpus.
    pub fn relevance<S: AsRef<str>>(&self, query: &[S], id: &str) -> Result<f64> {
        let doc = self
            .vectors
            .get(id)
            .ok_or_else(|| RankError::UnknownDocument(id.to_string()))?;
        Ok(self.query_vector(query).similarity(doc))
    }

    /// Build a reusable query vector against this corpus's IDF table
    pub fn query_vector<'q, S: AsRef<str>>(&self, query: &'q [S]) -> QueryVector<'q> {
        QueryVector::new(query, &self.idf)
    }

    /// Get the top N documents by relevance to `query`, ties broken by id
    ///
    /// Documents with zero relevance are left out.
    pub fn top_n<S: AsRef<str>>(&self, query: &[S], n: usize) -> Vec<(&str, f64)> {
        let query = self.query_vector(query);
        if query.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<_> = self
            .vectors
            .iter()
            .map(|(id, doc)| (id.as_str(), query.similarity(doc)))
            .filter(|&(_, score)| score > 0.0)
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(n);
        ranked
    }

    /// TF-IDF vector of a document
    pub fn document_vector(&self, id: &str) -> Option<&DocumentVector> {
        self.vectors.get(id)
    }

    /// IDF score of a term, if it occurs in the corpus
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// The corpus IDF table
    pub fn idf_table(&self) -> &IdfTable {
        &self.idf
    }

    /// Number of distinct terms in the corpus
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Always false for a constructed engine
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}
