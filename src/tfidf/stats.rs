//! Corpus-wide term statistics
//!
//! TF and IDF are computed with the same formulas for documents (at
//! construction) and queries (at lookup time).

use crate::types::Document;
use rustc_hash::{FxHashMap, FxHashSet};

/// Inverse document frequency per term
pub type IdfTable = FxHashMap<String, f64>;

/// TF and IDF computations
#[derive(Debug, Clone, Copy, Default)]
pub struct TermStatistics;

impl TermStatistics {
    /// Compute `ln(N / df)` for every term in the corpus
    ///
    /// `df` counts documents containing the term, so repeated occurrences
    /// within one document count once. A term present in every document
    /// scores 0.
    pub fn compute_idf(documents: &[Document]) -> IdfTable {
        let mut document_frequency: FxHashMap<&str, usize> = FxHashMap::default();
        for doc in documents {
            let distinct: FxHashSet<&str> = doc.words.iter().map(String::as_str).collect();
            for term in distinct {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        document_frequency
            .into_iter()
            .map(|(term, df)| (term.to_string(), (n / df as f64).ln()))
            .collect()
    }

    /// Term frequency of each distinct token: occurrences / sequence length
    ///
    /// An empty sequence has no terms and yields an empty map.
    pub fn compute_tf<S: AsRef<str>>(tokens: &[S]) -> FxHashMap<&str, f64> {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for token in tokens {
            *counts.entry(token.as_ref()).or_insert(0) += 1;
        }

        let len = tokens.len() as f64;
        counts
            .into_iter()
            .map(|(term, count)| (term, count as f64 / len))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, words: &[&str]) -> Document {
        Document::new(id, Vec::<String>::new(), words.iter().copied())
    }

    #[test]
    fn test_idf_everywhere_is_zero() {
        let docs = vec![doc("a", &["the", "cat"]), doc("b", &["the", "dog"])];
        let idf = TermStatistics::compute_idf(&docs);

        assert_eq!(idf["the"], 0.0);
    }

    #[test]
    fn test_idf_single_occurrence_is_ln_n() {
        let docs = vec![
            doc("a", &["cat", "cat", "cat"]),
            doc("b", &["dog"]),
            doc("c", &["dog", "bird"]),
        ];
        let idf = TermStatistics::compute_idf(&docs);

        assert!((idf["cat"] - 3.0_f64.ln()).abs() < 1e-12);
        assert!((idf["dog"] - 1.5_f64.ln()).abs() < 1e-12);
        assert_eq!(idf.len(), 3);
    }

    #[test]
    fn test_idf_empty_documents() {
        let docs = vec![doc("a", &[]), doc("b", &["x"])];
        let idf = TermStatistics::compute_idf(&docs);

        assert_eq!(idf.len(), 1);
        assert!((idf["x"] - 2.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_tf() {
        let tf = TermStatistics::compute_tf(&["a", "b", "a", "c"]);

        assert_eq!(tf.len(), 3);
        assert!((tf["a"] - 0.5).abs() < 1e-12);
        assert!((tf["b"] - 0.25).abs() < 1e-12);
        assert!((tf["c"] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_tf_owned_tokens() {
        let tokens = vec!["x".to_string(); 3];
        let tf = TermStatistics::compute_tf(&tokens);
        assert_eq!(tf["x"], 1.0);
    }

    #[test]
    fn test_tf_empty() {
        let tf = TermStatistics::compute_tf::<&str>(&[]);
        assert!(tf.is_empty());
    }
}
