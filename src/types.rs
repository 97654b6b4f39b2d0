//! Core types for rapid_relevance
//!
//! This module defines the document record consumed by both pipelines and the
//! configuration for the PageRank computation.

use serde::{Deserialize, Serialize};

use crate::errors::{RankError, Result};

/// Opaque document identifier (typically a URI)
pub type DocId = String;

/// A crawled document
///
/// Produced by an external crawler/parser. The engines only read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier
    pub id: DocId,
    /// Outbound link targets, in page order
    #[serde(default)]
    pub links: Vec<DocId>,
    /// Word tokens, in page order (duplicates are significant for TF)
    #[serde(default)]
    pub words: Vec<String>,
}

impl Document {
    /// Create a new document
    pub fn new<L, W>(
        id: impl Into<DocId>,
        links: impl IntoIterator<Item = L>,
        words: impl IntoIterator<Item = W>,
    ) -> Self
    where
        L: Into<DocId>,
        W: Into<String>,
    {
        Self {
            id: id.into(),
            links: links.into_iter().map(Into::into).collect(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

/// Configuration for PageRank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Damping factor: probability of following a link rather than teleporting
    pub decay: f64,
    /// Convergence threshold on the per-document absolute change
    pub epsilon: f64,
    /// Iteration limit; the last ranks are returned if it is reached
    pub max_iterations: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            decay: 0.85,
            epsilon: 1e-6,
            max_iterations: 100,
        }
    }
}

impl RankConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Set the convergence threshold
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the iteration limit
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Parse a config from JSON; omitted fields take their defaults
    ///
    /// ```json
    /// { "decay": 0.85, "epsilon": 1e-10, "max_iterations": 200 }
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every parameter is in range
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.decay) {
            return Err(RankError::invalid(
                "decay",
                format!("must be in [0, 1], got {}", self.decay),
            ));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(RankError::invalid(
                "epsilon",
                format!("must be a positive finite number, got {}", self.epsilon),
            ));
        }
        if self.max_iterations == 0 {
            return Err(RankError::invalid("max_iterations", "must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new("a", ["b", "c"], ["hello", "hello"]);
        assert_eq!(doc.id, "a");
        assert_eq!(doc.links, vec!["b", "c"]);
        assert_eq!(doc.words.len(), 2);
    }

    #[test]
    fn test_document_json_defaults() {
        let doc: Document = serde_json::from_str(r#"{ "id": "x" }"#).unwrap();
        assert!(doc.links.is_empty());
        assert!(doc.words.is_empty());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(RankConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_decay() {
        for decay in [-0.1, 1.5, f64::NAN] {
            let err = RankConfig::new().with_decay(decay).validate().unwrap_err();
            assert!(matches!(err, RankError::InvalidConfig { field: "decay", .. }));
        }
    }

    #[test]
    fn test_invalid_epsilon_and_iterations() {
        assert!(RankConfig::new().with_epsilon(0.0).validate().is_err());
        assert!(RankConfig::new().with_epsilon(f64::INFINITY).validate().is_err());
        assert!(RankConfig::new().with_max_iterations(0).validate().is_err());
    }

    #[test]
    fn test_from_json() {
        let config = RankConfig::from_json(r#"{ "epsilon": 1e-10 }"#).unwrap();
        assert_eq!(config.decay, 0.85);
        assert_eq!(config.epsilon, 1e-10);
        assert_eq!(config.max_iterations, 100);

        assert!(matches!(
            RankConfig::from_json("{ not json"),
            Err(RankError::ConfigParse(_))
        ));
        assert!(matches!(
            RankConfig::from_json(r#"{ "decay": 2.0 }"#),
            Err(RankError::InvalidConfig { .. })
        ));
    }
}
