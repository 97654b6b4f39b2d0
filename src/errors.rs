//! Error types
//!
//! Every fallible operation in the crate returns [`Result`]. Errors are local
//! to the call that raised them; the engines' tables are never left partially
//! built.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, RankError>;

/// Errors raised while building or querying the ranking engines
#[derive(Debug, Error)]
pub enum RankError {
    /// An engine was constructed from zero documents
    #[error("cannot build a ranking over an empty corpus")]
    EmptyCorpus,

    /// A query named a document that was not part of the corpus at construction
    #[error("document not found in corpus: {0}")]
    UnknownDocument(String),

    /// A configuration value is out of range
    #[error("invalid configuration for `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    /// A JSON configuration could not be parsed
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl RankError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}
