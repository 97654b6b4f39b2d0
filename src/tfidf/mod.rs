//! TF-IDF relevance
//!
//! Term statistics are computed once over the corpus; each document is then
//! stored as a sparse TF-IDF vector with its norm cached, so a query costs
//! time proportional to its own length.

pub mod relevance;
pub mod stats;
pub mod vector;
