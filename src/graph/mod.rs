//! Graph construction and representation
//!
//! This module turns a document set into a directed link graph and provides
//! a compact form of it for PageRank.

pub mod builder;
pub mod csr;
