//! Sentence similarity graph
//!
//! This module builds the dense pairwise similarity matrix and its sparse
//! CSR form used by the rank scorer.

pub mod builder;
pub mod csr;
