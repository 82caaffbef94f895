//! Summarization components
//!
//! Provides extractive summarization: sentences are ranked by PageRank
//! centrality over a TF-IDF similarity graph and the top-k are returned in
//! document order.

pub mod extractive;
pub mod selector;
