//! # rapid_summarizer
//!
//! Unsupervised extractive summarization with TextRank-style sentence
//! ranking.
//!
//! The summary is a subset of the input's own sentences, chosen by PageRank
//! centrality over a TF-IDF cosine-similarity graph and returned in their
//! original order.
//!
//! ## Features
//!
//! - **Total**: every input, from an empty string up, yields a summary
//! - **Unicode-aware**: tokenization uses Unicode letter/digit classes
//! - **Deterministic**: no randomness and no state shared between calls
//! - **Observable**: optional `tracing` spans around every stage
//!
//! ```rust,ignore
//! use rapid_summarizer::{ExtractiveSummarizer, SummarizerConfig};
//!
//! let summarizer = ExtractiveSummarizer::with_config(
//!     SummarizerConfig::new().with_max_sentences(3),
//! )?;
//! let summary = summarizer.summarize(&text);
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod summarizer;
pub mod types;
pub mod vectorizer;

// Re-export commonly used types
pub use errors::{Result, SummarizerError};
pub use types::{SelectedSentence, Sentence, SummarizerConfig};

// Re-export main functionality
pub use graph::{builder::SimilarityMatrix, csr::CsrGraph, csr::TransitionMatrix};
pub use nlp::{splitter::split_sentences, stopwords::StopwordFilter, tokenizer::Tokenizer};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use summarizer::extractive::{ExtractiveSummarizer, SummaryResult};
pub use summarizer::selector::SentenceSelector;
pub use vectorizer::tfidf::{TermVector, TfIdfMatrix, Vocabulary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize `text` with the default configuration
///
/// Equivalent to `ExtractiveSummarizer::new()?.summarize(text)`.
pub fn summarize(text: &str) -> Result<String> {
    Ok(ExtractiveSummarizer::new()?.summarize(text))
}
