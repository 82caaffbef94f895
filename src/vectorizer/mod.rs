//! Lexical vectorization
//!
//! Turns tokenized sentences into TF-IDF weight vectors over a per-call
//! vocabulary.

pub mod tfidf;
