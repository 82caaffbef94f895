//! Top-k sentence selection
//!
//! Picks the highest-scoring sentences and restores document order.

use crate::pagerank::PageRankResult;
use crate::types::{SelectedSentence, Sentence, SummarizerConfig};

/// Top-k selector over centrality scores
#[derive(Debug, Clone)]
pub struct SentenceSelector {
    /// Fraction of sentences to keep when no explicit count is set
    ratio: f64,
    /// Explicit number of sentences to keep
    max_sentences: Option<usize>,
}

impl Default for SentenceSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSelector {
    /// Create a new selector keeping 20% of sentences
    pub fn new() -> Self {
        Self {
            ratio: 0.2,
            max_sentences: None,
        }
    }

    /// Create a selector from the summarizer config
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            ratio: config.ratio,
            max_sentences: config.max_sentences,
        }
    }

    /// Set the fraction of sentences to keep
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Set an explicit number of sentences to keep
    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.max_sentences = Some(n);
        self
    }

    /// Number of sentences to keep from a document of `num_sentences`
    ///
    /// `max(1, min(requested, n))`, where `requested` is the explicit count
    /// if set and `ceil(n * ratio)` otherwise.
    pub fn target_count(&self, num_sentences: usize) -> usize {
        let requested = self
            .max_sentences
            .unwrap_or_else(|| (num_sentences as f64 * self.ratio).ceil() as usize);
        requested.min(num_sentences).max(1)
    }

    /// Indices of the top-k sentences, in ascending document order
    pub fn select_indices(&self, ranks: &PageRankResult) -> Vec<usize> {
        let n = ranks.scores.len();
        if n == 0 {
            return Vec::new();
        }

        let mut chosen = ranks.ranking();
        chosen.truncate(self.target_count(n));
        chosen.sort_unstable();
        chosen
    }

    /// Select the top-k sentences with their scores, in document order
    pub fn select(&self, sentences: &[Sentence], ranks: &PageRankResult) -> Vec<SelectedSentence> {
        self.select_indices(ranks)
            .into_iter()
            .filter_map(|i| {
                sentences.get(i).map(|s| SelectedSentence {
                    index: s.index,
                    text: s.text.clone(),
                    score: ranks.score(i as u32),
                })
            })
            .collect()
    }
}
