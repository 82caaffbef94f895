//! Extractive summarization pipeline
//!
//! text -> sentences -> tokens -> TF-IDF vectors -> similarity matrix ->
//! PageRank scores -> top-k sentences in document order.

use super::selector::SentenceSelector;
use crate::errors::Result;
use crate::graph::builder::SimilarityMatrix;
use crate::graph::csr::CsrGraph;
use crate::nlp::splitter::{is_space, split_sentences};
use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::PageRankResult;
use crate::types::{SelectedSentence, Sentence, SummarizerConfig};
use crate::vectorizer::tfidf::TfIdfMatrix;
use serde::Serialize;

/// Enter a tracing span for a summarizer stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarizer_stage", stage = $name).entered();
    };
}

/// Outcome of one summarization call, including ranking diagnostics
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    /// Selected sentences joined with single spaces
    pub summary: String,
    /// Selected sentences in document order
    pub sentences: Vec<SelectedSentence>,
    /// Number of sentences in the input
    pub num_sentences: usize,
    /// Number of sentences kept
    pub k: usize,
    /// Centrality scores, one per input sentence
    pub scores: Vec<f64>,
    /// Power iterations performed (0 when ranking was skipped)
    pub iterations: usize,
    /// Final L1 change between iterations
    pub delta: f64,
    /// Whether the power iteration met the tolerance
    pub converged: bool,
}

impl SummaryResult {
    fn empty() -> Self {
        Self {
            summary: String::new(),
            sentences: Vec::new(),
            num_sentences: 0,
            k: 0,
            scores: Vec::new(),
            iterations: 0,
            delta: 0.0,
            converged: true,
        }
    }
}

/// Unsupervised extractive summarizer (TF-IDF + sentence-graph PageRank)
///
/// Each call is a pure function of the text and the configuration; the
/// summarizer holds no mutable state and can be shared across threads.
///
/// # Scaling
///
/// Memory and time are O(N^2) in the number of sentences (dense similarity
/// matrix) and O(N * V) in vocabulary size. This suits article-length
/// documents, not book-length corpora.
#[derive(Debug, Clone)]
pub struct ExtractiveSummarizer {
    config: SummarizerConfig,
    tokenizer: Tokenizer,
}

impl ExtractiveSummarizer {
    /// Create a summarizer with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(SummarizerConfig::default())
    }

    /// Create a summarizer with a custom configuration
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        let tokenizer = Tokenizer::from_config(&config)?;
        Ok(Self { config, tokenizer })
    }

    /// The active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize `text`, returning only the summary string
    pub fn summarize(&self, text: &str) -> String {
        self.summarize_detailed(text).summary
    }

    /// Summarize `text`, returning the summary with ranking diagnostics
    pub fn summarize_detailed(&self, text: &str) -> SummaryResult {
        let sentences = {
            trace_stage!("split");
            split_sentences(text)
        };
        let n = sentences.len();

        #[cfg(feature = "tracing")]
        tracing::debug!(sentences = n, "split input");

        if n == 0 {
            return SummaryResult::empty();
        }

        if n <= 2 {
            // Ranking one or two sentences is meaningless; echo the input.
            let ranks = PageRankResult::uniform(n);
            let selected = sentences
                .into_iter()
                .map(|s| SelectedSentence {
                    score: ranks.score(s.index as u32),
                    index: s.index,
                    text: s.text,
                })
                .collect();
            return SummaryResult {
                summary: text.trim_matches(is_space).to_string(),
                sentences: selected,
                num_sentences: n,
                k: n,
                scores: ranks.scores,
                iterations: 0,
                delta: 0.0,
                converged: true,
            };
        }

        let ranks = self.rank(&sentences);

        let selected = {
            trace_stage!("select");
            SentenceSelector::from_config(&self.config).select(&sentences, &ranks)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(selected = selected.len(), total = n, "selected sentences");

        let summary = selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        SummaryResult {
            summary,
            k: selected.len(),
            sentences: selected,
            num_sentences: n,
            scores: ranks.scores,
            iterations: ranks.iterations,
            delta: ranks.delta,
            converged: ranks.converged,
        }
    }

    /// Score sentence centrality
    pub fn rank(&self, sentences: &[Sentence]) -> PageRankResult {
        let matrix = {
            trace_stage!("vectorize");
            let tokens: Vec<Vec<String>> = sentences
                .iter()
                .map(|s| self.tokenizer.tokenize(&s.text))
                .collect();
            TfIdfMatrix::from_token_lists(&tokens)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = matrix.num_rows(),
            vocabulary = matrix.num_terms(),
            "built tf-idf matrix"
        );

        let graph = {
            trace_stage!("graph");
            CsrGraph::from_similarity(&SimilarityMatrix::from_vectors(&matrix.rows))
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            edges = graph.num_edges(),
            dangling = graph.dangling_nodes().len(),
            "built similarity graph"
        );

        let ranks = {
            trace_stage!("rank");
            StandardPageRank::new()
                .with_damping(self.config.damping)
                .with_max_iterations(self.config.max_iterations)
                .with_threshold(self.config.tolerance)
                .run(&graph)
        };

        #[cfg(feature = "tracing")]
        {
            if ranks.converged {
                tracing::debug!(
                    iterations = ranks.iterations,
                    delta = ranks.delta,
                    "pagerank converged"
                );
            } else {
                tracing::warn!(
                    iterations = ranks.iterations,
                    delta = ranks.delta,
                    "pagerank hit max_iterations before converging"
                );
            }
        }

        ranks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarizer(config: SummarizerConfig) -> ExtractiveSummarizer {
        ExtractiveSummarizer::with_config(config).unwrap()
    }

    #[test]
    fn test_empty_text() {
        let result = ExtractiveSummarizer::new().unwrap().summarize_detailed("   ");

        assert_eq!(result.summary, "");
        assert_eq!(result.num_sentences, 0);
        assert_eq!(result.k, 0);
        assert!(result.sentences.is_empty());
    }

    #[test]
    fn test_single_sentence_unchanged() {
        let s = ExtractiveSummarizer::new().unwrap();
        assert_eq!(s.summarize("Tek bir cümle var."), "Tek bir cümle var.");
    }

    #[test]
    fn test_two_sentences_return_trimmed_input() {
        let s = ExtractiveSummarizer::new().unwrap();
        let text = "  İlk cümle burada.\n\n   İkinci cümle orada.  ";
        assert_eq!(s.summarize(text), text.trim());
    }

    #[test]
    fn test_short_input_keeps_every_sentence() {
        let result = ExtractiveSummarizer::new()
            .unwrap()
            .summarize_detailed("\u{FEFF}Bir elma. İki armut.\u{FEFF}");

        assert_eq!(result.summary, "Bir elma. İki armut.");
        assert_eq!(result.k, 2);
        assert_eq!(result.sentences.len(), 2);
    }

    #[test]
    fn test_ratio_one_keeps_everything() {
        let s = summarizer(SummarizerConfig::new().with_ratio(1.0));
        let text = "Ali eve gitti. Sonra yemek yedi. Ardından uyudu.";
        assert_eq!(s.summarize(text), text);
    }

    #[test]
    fn test_central_sentence_wins() {
        let text = "Kediler süt içer. \
                    Kediler ve köpekler süt ile mama yer. \
                    Köpekler mama yer. \
                    Uzay roketleri fırlatıldı.";
        let s = summarizer(SummarizerConfig::new().with_max_sentences(1));
        let result = s.summarize_detailed(text);

        assert_eq!(result.summary, "Kediler ve köpekler süt ile mama yer.");
        assert_eq!(result.sentences.len(), 1);
        assert_eq!(result.sentences[0].index, 1);
    }

    #[test]
    fn test_detailed_result_diagnostics() {
        let text = "Birinci cümle elma. İkinci cümle armut. Üçüncü cümle elma armut. Dördüncü kiraz.";
        let s = summarizer(SummarizerConfig::new().with_max_sentences(2));
        let result = s.summarize_detailed(text);

        assert_eq!(result.num_sentences, 4);
        assert_eq!(result.k, 2);
        assert_eq!(result.scores.len(), 4);
        assert!(result.iterations > 0 && result.iterations <= 100);
        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!(result.sentences.windows(2).all(|w| w[0].index < w[1].index));
    }

    #[test]
    fn test_all_stopword_sentences_do_not_panic() {
        let text = "Ve ile için. Ama ve. Bu şu o! Ne ki?";
        let s = summarizer(SummarizerConfig::new().with_max_sentences(2));
        let result = s.summarize_detailed(text);

        assert_eq!(result.sentences.len(), 2);
        // Fully disconnected graph: uniform scores, earliest sentences kept
        assert_eq!(result.summary, "Ve ile için. Ama ve.");
        assert!(result.scores.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SummarizerConfig::new().with_ratio(0.0);
        assert!(ExtractiveSummarizer::with_config(config).is_err());
    }

    #[test]
    fn test_summary_result_serializes() {
        let s = summarizer(SummarizerConfig::new().with_max_sentences(1));
        let result = s.summarize_detailed("Bir elma. İki elma armut. Üç kiraz.");
        let json = serde_json::to_value(&result).unwrap();

        assert!(json["summary"].is_string());
        assert_eq!(json["num_sentences"], 3);
        assert_eq!(json["k"], 1);
        assert_eq!(json["sentences"].as_array().unwrap().len(), 1);
    }
}
