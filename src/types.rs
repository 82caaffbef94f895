//! Core types for rapid_summarizer
//!
//! This module defines the document model (sentences) and the summarizer
//! configuration shared by every stage.

use crate::errors::{Result, SummarizerError};
use crate::nlp::stopwords::StopwordFilter;
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence of the input document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, whitespace-collapsed and trimmed
    pub text: String,
    /// Sentence index within the document
    pub index: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }
}

/// A sentence chosen for the summary, with its centrality score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSentence {
    /// Sentence index within the document
    pub index: usize,
    /// The sentence text
    pub text: String,
    /// Centrality score from the rank scorer
    pub score: f64,
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for extractive summarization
///
/// Every field has a default, so a partial JSON object such as
/// `{"ratio": 0.5}` deserializes into a complete config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Fraction of sentences to keep, in (0, 1]
    pub ratio: f64,
    /// Explicit sentence count; overrides `ratio` when set
    #[serde(rename = "max", alias = "max_sentences")]
    pub max_sentences: Option<usize>,
    /// Damping factor for the rank scorer (typically 0.85)
    pub damping: f64,
    /// Convergence threshold on the L1 change between iterations
    pub tolerance: f64,
    /// Upper bound on power iterations
    pub max_iterations: usize,
    /// Language code of the stopword table (e.g., "tr", "en")
    pub language: String,
    /// Additional stopwords, extending the language table
    pub stopwords: Vec<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            ratio: 0.2,
            max_sentences: None,
            damping: 0.85,
            tolerance: 1e-6,
            max_iterations: 100,
            language: "tr".to_string(),
            stopwords: Vec::new(),
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.ratio > 0.0 && self.ratio <= 1.0) {
            return Err(SummarizerError::invalid_config(format!(
                "ratio must be in (0, 1], got {}",
                self.ratio
            )));
        }

        if self.max_sentences == Some(0) {
            return Err(SummarizerError::invalid_config("max must be > 0"));
        }

        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummarizerError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(SummarizerError::invalid_config(format!(
                "tolerance must be a positive finite number, got {}",
                self.tolerance
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizerError::invalid_config("max_iterations must be > 0"));
        }

        if !StopwordFilter::is_supported(&self.language) {
            return Err(SummarizerError::unsupported_language(&self.language));
        }

        Ok(())
    }

    /// Builder method: set the ratio of sentences to keep
    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Builder method: set an explicit sentence count
    pub fn with_max_sentences(mut self, max: usize) -> Self {
        self.max_sentences = Some(max);
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set the stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add extra stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }
}
