//! Error types for rapid_summarizer
//!
//! Summarization itself is total; only configuration can be rejected.

use thiserror::Error;

/// Errors raised while building or parsing a summarizer configuration
#[derive(Debug, Error)]
pub enum SummarizerError {
    /// A configuration value is out of its valid range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// No stopword table exists for the requested language code
    #[error("unsupported stopword language: {0}")]
    UnsupportedLanguage(String),

    /// The configuration document could not be parsed
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl SummarizerError {
    /// Create an `InvalidConfig` error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an `UnsupportedLanguage` error
    pub fn unsupported_language(language: impl Into<String>) -> Self {
        Self::UnsupportedLanguage(language.into())
    }
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, SummarizerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SummarizerError::invalid_config("ratio must be in (0, 1], got 0");
        assert_eq!(
            err.to_string(),
            "invalid configuration: ratio must be in (0, 1], got 0"
        );

        let err = SummarizerError::unsupported_language("xx");
        assert_eq!(err.to_string(), "unsupported stopword language: xx");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SummarizerError = parse_err.into();
        assert!(matches!(err, SummarizerError::Json(_)));
    }
}
