//! Unicode-aware word tokenization
//!
//! Produces the significant word tokens of a sentence: lowercased, with
//! every non-letter/non-digit character treated as a separator, and with
//! single-character tokens and stopwords removed.

use super::splitter::is_space;
use super::stopwords::StopwordFilter;
use crate::errors::Result;
use crate::types::SummarizerConfig;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Letters (`L*`) and numbers (`N*`); combining marks are separators
fn is_word_char(c: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(c),
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | DecimalNumber
            | LetterNumber
            | OtherNumber
    )
}

/// Sentence tokenizer backed by a stopword filter
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stopwords: StopwordFilter,
}

impl Tokenizer {
    /// Create a tokenizer for a language's stopword table
    pub fn new(language: &str) -> Result<Self> {
        Ok(Self {
            stopwords: StopwordFilter::new(language)?,
        })
    }

    /// Create a tokenizer with an explicit stopword filter
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Create a tokenizer from a summarizer config (language + extra stopwords)
    pub fn from_config(config: &SummarizerConfig) -> Result<Self> {
        let mut stopwords = StopwordFilter::new(&config.language)?;
        stopwords.add_stopwords(config.stopwords.as_slice());
        Ok(Self { stopwords })
    }

    /// Access the stopword filter
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Tokenize a sentence into significant, normalized word tokens
    ///
    /// May return an empty list (punctuation-only or all-stopword input).
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        let cleaned: String = sentence
            .to_lowercase()
            .chars()
            .map(|c| {
                if is_word_char(c) || is_space(c) {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        cleaned
            .split(is_space)
            .filter(|word| word.chars().count() > 1 && !self.stopwords.is_stopword(word))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turkish() -> Tokenizer {
        Tokenizer::new("tr").unwrap()
    }

    #[test]
    fn test_lowercase_and_punctuation() {
        let tokens = turkish().tokenize("Ali, EVE gitti!");
        assert_eq!(tokens, vec!["ali", "eve", "gitti"]);
    }

    #[test]
    fn test_stopwords_and_short_tokens_removed() {
        // "ve" and "bir" are stopwords, "a" is a single character
        let tokens = turkish().tokenize("Kedi ve bir köpek a oynadı.");
        assert_eq!(tokens, vec!["kedi", "köpek", "oynadı"]);
    }

    #[test]
    fn test_unicode_letters_and_digits_kept() {
        let tokens = turkish().tokenize("Şehirde 2024 yılında ÇOK güzel günler");
        assert_eq!(tokens, vec!["şehirde", "2024", "yılında", "güzel", "günler"]);
    }

    #[test]
    fn test_symbols_split_words() {
        let tokenizer = Tokenizer::with_stopwords(StopwordFilter::empty());
        let tokens = tokenizer.tokenize("e-posta/adres_kutusu");
        assert_eq!(tokens, vec!["posta", "adres", "kutusu"]);
    }

    #[test]
    fn test_combining_marks_split_words() {
        let tokenizer = Tokenizer::with_stopwords(StopwordFilter::empty());
        // Devanagari vowel signs and Arabic harakat are marks, not letters
        assert!(tokenizer.tokenize("किताब").is_empty());
        assert!(tokenizer.tokenize("كَتَبَ").is_empty());
        assert_eq!(tokenizer.tokenize("كتاب جديد"), vec!["كتاب", "جديد"]);
    }

    #[test]
    fn test_letter_and_other_numbers_kept() {
        let tokenizer = Tokenizer::with_stopwords(StopwordFilter::empty());
        assert_eq!(tokenizer.tokenize("Ⅻ½ ٣٤"), vec!["ⅻ½", "٣٤"]);
    }

    #[test]
    fn test_empty_results() {
        let tokenizer = turkish();
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("!!! ... ???").is_empty());
        assert!(tokenizer.tokenize("ve ile için").is_empty());
    }

    #[test]
    fn test_deterministic() {
        let tokenizer = turkish();
        let text = "Aynı cümle her zaman aynı tokenları üretir.";
        assert_eq!(tokenizer.tokenize(text), tokenizer.tokenize(text));
    }

    #[test]
    fn test_from_config_extra_stopwords() {
        let config = SummarizerConfig::new().with_stopwords(["Kedi"]);
        let tokenizer = Tokenizer::from_config(&config).unwrap();
        assert_eq!(tokenizer.tokenize("kedi köpek"), vec!["köpek"]);
    }
}
