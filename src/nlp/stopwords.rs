//! Stopword filtering
//!
//! Turkish ships with a built-in table; other languages are loaded from the
//! `stop-words` crate. A filter is immutable once built and is shared
//! read-only by every summarization call.

use crate::errors::{Result, SummarizerError};
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Built-in Turkish stopwords
pub const TURKISH_STOPWORDS: &[&str] = &[
    "acaba", "ama", "aslında", "az", "bazı", "belki", "biri", "birkaç", "birçok", "böyle",
    "bu", "çok", "çünkü", "da", "daha", "de", "defa", "diye", "eğer", "en", "gibi", "hem",
    "hep", "hepsi", "her", "hiç", "ile", "ise", "için", "kadar", "ki", "kim", "mı", "mi",
    "mu", "mü", "nasıl", "ne", "neden", "nerde", "nerede", "nereye", "niçin", "niye", "o",
    "sanki", "siz", "şey", "sonra", "şu", "tüm", "ve", "veya", "ya", "yani", "olarak",
    "üzere", "fakat", "ancak", "herhangi", "hiçbir", "herkes", "hemen", "artık", "yine",
    "bile", "bazen", "özellikle", "olsa", "olduğu", "olduğunu", "olan", "olanlar", "olabilir",
    "olmak", "etmek", "yapmak", "var", "yok", "göre", "kendi", "kendisi", "arada", "aynı",
    "bana", "bende", "beni", "benim", "biz", "bizim", "sizin", "sizi", "sizde", "sana",
    "seni", "senin", "onun", "onlar", "onları", "onların", "şimdi", "bugün", "yarın", "dün",
    "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz", "on",
];

/// A filter for removing stopwords from token streams
///
/// Lookups expect already-lowercased tokens.
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create a stopword filter for the given language
    ///
    /// Supported languages: tr, en, de, fr, es, it, pt, nl, ru, sv, no, da,
    /// fi, hu, pl, ar
    pub fn new(language: &str) -> Result<Self> {
        let stopwords = Self::load_stopwords(language)
            .ok_or_else(|| SummarizerError::unsupported_language(language))?;
        Ok(Self { stopwords })
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Whether a stopword table exists for `language`
    pub fn is_supported(language: &str) -> bool {
        Self::language_table(language).is_some()
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check if a token is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: &str) -> Option<FxHashSet<String>> {
        let words = match Self::language_table(language)? {
            Table::Turkish => TURKISH_STOPWORDS.iter().map(|s| s.to_string()).collect(),
            Table::External(lang) => get(lang).iter().map(|s| s.to_string()).collect(),
        };
        Some(words)
    }

    fn language_table(language: &str) -> Option<Table> {
        let lang = match language.to_lowercase().as_str() {
            "tr" | "turkish" => return Some(Table::Turkish),
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => return None,
        };
        Some(Table::External(lang))
    }
}

enum Table {
    Turkish,
    External(LANGUAGE),
}
