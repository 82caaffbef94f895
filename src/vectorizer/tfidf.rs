//! Per-document TF-IDF vectorization
//!
//! Each sentence is a "document" for IDF purposes. The vocabulary is built
//! fresh for every call and dropped with the returned [`TfIdfMatrix`].

use rustc_hash::FxHashMap;

// ============================================================================
// Vocabulary
// ============================================================================

/// Token -> dense index mapping, assigned in first-occurrence order
#[derive(Debug, Default)]
pub struct Vocabulary {
    term_to_id: FxHashMap<String, u32>,
    terms: Vec<String>,
}

impl Vocabulary {
    /// Create a new empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or assign the index for a term
    pub fn intern(&mut self, term: &str) -> u32 {
        if let Some(&id) = self.term_to_id.get(term) {
            return id;
        }

        let id = self.terms.len() as u32;
        self.term_to_id.insert(term.to_string(), id);
        self.terms.push(term.to_string());
        id
    }

    /// Look up the index of a term
    pub fn get(&self, term: &str) -> Option<u32> {
        self.term_to_id.get(term).copied()
    }

    /// Get a term by its index
    pub fn term(&self, id: u32) -> Option<&str> {
        self.terms.get(id as usize).map(String::as_str)
    }

    /// Number of distinct terms (V)
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

// ============================================================================
// TermVector
// ============================================================================

/// A sparse row of the TF-IDF matrix
///
/// Entries are sorted by term index; absent indices are zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    entries: Vec<(u32, f64)>,
    norm: f64,
}

impl TermVector {
    /// Build from (term index, weight) pairs; zero weights are dropped
    pub fn from_entries(mut entries: Vec<(u32, f64)>) -> Self {
        entries.retain(|&(_, w)| w != 0.0);
        entries.sort_by_key(|&(id, _)| id);
        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        Self { entries, norm }
    }

    /// Weight of a term (zero if absent)
    pub fn get(&self, term: u32) -> f64 {
        self.entries
            .binary_search_by_key(&term, |&(id, _)| id)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    /// Non-zero entries in term order
    pub fn entries(&self) -> &[(u32, f64)] {
        &self.entries
    }

    /// Euclidean norm
    pub fn norm(&self) -> f64 {
        self.norm
    }

    /// True if every weight is zero
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product with another vector
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut dot = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_id, a_w) = self.entries[i];
            let (b_id, b_w) = other.entries[j];
            match a_id.cmp(&b_id) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot
    }

    /// Cosine similarity; 0 when either vector has zero norm
    pub fn cosine_similarity(&self, other: &TermVector) -> f64 {
        if self.norm == 0.0 || other.norm == 0.0 {
            return 0.0;
        }
        self.dot(other) / (self.norm * other.norm)
    }

    /// Expand into a dense row of length `dim`
    pub fn to_dense(&self, dim: usize) -> Vec<f64> {
        let mut row = vec![0.0; dim];
        for &(id, w) in &self.entries {
            if let Some(cell) = row.get_mut(id as usize) {
                *cell = w;
            }
        }
        row
    }
}

// ============================================================================
// TfIdfMatrix
// ============================================================================

/// N x V TF-IDF weights for one document
#[derive(Debug)]
pub struct TfIdfMatrix {
    /// Per-call vocabulary
    pub vocabulary: Vocabulary,
    /// Smoothed inverse document frequency per vocabulary entry
    pub idf: Vec<f64>,
    /// One row per sentence
    pub rows: Vec<TermVector>,
}

impl TfIdfMatrix {
    /// Vectorize tokenized sentences
    ///
    /// `tf = count / max(len, 1)`, `idf = ln((1 + N) / (1 + df)) + 1`.
    pub fn from_token_lists<S: AsRef<str>>(docs: &[Vec<S>]) -> Self {
        let mut vocabulary = Vocabulary::new();
        let id_docs: Vec<Vec<u32>> = docs
            .iter()
            .map(|doc| doc.iter().map(|t| vocabulary.intern(t.as_ref())).collect())
            .collect();

        let n = docs.len();
        let v = vocabulary.len();

        let mut df = vec![0u32; v];
        let counts: Vec<FxHashMap<u32, u32>> = id_docs
            .iter()
            .map(|doc| {
                let mut counts: FxHashMap<u32, u32> = FxHashMap::default();
                for &id in doc {
                    *counts.entry(id).or_insert(0) += 1;
                }
                for &id in counts.keys() {
                    df[id as usize] += 1;
                }
                counts
            })
            .collect();

        let idf: Vec<f64> = df
            .iter()
            .map(|&d| ((1.0 + n as f64) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let rows = id_docs
            .iter()
            .zip(counts)
            .map(|(doc, counts)| {
                let len = doc.len().max(1) as f64;
                let entries = counts
                    .into_iter()
                    .map(|(id, c)| (id, (c as f64 / len) * idf[id as usize]))
                    .collect();
                TermVector::from_entries(entries)
            })
            .collect();

        Self {
            vocabulary,
            idf,
            rows,
        }
    }

    /// Number of sentences (N)
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Vocabulary size (V)
    pub fn num_terms(&self) -> usize {
        self.vocabulary.len()
    }

    /// Weight of term `term` in sentence `row`
    pub fn weight(&self, row: usize, term: u32) -> f64 {
        self.rows.get(row).map(|r| r.get(term)).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|d| d.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_vocabulary_first_occurrence_order() {
        let matrix = TfIdfMatrix::from_token_lists(&docs(&[
            &["kedi", "köpek"],
            &["köpek", "kuş"],
        ]));

        assert_eq!(matrix.num_terms(), 3);
        assert_eq!(matrix.vocabulary.get("kedi"), Some(0));
        assert_eq!(matrix.vocabulary.get("köpek"), Some(1));
        assert_eq!(matrix.vocabulary.get("kuş"), Some(2));
        assert_eq!(matrix.vocabulary.term(2), Some("kuş"));
    }

    #[test]
    fn test_idf_smoothing() {
        let matrix = TfIdfMatrix::from_token_lists(&docs(&[
            &["kedi", "köpek"],
            &["köpek"],
            &["kuş"],
        ]));

        // kedi: df = 1, N = 3 -> ln(4 / 2) + 1
        assert!((matrix.idf[0] - ((4.0f64 / 2.0).ln() + 1.0)).abs() < 1e-12);
        // köpek: df = 2 -> ln(4 / 3) + 1
        assert!((matrix.idf[1] - ((4.0f64 / 3.0).ln() + 1.0)).abs() < 1e-12);
        for &idf in &matrix.idf {
            assert!(idf > 0.0 && idf.is_finite());
        }
    }

    #[test]
    fn test_term_in_every_sentence_has_idf_one() {
        let matrix = TfIdfMatrix::from_token_lists(&docs(&[&["ortak"], &["ortak"]]));
        assert!((matrix.idf[0] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tf_uses_sentence_length() {
        let matrix = TfIdfMatrix::from_token_lists(&docs(&[&["kedi", "kedi", "köpek"], &["kuş"]]));

        let idf_kedi = matrix.idf[0];
        assert!((matrix.weight(0, 0) - (2.0 / 3.0) * idf_kedi).abs() < 1e-12);
        let idf_kopek = matrix.idf[1];
        assert!((matrix.weight(0, 1) - (1.0 / 3.0) * idf_kopek).abs() < 1e-12);
        assert_eq!(matrix.weight(1, 0), 0.0);
    }

    #[test]
    fn test_empty_sentence_is_zero_vector() {
        let matrix = TfIdfMatrix::from_token_lists(&docs(&[&["kedi"], &[], &["kuş"]]));

        assert_eq!(matrix.num_rows(), 3);
        assert!(matrix.rows[1].is_zero());
        assert_eq!(matrix.rows[1].norm(), 0.0);
        assert!(matrix.rows[1].to_dense(2).iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_no_tokens_at_all() {
        let matrix = TfIdfMatrix::from_token_lists::<String>(&[vec![], vec![]]);
        assert_eq!(matrix.num_terms(), 0);
        assert!(matrix.rows.iter().all(TermVector::is_zero));
    }

    #[test]
    fn test_cosine_similarity() {
        let a = TermVector::from_entries(vec![(0, 1.0), (1, 2.0)]);
        let b = TermVector::from_entries(vec![(1, 2.0), (0, 1.0)]);
        let c = TermVector::from_entries(vec![(2, 5.0)]);
        let zero = TermVector::default();

        assert!((a.cosine_similarity(&b) - 1.0).abs() < 1e-12);
        assert!(a.cosine_similarity(&c).abs() < 1e-12);
        assert_eq!(a.cosine_similarity(&zero), 0.0);
        assert_eq!(zero.cosine_similarity(&zero), 0.0);
    }

    #[test]
    fn test_dense_expansion() {
        let v = TermVector::from_entries(vec![(2, 3.0), (0, 1.0), (1, 0.0)]);
        assert_eq!(v.entries().len(), 2);
        assert_eq!(v.to_dense(3), vec![1.0, 0.0, 3.0]);
        assert!((v.norm() - 10f64.sqrt()).abs() < 1e-12);
    }
}
