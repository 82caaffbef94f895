//! Similarity matrix construction
//!
//! Computes cosine similarity for every unordered sentence pair and stores
//! it symmetrically in a dense N x N matrix with a zero diagonal.

use crate::vectorizer::tfidf::TermVector;
use rayon::prelude::*;

/// Sentence count at which pairwise similarity rows are computed in parallel
pub const PARALLEL_THRESHOLD: usize = 64;

/// Dense, symmetric sentence similarity matrix
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    /// Row-major N x N values
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Create an all-zero matrix for `n` sentences
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            values: vec![0.0; n * n],
        }
    }

    /// Build from TF-IDF rows
    ///
    /// Zero vectors are similar to nothing (similarity 0, never NaN).
    pub fn from_vectors(vectors: &[TermVector]) -> Self {
        if vectors.len() >= PARALLEL_THRESHOLD {
            return build_similarity_parallel(vectors);
        }

        let n = vectors.len();
        let mut matrix = Self::zeros(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let sim = vectors[i].cosine_similarity(&vectors[j]);
                matrix.set_symmetric(i, j, sim);
            }
        }
        matrix
    }

    /// Set the weight of the undirected edge between `i` and `j`
    ///
    /// Diagonal writes are ignored.
    pub fn set_symmetric(&mut self, i: usize, j: usize, weight: f64) {
        if i == j {
            return;
        }
        self.values[i * self.n + j] = weight;
        self.values[j * self.n + i] = weight;
    }

    /// Similarity between sentences `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Row `i` of the matrix
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }

    /// Sum of row `i`
    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    /// Number of sentences (N)
    pub fn len(&self) -> usize {
        self.n
    }

    /// Check if the matrix is empty
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Check symmetry and a zero diagonal within `eps`
    pub fn is_symmetric(&self, eps: f64) -> bool {
        (0..self.n).all(|i| {
            self.get(i, i).abs() <= eps
                && ((i + 1)..self.n).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= eps)
        })
    }
}

/// Build the similarity matrix with one rayon task per upper-triangle row
///
/// Every cell is computed exactly as in the sequential path, so the result
/// is identical.
pub fn build_similarity_parallel(vectors: &[TermVector]) -> SimilarityMatrix {
    let n = vectors.len();
    let upper: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|i| {
            ((i + 1)..n)
                .map(|j| vectors[i].cosine_similarity(&vectors[j]))
                .collect()
        })
        .collect();

    let mut matrix = SimilarityMatrix::zeros(n);
    for (i, row) in upper.into_iter().enumerate() {
        for (offset, sim) in row.into_iter().enumerate() {
            matrix.set_symmetric(i, i + 1 + offset, sim);
        }
    }
    matrix
}
