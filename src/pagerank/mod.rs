//! PageRank centrality
//!
//! This module provides the damped power iteration used to score sentence
//! centrality.

pub mod standard;

use serde::Serialize;

/// Result of a PageRank computation
#[derive(Debug, Clone, Serialize)]
pub struct PageRankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl PageRankResult {
    /// Create a new PageRank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Uniform scores for `n` nodes, without iterating
    pub fn uniform(n: usize) -> Self {
        let scores = if n == 0 { Vec::new() } else { vec![1.0 / n as f64; n] };
        Self::new(scores, 0, 0.0, true)
    }

    /// Node IDs ordered by score descending; equal scores keep ID order
    pub fn ranking(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.scores.len()).collect();
        order.sort_by(|&a, &b| self.scores[b].total_cmp(&self.scores[a]));
        order
    }

    /// Get top N nodes by score
    pub fn top_n(&self, n: usize) -> Vec<(u32, f64)> {
        self.ranking()
            .into_iter()
            .take(n)
            .map(|i| (i as u32, self.scores[i]))
            .collect()
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_is_stable_for_ties() {
        let result = PageRankResult::new(vec![0.2, 0.4, 0.2, 0.2], 1, 0.0, true);
        assert_eq!(result.ranking(), vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_top_n() {
        let result = PageRankResult::new(vec![0.1, 0.5, 0.4], 1, 0.0, true);
        assert_eq!(result.top_n(2), vec![(1, 0.5), (2, 0.4)]);
        assert_eq!(result.top_n(10).len(), 3);
    }

    #[test]
    fn test_uniform() {
        let result = PageRankResult::uniform(4);
        assert_eq!(result.scores, vec![0.25; 4]);
        assert_eq!(result.iterations, 0);
        assert!(PageRankResult::uniform(0).scores.is_empty());
        assert_eq!(result.score(9), 0.0);
    }
}
