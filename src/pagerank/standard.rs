//! Standard PageRank algorithm
//!
//! Implements the classic damped power iteration over the weighted sentence
//! graph. Dangling nodes spread their mass uniformly, which is the same walk
//! as replacing their transition row with 1/N.

use super::PageRankResult;
use crate::graph::csr::{CsrGraph, TransitionMatrix};

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Maximum number of iterations
    pub max_iterations: usize,
    /// Convergence threshold on the L1 change between iterations
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank on a weighted sentence graph
    ///
    /// Returns the result even if convergence wasn't achieved, with `converged=false`.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        // Every sentence starts with equal mass
        let initial_score = 1.0 / n as f64;
        let mut scores = vec![initial_score; n];
        let mut new_scores = vec![0.0; n];

        // Sentences sharing no terms with any other sentence
        let dangling_nodes = graph.dangling_nodes();

        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        // Stop once the change falls strictly below the threshold
        while iterations < self.max_iterations && delta >= self.threshold {
            iterations += 1;

            // Dangling mass is spread uniformly, as if the row were 1/N
            let dangling_mass: f64 = dangling_nodes.iter().map(|&d| scores[d as usize]).sum();
            let dangling_contribution = self.damping * dangling_mass / n as f64;

            new_scores.fill(teleport + dangling_contribution);

            // Propagate along similarity edges, normalized by row weight
            for (node, &node_score) in scores.iter().enumerate() {
                let total_weight = graph.node_total_weight(node as u32);

                if total_weight > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        let contribution = self.damping * node_score * weight / total_weight;
                        new_scores[neighbor as usize] += contribution;
                    }
                }
            }

            delta = l1_distance(&scores, &new_scores);
            std::mem::swap(&mut scores, &mut new_scores);
        }

        finish(scores, iterations, delta, self.threshold)
    }

    /// Run PageRank on an explicit row-stochastic transition matrix
    ///
    /// `r'[i] = (1 - d) / N + d * sum_j r[j] * T[j][i]`. Costs O(N^2) per
    /// iteration regardless of sparsity; [`run`](Self::run) is preferred.
    pub fn run_dense(&self, transition: &TransitionMatrix) -> PageRankResult {
        let n = transition.len();
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0, true);
        }

        let mut scores = vec![1.0 / n as f64; n];
        let mut new_scores = vec![0.0; n];
        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta >= self.threshold {
            iterations += 1;

            for (i, slot) in new_scores.iter_mut().enumerate() {
                let acc: f64 = scores
                    .iter()
                    .enumerate()
                    .map(|(j, &r)| r * transition.get(j, i))
                    .sum();
                *slot = teleport + self.damping * acc;
            }

            delta = l1_distance(&scores, &new_scores);
            std::mem::swap(&mut scores, &mut new_scores);
        }

        finish(scores, iterations, delta, self.threshold)
    }
}

/// L1 norm of the change between two score vectors
fn l1_distance(old: &[f64], new: &[f64]) -> f64 {
    old.iter().zip(new.iter()).map(|(o, n)| (o - n).abs()).sum()
}

/// Renormalize for numerical stability and package the result
fn finish(mut scores: Vec<f64>, iterations: usize, delta: f64, threshold: f64) -> PageRankResult {
    let sum: f64 = scores.iter().sum();
    if sum > 0.0 {
        for score in &mut scores {
            *score /= sum;
        }
    }

    PageRankResult::new(scores, iterations, delta, delta < threshold)
}
