//! Compressed Sparse Row (CSR) sentence graph
//!
//! Sentences that share no weighted terms have no edge, so the similarity
//! graph is usually sparse. CSR stores the non-zero edges contiguously,
//! which is what the power iteration walks on every step.

use super::builder::SimilarityMatrix;

/// A sentence graph in Compressed Sparse Row format
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes (sentences)
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Edge weights
    pub weights: Vec<f64>,
    /// Total outgoing weight for each node
    pub total_weight: Vec<f64>,
}

impl CsrGraph {
    /// Convert a similarity matrix into CSR, keeping only positive weights
    pub fn from_similarity(matrix: &SimilarityMatrix) -> Self {
        let num_nodes = matrix.len();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for i in 0..num_nodes {
            let mut total = 0.0;
            for (j, &w) in matrix.row(i).iter().enumerate() {
                if w > 0.0 {
                    col_idx.push(j as u32);
                    weights.push(w);
                    total += w;
                }
            }
            total_weight.push(total);
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
        }
    }

    /// Iterate over neighbors of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Get the out-degree of a node
    pub fn degree(&self, node: u32) -> usize {
        self.row_ptr[node as usize + 1] - self.row_ptr[node as usize]
    }

    /// Get the total outgoing weight of a node
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of edges (counting each undirected edge twice)
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Find dangling nodes (sentences similar to no other sentence)
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.total_weight[n as usize] <= 0.0)
            .collect()
    }

    /// Materialize the row-stochastic transition matrix of the random walk
    ///
    /// Row i is node i's edge weights divided by their sum; dangling rows
    /// are uniform 1/N.
    pub fn transition_matrix(&self) -> TransitionMatrix {
        let n = self.num_nodes;
        let mut values = vec![0.0; n * n];

        for node in 0..n {
            let row = &mut values[node * n..(node + 1) * n];
            let total = self.total_weight[node];
            if total > 0.0 {
                for (neighbor, weight) in self.neighbors(node as u32) {
                    row[neighbor as usize] = weight / total;
                }
            } else {
                row.fill(1.0 / n as f64);
            }
        }

        TransitionMatrix { n, values }
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
        }
    }
}

/// Dense N x N row-stochastic transition matrix
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    n: usize,
    values: Vec<f64>,
}

impl TransitionMatrix {
    /// Transition probability from `from` to `to`
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.n + to]
    }

    /// Row `i` of the matrix
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.n..(i + 1) * self.n]
    }

    /// Number of nodes (N)
    pub fn len(&self) -> usize {
        self.n
    }

    /// Check if the matrix is empty
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_test_matrix() -> SimilarityMatrix {
        // 0 - 1 (0.5), 1 - 2 (0.25), 3 isolated
        let mut matrix = SimilarityMatrix::zeros(4);
        matrix.set_symmetric(0, 1, 0.5);
        matrix.set_symmetric(1, 2, 0.25);
        matrix
    }

    #[test]
    fn test_csr_conversion() {
        let csr = CsrGraph::from_similarity(&build_test_matrix());

        assert_eq!(csr.num_nodes, 4);
        assert_eq!(csr.num_edges(), 4);
        assert_eq!(csr.row_ptr, vec![0, 1, 3, 4, 4]);
    }

    #[test]
    fn test_neighbor_iteration() {
        let csr = CsrGraph::from_similarity(&build_test_matrix());

        let neighbors: Vec<_> = csr.neighbors(1).collect();
        assert_eq!(neighbors, vec![(0, 0.5), (2, 0.25)]);
    }

    #[test]
    fn test_degree_and_weight() {
        let csr = CsrGraph::from_similarity(&build_test_matrix());

        assert_eq!(csr.degree(1), 2);
        assert!((csr.node_total_weight(1) - 0.75).abs() < 1e-12);
        assert_eq!(csr.degree(3), 0);
    }

    #[test]
    fn test_dangling_nodes() {
        let csr = CsrGraph::from_similarity(&build_test_matrix());
        assert_eq!(csr.dangling_nodes(), vec![3]);
    }

    #[test]
    fn test_transition_rows_sum_to_one() {
        let csr = CsrGraph::from_similarity(&build_test_matrix());
        let transition = csr.transition_matrix();

        for i in 0..transition.len() {
            let sum: f64 = transition.row(i).iter().sum();
            assert!((sum - 1.0).abs() < 1e-12);
        }
        assert!((transition.get(1, 0) - 0.5 / 0.75).abs() < 1e-12);
        assert!((transition.get(0, 1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_dangling_row_is_uniform() {
        let csr = CsrGraph::from_similarity(&build_test_matrix());
        let transition = csr.transition_matrix();

        for &p in transition.row(3) {
            assert!((p - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_empty_graph() {
        let csr = CsrGraph::from_similarity(&SimilarityMatrix::zeros(0));

        assert!(csr.is_empty());
        assert_eq!(csr.num_edges(), 0);
        assert!(csr.transition_matrix().is_empty());
        assert!(CsrGraph::default().is_empty());
    }
}
