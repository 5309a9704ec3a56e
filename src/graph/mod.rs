//! Weighted directed city graph.
//!
//! The input shared by every search strategy: an immutable square matrix of
//! edge costs with a sentinel value for absent edges. Also hosts the
//! legal-extension rule for partial tours, which all strategies consume, and
//! the connectivity pre-check used before running an expensive search.

mod city;
mod generate;

pub use city::City;
pub use generate::generate_graph;

/// Sentinel weight marking an absent directed edge.
pub const MISSING: f64 = f64::NEG_INFINITY;

/// Immutable square matrix of directed edge costs.
///
/// `weight(i, i)` is `0` for every node; `weight(i, j)` is [`MISSING`] when
/// no directed edge `i → j` exists. The matrix is fixed for the duration of
/// a search.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedGraph {
    n: usize,
    weights: Vec<f64>,
}

impl WeightedGraph {
    /// Builds a graph from row-major rows of weights.
    ///
    /// Fails on a non-square matrix or a nonzero diagonal entry — both are
    /// caller bugs this constructor surfaces early instead of letting the
    /// searches compute garbage.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, String> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(format!(
                    "matrix must be square: row {i} has {} entries, expected {n}",
                    row.len()
                ));
            }
            if row[i] != 0.0 {
                return Err(format!("diagonal entry [{i}][{i}] must be 0, got {}", row[i]));
            }
        }
        Ok(Self {
            n,
            weights: rows.into_iter().flatten().collect(),
        })
    }

    /// Builds a graph by evaluating `weight` for every off-diagonal pair.
    ///
    /// The diagonal is set to `0`; `weight` may return [`MISSING`] to omit
    /// an edge.
    pub fn from_fn(n: usize, mut weight: impl FnMut(usize, usize) -> f64) -> Self {
        let mut weights = vec![0.0; n * n];
        for from in 0..n {
            for to in 0..n {
                if from != to {
                    weights[from * n + to] = weight(from, to);
                }
            }
        }
        Self { n, weights }
    }

    /// A complete graph where every off-diagonal edge has cost `weight`.
    pub fn complete(n: usize, weight: f64) -> Self {
        Self::from_fn(n, |_, _| weight)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Cost of the directed edge `from → to`, or [`MISSING`].
    pub fn weight(&self, from: usize, to: usize) -> f64 {
        self.weights[from * self.n + to]
    }

    /// Whether the directed edge `from → to` exists.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.weight(from, to) != MISSING
    }

    /// Legal next nodes for a partial tour.
    ///
    /// While the path is shorter than the node count, any unvisited node
    /// reachable from the path's last node is legal. Once every node has
    /// been visited, the only candidate is the closing edge back to the
    /// path's first node; if that edge is absent there are no legal moves.
    pub fn extensions(&self, path: &[usize]) -> Vec<usize> {
        let current = path[path.len() - 1];
        if path.len() == self.n {
            let start = path[0];
            if self.has_edge(current, start) {
                vec![start]
            } else {
                Vec::new()
            }
        } else {
            (0..self.n)
                .filter(|&next| self.has_edge(current, next) && !path.contains(&next))
                .collect()
        }
    }

    /// Sum of edge weights along consecutive pairs of `path`.
    ///
    /// An absent edge contributes [`MISSING`], poisoning the sum; callers
    /// that construct paths via [`extensions`](Self::extensions) never
    /// traverse one.
    pub fn path_cost(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|pair| self.weight(pair[0], pair[1])).sum()
    }

    /// Whether every node can reach every other node.
    ///
    /// A necessary condition for a closed tour to exist, but not a
    /// sufficient one: it may still be impossible to visit every city
    /// exactly once.
    pub fn is_connected(&self) -> bool {
        (0..self.n).all(|start| self.reaches_all_from(start))
    }

    fn reaches_all_from(&self, start: usize) -> bool {
        let mut visited = vec![false; self.n];
        let mut frontier = vec![start];
        visited[start] = true;
        while let Some(node) = frontier.pop() {
            for next in 0..self.n {
                if self.has_edge(node, next) && !visited[next] {
                    visited[next] = true;
                    frontier.push(next);
                }
            }
        }
        visited.iter().all(|&v| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> WeightedGraph {
        // 0 → 1 → 2, no edges back
        WeightedGraph::from_rows(vec![
            vec![0.0, 1.0, MISSING],
            vec![MISSING, 0.0, 2.0],
            vec![MISSING, MISSING, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let err = WeightedGraph::from_rows(vec![vec![0.0, 1.0], vec![1.0]]);
        assert!(err.is_err());
    }

    #[test]
    fn test_from_rows_rejects_nonzero_diagonal() {
        let err = WeightedGraph::from_rows(vec![vec![0.0, 1.0], vec![1.0, 3.0]]);
        assert!(err.is_err());
    }

    #[test]
    fn test_weight_and_has_edge() {
        let graph = line_graph();
        assert_eq!(graph.weight(0, 1), 1.0);
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert!(graph.has_edge(0, 0)); // diagonal zero counts as present
    }

    #[test]
    fn test_extensions_standard_step_skips_visited_and_missing() {
        let graph = WeightedGraph::complete(4, 1.0);
        assert_eq!(graph.extensions(&[0, 2]), vec![1, 3]);

        let sparse = line_graph();
        assert_eq!(sparse.extensions(&[0]), vec![1]);
        assert_eq!(sparse.extensions(&[2]), Vec::<usize>::new());
    }

    #[test]
    fn test_extensions_final_step_closes_to_start() {
        let graph = WeightedGraph::complete(3, 1.0);
        assert_eq!(graph.extensions(&[1, 2, 0]), vec![1]);

        // closing edge absent
        let sparse = line_graph();
        assert_eq!(sparse.extensions(&[0, 1, 2]), Vec::<usize>::new());
    }

    #[test]
    fn test_path_cost_sums_consecutive_edges() {
        let graph = line_graph();
        assert_eq!(graph.path_cost(&[0, 1, 2]), 3.0);
        assert_eq!(graph.path_cost(&[0]), 0.0);
    }

    #[test]
    fn test_is_connected() {
        assert!(WeightedGraph::complete(4, 1.0).is_connected());
        assert!(!line_graph().is_connected());
    }

    #[test]
    fn test_single_node_graph() {
        let graph = WeightedGraph::complete(1, 1.0);
        assert_eq!(graph.node_count(), 1);
        // the trivial tour closes over the diagonal
        assert_eq!(graph.extensions(&[0]), vec![0]);
        assert_eq!(graph.path_cost(&[0, 0]), 0.0);
    }
}
