//! Shared result type for all search strategies.

/// Outcome of a single tour search.
///
/// Every strategy produces this shape so results are directly comparable.
/// `path`/`cost` are `None` when the strategy found no acceptable tour.
/// `expanded` counts node expansions for the strategies that track them
/// (exhaustive and A*); the stochastic and insertion strategies report
/// `None` to keep the interface uniform.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Node sequence of the best path found, in visit order.
    pub path: Option<Vec<usize>>,

    /// Total cost of `path` (sum of traversed edge weights).
    pub cost: Option<f64>,

    /// Number of expanded nodes, where the strategy counts them.
    pub expanded: Option<usize>,
}

impl SearchResult {
    /// A successful result.
    pub fn solved(path: Vec<usize>, cost: f64, expanded: Option<usize>) -> Self {
        Self {
            path: Some(path),
            cost: Some(cost),
            expanded,
        }
    }

    /// An empty result: no acceptable path was found.
    pub fn unsolved(expanded: Option<usize>) -> Self {
        Self {
            path: None,
            cost: None,
            expanded,
        }
    }

    /// Whether a path was found.
    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }
}
