//! Best-first tour search.

use crate::graph::{WeightedGraph, MISSING};
use crate::result::SearchResult;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Admissible estimate of the cost still ahead of a partial tour.
///
/// Both variants look at the weights of existing edges between nodes the
/// path has not visited yet (the submatrix left after removing every
/// visited row and column, diagonal included) and return `0` once nothing
/// remains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// Smallest remaining edge weight.
    MinEdge,
    /// Mean of the remaining edge weights.
    MeanEdge,
}

impl Heuristic {
    fn estimate(&self, graph: &WeightedGraph, path: &[usize]) -> f64 {
        let n = graph.node_count();
        let remaining: Vec<usize> = (0..n).filter(|node| !path.contains(node)).collect();
        let mut sum = 0.0;
        let mut count = 0usize;
        let mut min = f64::INFINITY;
        for &from in &remaining {
            for &to in &remaining {
                let weight = graph.weight(from, to);
                if weight != MISSING {
                    sum += weight;
                    count += 1;
                    min = min.min(weight);
                }
            }
        }
        if count == 0 {
            return 0.0;
        }
        match self {
            Heuristic::MinEdge => min,
            Heuristic::MeanEdge => sum / count as f64,
        }
    }
}

/// A frontier entry ordered by estimated total cost, cheapest first.
struct State {
    estimate: f64,
    cost: f64,
    path: Vec<usize>,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap; reverse for cheapest-first popping.
        other
            .estimate
            .total_cmp(&self.estimate)
            .then_with(|| other.cost.total_cmp(&self.cost))
    }
}

/// Best-first search over partial tours with an admissible heuristic.
///
/// Expands the frontier entry with the lowest `g + h` until the first
/// closed tour is popped; with an admissible `heuristic` that tour is
/// optimal. Returns an empty result when the frontier drains without
/// closing a tour.
pub fn a_star(graph: &WeightedGraph, start: usize, heuristic: Heuristic) -> SearchResult {
    let n = graph.node_count();
    let mut frontier = BinaryHeap::new();
    frontier.push(State {
        estimate: 0.0,
        cost: 0.0,
        path: vec![start],
    });
    let mut expanded = 0usize;

    while let Some(State { estimate, cost, path }) = frontier.pop() {
        if path.len() == n + 1 {
            return SearchResult::solved(path, estimate, Some(expanded));
        }
        expanded += 1;
        for next in graph.extensions(&path) {
            let next_cost = cost + graph.weight(path[path.len() - 1], next);
            let mut next_path = path.clone();
            next_path.push(next);
            let h = heuristic.estimate(graph, &next_path);
            frontier.push(State {
                estimate: next_cost + h,
                cost: next_cost,
                path: next_path,
            });
        }
    }

    SearchResult::unsolved(Some(expanded))
}
