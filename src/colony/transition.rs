//! Probabilistic edge selection.

use super::pheromone::PheromoneField;
use crate::graph::WeightedGraph;
use rand::Rng;

/// Computes an agent's legal next moves and samples one.
///
/// Combines the pheromone level `P[u][v]` and the visibility `1 / W[u][v]`
/// into the standard selection weight `P^alpha * (1/W)^beta`. An agent's
/// very first move is the exception: the pheromone field carries no signal
/// yet that distinguishes first-step choices, so every legal candidate
/// weighs `1` regardless of edge cost.
#[derive(Debug, Clone, Copy)]
pub struct TransitionModel<'a> {
    graph: &'a WeightedGraph,
    alpha: f64,
    beta: f64,
}

impl<'a> TransitionModel<'a> {
    pub fn new(graph: &'a WeightedGraph, alpha: f64, beta: f64) -> Self {
        Self { graph, alpha, beta }
    }

    /// Unnormalized selection weights for a set of candidate next nodes.
    ///
    /// `path` is the agent's partial tour so far; each candidate must be a
    /// legal extension of it.
    pub fn numerators(
        &self,
        field: &PheromoneField,
        path: &[usize],
        candidates: &[usize],
    ) -> Vec<f64> {
        // Single-node path: the agent has not moved yet, weigh uniformly.
        if path.len() == 1 {
            return vec![1.0; candidates.len()];
        }
        let current = path[path.len() - 1];
        candidates
            .iter()
            .map(|&next| {
                let visibility = 1.0 / self.graph.weight(current, next);
                field.level(current, next).powf(self.alpha) * visibility.powf(self.beta)
            })
            .collect()
    }

    /// Samples the agent's next node, or `None` if the agent is exhausted.
    ///
    /// Exhaustion covers both cases the round loop retires an agent for:
    /// no legal extension exists, or every candidate's selection weight is
    /// zero (degenerate probability mass, no basis to choose).
    pub fn select_next<R: Rng>(
        &self,
        field: &PheromoneField,
        path: &[usize],
        rng: &mut R,
    ) -> Option<usize> {
        let candidates = self.graph.extensions(path);
        if candidates.is_empty() {
            return None;
        }
        let weights = self.numerators(field, path, &candidates);
        sample_weighted(&candidates, &weights, rng)
    }
}

/// Draws one candidate from a weighted distribution (roulette wheel).
///
/// Returns `None` when the total weight is zero, leaving the caller to
/// treat the draw as impossible. Isolated as a free function so the random
/// source stays swappable and the selection logic testable on its own.
pub fn sample_weighted<T: Copy, R: Rng>(candidates: &[T], weights: &[f64], rng: &mut R) -> Option<T> {
    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return None;
    }
    let mut pick = rng.random::<f64>() * total;
    for (&candidate, &weight) in candidates.iter().zip(weights) {
        pick -= weight;
        if pick <= 0.0 {
            return Some(candidate);
        }
    }
    // Floating-point slack can leave a sliver of `pick` unspent.
    candidates.last().copied()
}
