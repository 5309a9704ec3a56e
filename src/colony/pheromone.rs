//! Per-edge desirability state.

use crate::graph::WeightedGraph;

/// Mutable square matrix of per-edge pheromone levels.
///
/// Shares the graph's shape for the whole run and is owned exclusively by
/// the runner: the transition model only ever reads it, and it is mutated
/// once per round (evaporate, then reinforce). Levels start at zero on
/// every edge and stay non-negative — evaporation scales by a factor in
/// `(0, 1]` and deposits are non-negative.
#[derive(Debug, Clone)]
pub struct PheromoneField {
    n: usize,
    levels: Vec<f64>,
}

impl PheromoneField {
    /// A neutral field matching the graph's shape: all levels zero.
    ///
    /// The all-zero start relies on the transition rule's uniform
    /// first-move weighting; from the second round on, the first round's
    /// deposits give the numerators mass.
    pub fn new(graph: &WeightedGraph) -> Self {
        let n = graph.node_count();
        Self {
            n,
            levels: vec![0.0; n * n],
        }
    }

    /// Pheromone level on the directed edge `from → to`.
    pub fn level(&self, from: usize, to: usize) -> f64 {
        self.levels[from * self.n + to]
    }

    /// Scales every level by the retention factor `rho`.
    pub fn evaporate(&mut self, rho: f64) {
        for level in &mut self.levels {
            *level *= rho;
        }
    }

    /// Adds `amount` of pheromone to the directed edge `from → to`.
    pub fn deposit(&mut self, from: usize, to: usize, amount: f64) {
        self.levels[from * self.n + to] += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{WeightedGraph, MISSING};

    #[test]
    fn test_new_field_is_all_zero() {
        let graph = WeightedGraph::from_rows(vec![
            vec![0.0, 1.0, MISSING],
            vec![1.0, 0.0, 2.0],
            vec![MISSING, 2.0, 0.0],
        ])
        .unwrap();
        let field = PheromoneField::new(&graph);
        for from in 0..3 {
            for to in 0..3 {
                assert_eq!(field.level(from, to), 0.0);
            }
        }
    }

    #[test]
    fn test_evaporate_scales_all_levels() {
        let graph = WeightedGraph::complete(3, 1.0);
        let mut field = PheromoneField::new(&graph);
        field.deposit(0, 1, 10.0);
        field.deposit(2, 0, 4.0);
        field.evaporate(0.5);
        assert_eq!(field.level(0, 1), 5.0);
        assert_eq!(field.level(2, 0), 2.0);
        assert_eq!(field.level(1, 2), 0.0);
    }

    #[test]
    fn test_deposit_accumulates() {
        let graph = WeightedGraph::complete(3, 1.0);
        let mut field = PheromoneField::new(&graph);
        field.deposit(1, 2, 3.0);
        field.deposit(1, 2, 2.0);
        assert_eq!(field.level(1, 2), 5.0);
    }

    #[test]
    fn test_full_retention_keeps_untouched_edges_at_zero() {
        let graph = WeightedGraph::complete(4, 1.0);
        let mut field = PheromoneField::new(&graph);
        for _ in 0..10 {
            field.evaporate(1.0);
            field.deposit(0, 1, 1.0);
        }
        assert_eq!(field.level(0, 1), 10.0);
        assert_eq!(field.level(1, 0), 0.0);
        assert_eq!(field.level(2, 3), 0.0);
    }
}
