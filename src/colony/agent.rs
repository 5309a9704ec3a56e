//! A single tour-building agent.

use crate::graph::WeightedGraph;

/// One agent ("ant") in the colony.
///
/// Carries an ordered path of visited nodes and the running sum of
/// traversed edge weights. Performs no legality checks of its own; the
/// transition model and the runner guarantee every advance crosses an
/// existing edge to a legal node.
///
/// A retired agent never advances again, but its path and cost remain
/// available for the terminal selection.
#[derive(Debug, Clone)]
pub struct Agent {
    path: Vec<usize>,
    cost: f64,
    alive: bool,
}

impl Agent {
    /// A fresh agent standing at `start` with zero accumulated cost.
    pub fn new(start: usize) -> Self {
        Self {
            path: vec![start],
            cost: 0.0,
            alive: true,
        }
    }

    /// The node the agent currently stands on.
    pub fn current(&self) -> usize {
        self.path[self.path.len() - 1]
    }

    /// The node the agent started from.
    pub fn start(&self) -> usize {
        self.path[0]
    }

    /// Visited nodes in order, including the start.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Accumulated cost of all traversed edges.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Whether the agent still takes part in the round loop.
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Removes the agent from the live set permanently.
    pub fn retire(&mut self) {
        self.alive = false;
    }

    /// Extends the path by the edge `current → next` and accumulates its
    /// weight. The caller guarantees the edge exists and the move is legal.
    pub fn advance(&mut self, next: usize, graph: &WeightedGraph) {
        self.cost += graph.weight(self.current(), next);
        self.path.push(next);
    }

    /// The edge traversed by the most recent advance, if any.
    pub fn last_edge(&self) -> Option<(usize, usize)> {
        if self.path.len() < 2 {
            return None;
        }
        Some((self.path[self.path.len() - 2], self.path[self.path.len() - 1]))
    }
}
