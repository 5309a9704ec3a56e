//! Exhaustive frontier search.

use crate::graph::WeightedGraph;
use crate::result::SearchResult;
use std::collections::VecDeque;

/// Which end of the frontier to expand next.
#[derive(Clone, Copy)]
enum Order {
    Fifo,
    Lifo,
}

/// Enumerates every closed tour breadth-first and returns the cheapest.
pub fn breadth_first(graph: &WeightedGraph, start: usize) -> SearchResult {
    exhaustive(graph, start, Order::Fifo)
}

/// Enumerates every closed tour depth-first and returns the cheapest.
pub fn depth_first(graph: &WeightedGraph, start: usize) -> SearchResult {
    exhaustive(graph, start, Order::Lifo)
}

fn exhaustive(graph: &WeightedGraph, start: usize, order: Order) -> SearchResult {
    let n = graph.node_count();
    let mut frontier: VecDeque<(f64, Vec<usize>)> = VecDeque::new();
    frontier.push_back((0.0, vec![start]));
    let mut best: Option<(f64, Vec<usize>)> = None;
    let mut expanded = 0usize;

    while let Some((cost, path)) = match order {
        Order::Fifo => frontier.pop_front(),
        Order::Lifo => frontier.pop_back(),
    } {
        if path.len() == n + 1 {
            let better = best.as_ref().is_none_or(|(best_cost, _)| cost < *best_cost);
            if better {
                best = Some((cost, path));
            }
            continue;
        }
        expanded += 1;
        for next in graph.extensions(&path) {
            let next_cost = cost + graph.weight(path[path.len() - 1], next);
            let mut next_path = path.clone();
            next_path.push(next);
            frontier.push_back((next_cost, next_path));
        }
    }

    match best {
        Some((cost, path)) => SearchResult::solved(path, cost, Some(expanded)),
        None => SearchResult::unsolved(Some(expanded)),
    }
}
