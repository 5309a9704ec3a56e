//! Greedy tour construction.

use crate::graph::{WeightedGraph, MISSING};
use crate::result::SearchResult;

/// Builds a tour by always taking the cheapest legal extension.
///
/// Runs one extension step per node, closing the tour on the final step.
/// Fails with an empty result as soon as no legal extension exists; greedy
/// choices can paint the walk into a corner even on solvable graphs.
pub fn nearest_neighbor(graph: &WeightedGraph, start: usize) -> SearchResult {
    let n = graph.node_count();
    let mut path = vec![start];
    let mut cost = 0.0;
    let mut expanded = 0usize;

    for _ in 0..n {
        expanded += 1;
        let current = path[path.len() - 1];
        let next = graph
            .extensions(&path)
            .into_iter()
            .min_by(|&a, &b| graph.weight(current, a).total_cmp(&graph.weight(current, b)));
        match next {
            Some(next) => {
                cost += graph.weight(current, next);
                path.push(next);
            }
            None => return SearchResult::unsolved(Some(expanded)),
        }
    }

    SearchResult::solved(path, cost, Some(expanded))
}

/// Grows a closed tour by repeatedly inserting the nearest unvisited city.
///
/// Starts from the degenerate tour `[start, start]`; each step picks the
/// unvisited city closest to any city already on the tour and splices it
/// in at the position that yields the cheapest legal tour. Fails with an
/// empty result when no unvisited city is reachable or no insertion
/// position keeps every edge present.
pub fn nearest_insertion(graph: &WeightedGraph, start: usize) -> SearchResult {
    let n = graph.node_count();
    let mut path = vec![start, start];

    for _ in 0..n.saturating_sub(1) {
        let Some(city) = nearest_unvisited(graph, &path) else {
            return SearchResult::unsolved(None);
        };
        let Some(inserted) = cheapest_insertion(graph, &path, city) else {
            return SearchResult::unsolved(None);
        };
        path = inserted;
    }

    let cost = graph.path_cost(&path);
    SearchResult::solved(path, cost, None)
}

/// The unvisited city with the smallest existing-edge distance from any
/// tour city, ties broken toward the lowest index.
fn nearest_unvisited(graph: &WeightedGraph, path: &[usize]) -> Option<usize> {
    let mut best: Option<(f64, usize)> = None;
    for target in (0..graph.node_count()).filter(|city| !path.contains(city)) {
        let distance = path
            .iter()
            .map(|&tour_city| graph.weight(tour_city, target))
            .filter(|&weight| weight != MISSING)
            .fold(f64::INFINITY, f64::min);
        if distance.is_finite() && best.is_none_or(|(best_distance, _)| distance < best_distance) {
            best = Some((distance, target));
        }
    }
    best.map(|(_, city)| city)
}

/// The cheapest tour obtained by inserting `city` between two consecutive
/// tour positions, skipping insertions that would traverse an absent edge.
fn cheapest_insertion(graph: &WeightedGraph, path: &[usize], city: usize) -> Option<Vec<usize>> {
    let mut best: Option<(f64, Vec<usize>)> = None;
    for position in 1..path.len() {
        let mut candidate = path.to_vec();
        candidate.insert(position, city);
        let cost = graph.path_cost(&candidate);
        if cost.is_finite() && best.as_ref().is_none_or(|(best_cost, _)| cost < *best_cost) {
            best = Some((cost, candidate));
        }
    }
    best.map(|(_, path)| path)
}
