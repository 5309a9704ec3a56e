//! Random graph generation from a set of cities.

use super::{City, WeightedGraph, MISSING};
use rand::Rng;

/// Generates a weighted directed graph over `cities`.
///
/// Starts from the complete graph and removes uniformly random connections
/// until at least the fraction `connections_drop` of the off-diagonal
/// entries is gone; with `symmetric` removal both directions of a
/// connection go together. Remaining edges are weighted by the symmetric or
/// asymmetric city distance. The result is not guaranteed to stay
/// connected — run [`WeightedGraph::is_connected`] before searching.
pub fn generate_graph<R: Rng>(
    cities: &[City],
    connections_drop: f64,
    symmetric: bool,
    rng: &mut R,
) -> WeightedGraph {
    let n = cities.len();
    let mut present = vec![true; n * n];
    for node in 0..n {
        present[node * n + node] = false;
    }

    let total = (n * n).saturating_sub(n);
    if total > 0 {
        let mut remaining = total;
        while (total - remaining) as f64 / (total as f64) < connections_drop {
            let edges: Vec<usize> = present
                .iter()
                .enumerate()
                .filter_map(|(idx, &p)| p.then_some(idx))
                .collect();
            if edges.is_empty() {
                break;
            }
            let idx = edges[rng.random_range(0..edges.len())];
            present[idx] = false;
            remaining -= 1;
            if symmetric {
                let (from, to) = (idx / n, idx % n);
                let mirror = to * n + from;
                if present[mirror] {
                    present[mirror] = false;
                    remaining -= 1;
                }
            }
        }
    }

    let distance = if symmetric {
        City::distance_symmetric
    } else {
        City::distance_asymmetric
    };
    WeightedGraph::from_fn(n, |from, to| {
        if present[from * n + to] {
            distance(&cities[from], &cities[to])
        } else {
            MISSING
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sample_cities(count: usize, seed: u64) -> Vec<City> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        City::generate(count, (-100.0, 100.0), (-100.0, 100.0), (0.0, 50.0), &mut rng)
    }

    fn count_edges(graph: &WeightedGraph) -> usize {
        let n = graph.node_count();
        (0..n)
            .flat_map(|from| (0..n).map(move |to| (from, to)))
            .filter(|&(from, to)| from != to && graph.has_edge(from, to))
            .count()
    }

    #[test]
    fn test_no_drop_yields_complete_graph() {
        let cities = sample_cities(6, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let graph = generate_graph(&cities, 0.0, true, &mut rng);
        assert_eq!(count_edges(&graph), 6 * 5);
        assert!(graph.is_connected());
    }

    #[test]
    fn test_drop_removes_requested_fraction() {
        let cities = sample_cities(8, 3);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let graph = generate_graph(&cities, 0.25, false, &mut rng);
        let total = 8 * 7;
        let dropped = total - count_edges(&graph);
        assert!(
            dropped as f64 / total as f64 >= 0.25,
            "expected at least 25% dropped, got {dropped}/{total}"
        );
    }

    #[test]
    fn test_symmetric_drop_removes_both_directions() {
        let cities = sample_cities(7, 5);
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let graph = generate_graph(&cities, 0.3, true, &mut rng);
        let n = graph.node_count();
        for from in 0..n {
            for to in 0..n {
                assert_eq!(
                    graph.has_edge(from, to),
                    graph.has_edge(to, from),
                    "edge presence must be symmetric for {from} and {to}"
                );
            }
        }
    }

    #[test]
    fn test_symmetric_weights_match_distance() {
        let cities = sample_cities(5, 8);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let graph = generate_graph(&cities, 0.0, true, &mut rng);
        let expected = City::distance_symmetric(&cities[1], &cities[3]);
        assert_eq!(graph.weight(1, 3), expected);
        assert_eq!(graph.weight(3, 1), expected);
    }

    #[test]
    fn test_asymmetric_weights_differ_by_direction() {
        let mut cities = sample_cities(4, 10);
        cities[0].z = 0.0;
        cities[1].z = 40.0;
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let graph = generate_graph(&cities, 0.0, false, &mut rng);
        assert!(graph.weight(1, 0) < graph.weight(0, 1), "downhill must be cheaper");
    }
}
