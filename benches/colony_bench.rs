//! Criterion benchmarks for the tour-construction strategies.
//!
//! Uses synthetic city sets so timings measure pure search overhead,
//! independent of any input pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tsp_colony::classic::{a_star, nearest_neighbor, Heuristic};
use tsp_colony::colony::{ColonyConfig, ColonyRunner};
use tsp_colony::graph::{generate_graph, City, WeightedGraph};

fn instance(cities_count: usize) -> WeightedGraph {
    let mut rng = ChaCha8Rng::seed_from_u64(222_467);
    let cities = City::generate(
        cities_count,
        (-100.0, 100.0),
        (-100.0, 100.0),
        (0.0, 50.0),
        &mut rng,
    );
    generate_graph(&cities, 0.0, true, &mut rng)
}

fn bench_colony(c: &mut Criterion) {
    let mut group = c.benchmark_group("colony");
    for cities_count in [10, 20, 40] {
        let graph = instance(cities_count);
        let config = ColonyConfig::default().with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(cities_count),
            &graph,
            |b, graph| b.iter(|| ColonyRunner::run(black_box(graph), 0, &config)),
        );
    }
    group.finish();
}

fn bench_colony_population(c: &mut Criterion) {
    let graph = instance(15);
    let mut group = c.benchmark_group("colony_n_ants");
    for n_ants in [10, 50, 100] {
        let config = ColonyConfig::default().with_n_ants(n_ants).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_ants),
            &config,
            |b, config| b.iter(|| ColonyRunner::run(black_box(&graph), 0, config)),
        );
    }
    group.finish();
}

fn bench_baselines(c: &mut Criterion) {
    let graph = instance(9);
    let mut group = c.benchmark_group("baselines");
    group.bench_function("nearest_neighbor", |b| {
        b.iter(|| nearest_neighbor(black_box(&graph), 0))
    });
    group.bench_function("a_star_min_edge", |b| {
        b.iter(|| a_star(black_box(&graph), 0, Heuristic::MinEdge))
    });
    group.finish();
}

criterion_group!(benches, bench_colony, bench_colony_population, bench_baselines);
criterion_main!(benches);
