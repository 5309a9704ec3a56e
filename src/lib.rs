//! Tour-construction strategies for the traveling-salesman problem.
//!
//! Searches for low-cost Hamiltonian circuits over a weighted, possibly
//! asymmetric, possibly incomplete directed graph of city nodes. Several
//! strategies share one result shape so they can be benchmarked against
//! each other:
//!
//! - **Colony optimizer**: a multi-agent stochastic optimizer inspired by
//!   ant foraging. Agents build tours edge by edge, guided by a shared
//!   pheromone matrix that evaporates and is reinforced each round.
//! - **Exhaustive search**: breadth-first and depth-first enumeration of
//!   all closed tours; exact but exponential.
//! - **Greedy construction**: nearest-neighbor and nearest-insertion.
//! - **A\***: best-first search with admissible remaining-edge heuristics.
//!
//! # Architecture
//!
//! [`graph::WeightedGraph`] is the shared input: a square cost matrix with
//! a sentinel for absent edges. Every strategy consumes it read-only and
//! produces a [`SearchResult`]. The colony optimizer additionally owns a
//! mutable [`colony::PheromoneField`] for the duration of one search; no
//! state persists between searches.
//!
//! Randomized components take an explicit [`rand::Rng`] or a seed — there
//! is no global generator state, so repeated or concurrent searches are
//! isolated and reproducible.

pub mod classic;
pub mod colony;
pub mod graph;
mod result;

pub use result::SearchResult;
