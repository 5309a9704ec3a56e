//! Deterministic baseline strategies.
//!
//! Simple traversal and greedy tour constructions the colony optimizer is
//! benchmarked against. All consume the same [`WeightedGraph`] and produce
//! the same [`SearchResult`] shape as the colony:
//!
//! - [`breadth_first`] / [`depth_first`]: exhaustive enumeration of every
//!   closed tour; exact, exponential, only viable on small instances.
//! - [`nearest_neighbor`]: greedily extends with the cheapest legal edge.
//! - [`nearest_insertion`]: grows a closed tour by inserting the city
//!   nearest to it at the cheapest position.
//! - [`a_star`]: best-first search with a pluggable admissible
//!   remaining-edge [`Heuristic`].
//!
//! [`WeightedGraph`]: crate::graph::WeightedGraph
//! [`SearchResult`]: crate::SearchResult

mod astar;
mod exhaustive;
mod greedy;

pub use astar::{a_star, Heuristic};
pub use exhaustive::{breadth_first, depth_first};
pub use greedy::{nearest_insertion, nearest_neighbor};
