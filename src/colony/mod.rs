//! Ant-colony tour optimizer.
//!
//! A multi-agent stochastic tour-construction engine inspired by ant
//! foraging. A population of agents builds tours edge by edge; each choice
//! is sampled from a distribution that combines a shared, mutable
//! [`PheromoneField`] (learned desirability) with edge visibility (inverse
//! cost). After every round the field evaporates and is reinforced along
//! the edges the surviving agents just traversed, so good partial tours
//! bias the next round's choices.
//!
//! The round count is fixed at the node count: enough for every agent to
//! visit each node once and close its tour, with a bounded, predictable
//! runtime rather than a convergence criterion.
//!
//! # Key types
//!
//! - [`ColonyConfig`]: population size, deposit/evaporation constants, and
//!   the pheromone/visibility exponents
//! - [`ColonyRunner`]: executes the round loop
//! - [`PheromoneField`], [`Agent`], [`TransitionModel`]: the moving parts,
//!   public for inspection and testing
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Gambardella (1997), "Ant Colony System"

mod agent;
mod config;
mod pheromone;
mod runner;
mod transition;

pub use agent::Agent;
pub use config::ColonyConfig;
pub use pheromone::PheromoneField;
pub use runner::ColonyRunner;
pub use transition::{sample_weighted, TransitionModel};
