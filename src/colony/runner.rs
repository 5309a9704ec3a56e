//! Colony round loop and terminal selection.

use super::agent::Agent;
use super::config::ColonyConfig;
use super::pheromone::PheromoneField;
use super::transition::TransitionModel;
use crate::graph::WeightedGraph;
use crate::result::SearchResult;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Executes the colony optimizer.
///
/// # Usage
///
/// ```
/// use tsp_colony::colony::{ColonyConfig, ColonyRunner};
/// use tsp_colony::graph::WeightedGraph;
///
/// let graph = WeightedGraph::complete(5, 1.0);
/// let config = ColonyConfig::default().with_seed(42);
/// let result = ColonyRunner::run(&graph, 0, &config);
/// assert_eq!(result.cost, Some(5.0));
/// ```
pub struct ColonyRunner;

impl ColonyRunner {
    /// Runs the search for a tour starting (and ending) at `start`.
    ///
    /// Seeds `config.n_ants` agents on every node, runs exactly one round
    /// per node, and returns the cheapest path found by any agent seeded
    /// at `start`. The returned `expanded` slot is always `None`; the
    /// colony does not count node expansions.
    ///
    /// All randomness comes from one seeded stream consumed in a fixed
    /// agent-iteration order, so a fixed `config.seed` makes the search
    /// fully deterministic.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`ColonyConfig::validate`] first to get a descriptive error).
    pub fn run(graph: &WeightedGraph, start: usize, config: &ColonyConfig) -> SearchResult {
        config.validate().expect("invalid ColonyConfig");

        let n = graph.node_count();
        if start >= n {
            // No agent can be seeded at a node outside the graph; an empty
            // result, not a panic.
            return SearchResult::unsolved(None);
        }

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };

        // Every node seeds n_ants replicas, so a best agent for the
        // requested start always exists, dead or alive.
        let mut agents: Vec<Agent> = (0..n)
            .flat_map(|node| (0..config.n_ants).map(move |_| Agent::new(node)))
            .collect();
        let mut field = PheromoneField::new(graph);
        let model = TransitionModel::new(graph, config.alpha, config.beta);

        // One round per node: enough for a surviving agent to visit every
        // node once and close its tour. A bounded budget, not a
        // convergence criterion.
        for _ in 0..n {
            Self::round(graph, &model, &mut field, &mut agents, config, &mut rng);
        }

        let best = agents
            .iter()
            .filter(|agent| agent.start() == start)
            .min_by(|a, b| a.cost().total_cmp(&b.cost()));
        match best {
            Some(agent) => SearchResult::solved(agent.path().to_vec(), agent.cost(), None),
            None => SearchResult::unsolved(None),
        }
    }

    /// One round: every live agent attempts a move, then the field updates.
    ///
    /// The update runs strictly after the last move attempt of the round
    /// and only observes this round's moves; round `k + 1`'s transition
    /// probabilities depend on the field exactly as round `k` left it.
    fn round<R: Rng>(
        graph: &WeightedGraph,
        model: &TransitionModel<'_>,
        field: &mut PheromoneField,
        agents: &mut [Agent],
        config: &ColonyConfig,
        rng: &mut R,
    ) {
        // Move phase: the field is read-only here.
        for agent in agents.iter_mut().filter(|agent| agent.is_alive()) {
            match model.select_next(field, agent.path(), rng) {
                Some(next) => agent.advance(next, graph),
                None => agent.retire(),
            }
        }

        // Update phase: evaporate, then reinforce each survivor's latest
        // edge. The deposit divides by the agent's total accumulated cost,
        // not the last edge's weight: cheap partial tours reinforce harder
        // even mid-tour. Agents retired this round deposit nothing.
        field.evaporate(config.evaporation);
        for agent in agents.iter().filter(|agent| agent.is_alive()) {
            if let Some((prev, next)) = agent.last_edge() {
                // cost can only be zero for the trivial single-node tour
                if agent.cost() > 0.0 {
                    field.deposit(prev, next, config.deposit / agent.cost());
                }
            }
        }
    }
}
