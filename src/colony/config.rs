//! Colony optimizer configuration.

/// Configuration for the colony optimizer.
///
/// # Examples
///
/// ```
/// use tsp_colony::colony::ColonyConfig;
///
/// let config = ColonyConfig::default()
///     .with_n_ants(20)
///     .with_evaporation(0.95)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct ColonyConfig {
    /// Number of agents seeded per start node. Every node gets this many
    /// replicas, so the population size is `n_ants * node_count`.
    pub n_ants: usize,

    /// Deposit constant `Q`: a surviving agent adds `Q / total_cost` of
    /// pheromone to the edge it just traversed.
    pub deposit: f64,

    /// Retention factor `rho` in `(0, 1]` applied to every pheromone level
    /// once per round. Lower values forget faster; `1.0` disables
    /// evaporation entirely.
    pub evaporation: f64,

    /// Exponent `alpha` weighting the pheromone level in the selection
    /// probability. `0` makes the choice ignore pheromone.
    pub alpha: f64,

    /// Exponent `beta` weighting edge visibility (inverse cost) in the
    /// selection probability.
    pub beta: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            n_ants: 50,
            deposit: 100.0,
            evaporation: 0.99,
            alpha: 1.0,
            beta: 5.0,
            seed: None,
        }
    }
}

impl ColonyConfig {
    pub fn with_n_ants(mut self, n: usize) -> Self {
        self.n_ants = n;
        self
    }

    pub fn with_deposit(mut self, q: f64) -> Self {
        self.deposit = q;
        self
    }

    pub fn with_evaporation(mut self, rho: f64) -> Self {
        self.evaporation = rho;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.n_ants == 0 {
            return Err("n_ants must be at least 1".into());
        }
        if self.deposit <= 0.0 {
            return Err(format!("deposit must be positive, got {}", self.deposit));
        }
        if self.evaporation <= 0.0 || self.evaporation > 1.0 {
            return Err(format!(
                "evaporation must be in (0, 1], got {}",
                self.evaporation
            ));
        }
        if self.alpha < 0.0 {
            return Err(format!("alpha must be non-negative, got {}", self.alpha));
        }
        if self.beta < 0.0 {
            return Err(format!("beta must be non-negative, got {}", self.beta));
        }
        Ok(())
    }
}
