//! Configuration for a simulation run.

use serde::{Deserialize, Serialize};

use crate::game::rules::{Rules, RulesError};

/// Configuration for one simulation run.
///
/// # Example
/// ```
/// use blackjack_sim::{Rules, SimConfig};
///
/// let config = SimConfig::default()
///     .with_hands(100_000)
///     .with_rules(Rules::s17())
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of initial hands (rounds) to simulate.
    pub hands: u64,

    /// Table rules for every round of the run.
    pub rules: Rules,

    /// Random seed for reproducibility.
    ///
    /// Identical `(hands, rules, seed)` produce identical results,
    /// independent of thread count. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Number of worker threads.
    ///
    /// `None` uses the global rayon pool; `Some(1)` is effectively
    /// single-threaded. Thread count never changes the results.
    pub threads: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            hands: 300_000,
            rules: Rules::default(),
            seed: None,
            threads: None,
        }
    }
}

impl SimConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the number of hands.
    pub fn with_hands(mut self, hands: u64) -> Self {
        self.hands = hands;
        self
    }

    /// Builder method: set the table rules.
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Builder method: set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder method: set the number of worker threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hands == 0 {
            return Err(ConfigError::ZeroHands);
        }
        self.rules.validate().map_err(ConfigError::Rules)?;
        Ok(())
    }
}

/// Errors from simulation-configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `hands` was zero.
    ZeroHands,
    /// The rule set failed validation.
    Rules(RulesError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroHands => write!(f, "hands must be at least 1"),
            ConfigError::Rules(e) => write!(f, "invalid rules: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
