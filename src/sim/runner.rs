//! Simulation driver.
//!
//! Partitions a run into fixed-size chunks, plays every chunk through the
//! round resolver with the basic-strategy actor, and merges the chunk
//! trackers in order. Each chunk owns an independently seeded shoe and
//! its own trackers, so chunks parallelize freely and the merged result
//! is a function of `(hands, rules, seed)` alone — never of thread count
//! or scheduling.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game::rules::Rules;
use crate::game::shoe::InfiniteShoe;
use crate::sim::config::{ConfigError, SimConfig};
use crate::sim::round::{play_hand_once, RoundError};
use crate::sim::trackers::Trackers;
use crate::strategy::BasicStrategy;

/// Rounds per work chunk. Small enough to keep progress reporting live,
/// large enough that per-chunk setup is noise.
const CHUNK_HANDS: u64 = 4096;

/// Odd 64-bit constant for deriving per-chunk seeds (the splitmix64
/// increment).
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Headline numbers of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of initial hands simulated.
    pub hands_simulated: u64,
    /// Rule label, "H17" or "S17".
    pub rule: String,
    /// Share of resolved hands won (naturals and dealer busts included).
    pub win_rate: f64,
    /// Share of resolved hands lost (dealer naturals and surrenders
    /// included).
    pub loss_rate: f64,
    /// Share of resolved hands pushed.
    pub push_rate: f64,
    /// Net units won over the whole run.
    pub total_units: f64,
    /// Expected value per initial bet.
    pub ev_per_hand: f64,
}

impl Summary {
    fn compute(hands: u64, rule: &str, total_units: f64, trackers: &Trackers) -> Self {
        let resolved = trackers.outcomes.resolved();
        let rate = |count: u64| {
            if resolved == 0 {
                0.0
            } else {
                count as f64 / resolved as f64
            }
        };
        Self {
            hands_simulated: hands,
            rule: rule.to_string(),
            win_rate: rate(trackers.outcomes.wins()),
            loss_rate: rate(trackers.outcomes.losses()),
            push_rate: rate(trackers.outcomes.pushes()),
            total_units,
            ev_per_hand: total_units / hands as f64,
        }
    }
}

/// Everything a finished run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimReport {
    /// Headline numbers.
    pub summary: Summary,
    /// Full aggregate trackers for downstream reporting.
    pub trackers: Trackers,
}

/// Errors a simulation run can surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// A round failed mid-run.
    Round(RoundError),
    /// The dedicated thread pool could not be built.
    ThreadPool(String),
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::Config(e) => write!(f, "invalid configuration: {}", e),
            SimError::Round(e) => write!(f, "round failed: {}", e),
            SimError::ThreadPool(e) => write!(f, "could not build thread pool: {}", e),
        }
    }
}

impl std::error::Error for SimError {}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        SimError::Config(e)
    }
}

impl From<RoundError> for SimError {
    fn from(e: RoundError) -> Self {
        SimError::Round(e)
    }
}

/// Drives many rounds and aggregates their outcomes.
///
/// # Example
/// ```
/// use blackjack_sim::{SimConfig, Simulator};
///
/// let config = SimConfig::default().with_hands(10_000).with_seed(42);
/// let report = Simulator::new(config).run().unwrap();
/// assert!(report.trackers.outcomes.resolved() >= 10_000);
/// ```
pub struct Simulator {
    config: SimConfig,
}

impl Simulator {
    /// Create a simulator for the given configuration.
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    /// The configuration this simulator runs.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run the full simulation.
    pub fn run(&self) -> Result<SimReport, SimError> {
        self.run_with_progress(|_| {})
    }

    /// Run the full simulation, reporting completed rounds through
    /// `progress` (called once per finished chunk, from worker threads).
    pub fn run_with_progress<F>(&self, progress: F) -> Result<SimReport, SimError>
    where
        F: Fn(u64) + Sync,
    {
        self.config.validate()?;
        let hands = self.config.hands;
        let rules = self.config.rules;
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let num_chunks = (hands + CHUNK_HANDS - 1) / CHUNK_HANDS;

        let run_chunks = || -> Result<Vec<(Trackers, f64)>, RoundError> {
            (0..num_chunks)
                .into_par_iter()
                .map(|chunk| {
                    let len = CHUNK_HANDS.min(hands - chunk * CHUNK_HANDS);
                    let chunk_seed = seed.wrapping_add(chunk.wrapping_mul(SEED_STRIDE));
                    let result = run_chunk(chunk_seed, len, rules);
                    if result.is_ok() {
                        progress(len);
                    }
                    result
                })
                .collect()
        };

        let chunks = match self.config.threads {
            Some(n) if n > 0 => rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| SimError::ThreadPool(e.to_string()))?
                .install(run_chunks),
            _ => run_chunks(),
        }?;

        let mut trackers = Trackers::new();
        let mut total_units = 0.0;
        for (chunk_trackers, chunk_units) in &chunks {
            trackers.merge(chunk_trackers);
            total_units += chunk_units;
        }

        let summary = Summary::compute(hands, rules.label(), total_units, &trackers);
        Ok(SimReport { summary, trackers })
    }
}

/// Play one chunk of rounds on its own shoe and trackers.
fn run_chunk(seed: u64, hands: u64, rules: Rules) -> Result<(Trackers, f64), RoundError> {
    let mut shoe = InfiniteShoe::seeded(seed);
    let mut actor = BasicStrategy;
    let mut trackers = Trackers::new();
    let mut units = 0.0;
    for _ in 0..hands {
        for outcome in play_hand_once(&mut shoe, &mut actor, &rules, &mut trackers)? {
            trackers.record_outcome(outcome.result);
            units += outcome.payoff;
        }
    }
    Ok((trackers, units))
}

/// Run `hands` rounds under the default rules with the given soft-17
/// setting and seed, returning the summary and trackers.
pub fn simulate(
    hands: u64,
    hit_soft_17: bool,
    seed: u64,
) -> Result<(Summary, Trackers), SimError> {
    let rules = Rules::default().with_hit_soft_17(hit_soft_17);
    let config = SimConfig::default()
        .with_hands(hands)
        .with_rules(rules)
        .with_seed(seed);
    let report = Simulator::new(config).run()?;
    Ok((report.summary, report.trackers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_inputs_reproduce_exactly() {
        let (summary_a, trackers_a) = simulate(10_000, true, 42).unwrap();
        let (summary_b, trackers_b) = simulate(10_000, true, 42).unwrap();
        assert_eq!(summary_a, summary_b);
        assert_eq!(trackers_a, trackers_b);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let (_, trackers_a) = simulate(5_000, true, 1).unwrap();
        let (_, trackers_b) = simulate(5_000, true, 2).unwrap();
        assert_ne!(trackers_a, trackers_b);
    }

    #[test]
    fn test_thread_count_does_not_change_results() {
        let base = SimConfig::default().with_hands(10_000).with_seed(7);
        let single = Simulator::new(base.clone().with_threads(1)).run().unwrap();
        let multi = Simulator::new(base.with_threads(4)).run().unwrap();
        assert_eq!(single, multi);
    }

    #[test]
    fn test_every_round_resolves() {
        let (summary, trackers) = simulate(8_000, true, 3).unwrap();
        // Splits add hands, so resolved >= rounds.
        assert!(trackers.outcomes.resolved() >= 8_000);
        assert_eq!(summary.hands_simulated, 8_000);
        let rate_sum = summary.win_rate + summary.loss_rate + summary.push_rate;
        assert!((rate_sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_rule_label_follows_config() {
        let (summary, _) = simulate(1_000, false, 11).unwrap();
        assert_eq!(summary.rule, "S17");
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = SimConfig::default().with_hands(0);
        assert!(matches!(
            Simulator::new(config).run(),
            Err(SimError::Config(ConfigError::ZeroHands))
        ));
    }

    #[test]
    fn test_progress_reports_all_hands() {
        use std::sync::atomic::{AtomicU64, Ordering};
        let seen = AtomicU64::new(0);
        let config = SimConfig::default().with_hands(9_000).with_seed(5);
        Simulator::new(config)
            .run_with_progress(|done| {
                seen.fetch_add(done, Ordering::Relaxed);
            })
            .unwrap();
        assert_eq!(seen.load(Ordering::Relaxed), 9_000);
    }
}
