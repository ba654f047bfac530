//! Simulation engine.
//!
//! The round resolver plays single rounds against a draw source; the
//! runner drives it for a configured number of rounds, chunked for
//! parallelism, and folds everything into [`Trackers`] and a [`Summary`].
//!
//! # Usage
//!
//! ```
//! use blackjack_sim::simulate;
//!
//! let (summary, trackers) = simulate(10_000, true, 42).unwrap();
//! assert_eq!(summary.rule, "H17");
//! assert!(trackers.outcomes.resolved() >= 10_000);
//! ```

pub mod config;
pub mod round;
pub mod runner;
pub mod trackers;

// Re-export main types for convenient access
pub use config::{ConfigError, SimConfig};
pub use round::{play_hand_once, Actor, Outcome, ResultKind, RoundError};
pub use runner::{simulate, SimError, SimReport, Simulator, Summary};
pub use trackers::{Counters, OutcomeCounts, Trackers};
