//! # Blackjack Sim
//!
//! A Monte Carlo blackjack simulator: plays independent rounds under an
//! infinite-replacement draw model, resolves splits and resplits through
//! an explicit work-list, and aggregates outcome statistics across a run.
//!
//! ## Features
//!
//! - **Configurable rules**: soft-17, late surrender, DAS, resplit limit,
//!   peek, 3:2 naturals
//! - **Table-driven basic strategy**: the chart is constant data, not
//!   branching logic
//! - **Pluggable decisions and draws**: the `Actor` and `DrawSource`
//!   traits swap in an interactive player or a finite shoe
//! - **Reproducible**: identical `(hands, rules, seed)` give identical
//!   results, independent of thread count
//! - **Parallel**: chunked across rayon workers, merged deterministically
//!
//! ## Quick Start
//!
//! ```
//! use blackjack_sim::simulate;
//!
//! let (summary, trackers) = simulate(10_000, true, 42).unwrap();
//! println!("EV per hand: {:.3}%", summary.ev_per_hand * 100.0);
//! println!("Splits: {}", trackers.counters.splits);
//! ```
//!
//! ## Modules
//!
//! - [`game`]: Cards, hands, rules, draw sources, and the dealer policy
//! - [`strategy`]: The basic-strategy chart and advisor
//! - [`sim`]: The round resolver and the simulation runner
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                 Simulation Runner                   │
//! │  - Chunked round loop     - Tracker aggregation     │
//! └─────────────────────────────────────────────────────┘
//!                           │ drives
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                  Round Resolver                     │
//! │  - Peek / naturals        - Split work-list         │
//! │  - Decision loop          - Dealer comparison       │
//! └─────────────────────────────────────────────────────┘
//!            │                 │                │
//!            ▼                 ▼                ▼
//!      ┌──────────┐     ┌────────────┐   ┌────────────┐
//!      │ Strategy │     │   Dealer   │   │    Draw    │
//!      │ Advisor  │     │   Policy   │   │   Source   │
//!      └──────────┘     └────────────┘   └────────────┘
//!            └────────────────┴── Hand Evaluator ──┘
//! ```

#![warn(missing_docs)]

/// Blackjack domain types: cards, hands, rules, draw sources, dealer.
pub mod game;

/// Simulation engine: round resolver, runner, trackers.
pub mod sim;

/// Basic-strategy chart and advisor.
pub mod strategy;

// Re-export commonly used types at crate root for convenience
pub use game::{
    dealer_play, hand_value, is_blackjack, Action, Card, Choices, DrawSource, FixedShoe, Hand,
    InfiniteShoe, Rules, RulesError,
};
pub use sim::{
    play_hand_once, simulate, Actor, ConfigError, Outcome, ResultKind, RoundError, SimConfig,
    SimError, SimReport, Simulator, Summary, Trackers,
};
pub use strategy::{recommend, BasicStrategy};
