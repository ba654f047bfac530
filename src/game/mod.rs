//! Blackjack domain types.
//!
//! The leaves of the crate: cards, hand valuation, player actions, rule
//! configuration, draw sources, and the dealer policy. Everything here is
//! either pure or parameterized over a [`DrawSource`]; the round engine
//! in [`crate::sim`] composes these.

pub mod action;
pub mod card;
pub mod dealer;
pub mod hand;
pub mod rules;
pub mod shoe;

// Re-export main types for convenient access
pub use action::{Action, Choices};
pub use card::Card;
pub use dealer::dealer_play;
pub use hand::{hand_value, is_blackjack, Hand};
pub use rules::{Rules, RulesError, MAX_RESPLIT_LIMIT};
pub use shoe::{DrawSource, FixedShoe, InfiniteShoe};
