//! Draw sources.
//!
//! The engine pulls single cards through the [`DrawSource`] trait, so the
//! infinite-replacement model used for simulation and any finite shoe are
//! interchangeable. Exhaustion is signalled through the return value; the
//! infinite shoe never raises it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::card::{Card, NUM_RANKS};

/// A source of single cards.
pub trait DrawSource {
    /// Deal the next card, or `None` when the source is exhausted.
    fn next_card(&mut self) -> Option<Card>;
}

/// Infinite-replacement draw source: every rank is equally likely on
/// every draw, independent of history.
#[derive(Debug, Clone)]
pub struct InfiniteShoe<R: Rng = StdRng> {
    rng: R,
}

impl InfiniteShoe<StdRng> {
    /// Create a shoe with a deterministic seed. Two shoes with the same
    /// seed deal the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a shoe seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl<R: Rng> InfiniteShoe<R> {
    /// Create a shoe over an existing RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DrawSource for InfiniteShoe<R> {
    fn next_card(&mut self) -> Option<Card> {
        Some(Card::new(self.rng.gen_range(0..NUM_RANKS)))
    }
}

/// A finite draw source dealing a fixed card sequence in order.
///
/// Exhausts after the last card. Used by tests to script exact deals, and
/// doubles as the proof that a finite shoe slots in without touching the
/// round resolver.
#[derive(Debug, Clone, Default)]
pub struct FixedShoe {
    cards: Vec<Card>,
    index: usize,
}

impl FixedShoe {
    /// Create a shoe dealing `cards` front to back.
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards, index: 0 }
    }

    /// Create a shoe from rank characters, e.g. `"A6KT"`.
    ///
    /// # Panics
    /// Panics on a character that is not a rank.
    pub fn from_ranks(ranks: &str) -> Self {
        let cards = ranks
            .chars()
            .map(|c| Card::from_char(c).unwrap_or_else(|| panic!("bad rank char {:?}", c)))
            .collect();
        Self::new(cards)
    }

    /// Number of cards left to deal.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.index
    }
}

impl DrawSource for FixedShoe {
    fn next_card(&mut self) -> Option<Card> {
        let card = self.cards.get(self.index).copied()?;
        self.index += 1;
        Some(card)
    }
}
