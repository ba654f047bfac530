//! Aggregate statistics for one simulation run.
//!
//! A `Trackers` value is owned by a single run: created at start, mutated
//! once per resolved hand, read at the end. Parallel workers each own an
//! independent instance and [`Trackers::merge`] folds them together —
//! plain counter and histogram summation, so the merge is commutative and
//! order-independent in value (the runner still merges in chunk order).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::sim::round::ResultKind;

/// Count of resolved hands per result kind. Kinds are exclusive: every
/// resolved hand increments exactly one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeCounts {
    /// Wins against a standing dealer.
    pub win: u64,
    /// Losses: busts and lost comparisons.
    pub loss: u64,
    /// Equal totals.
    pub push: u64,
    /// Naturals paid at the configured odds.
    pub blackjack_win: u64,
    /// Player natural against a dealer natural.
    pub blackjack_push: u64,
    /// Surrendered hands.
    pub surrender: u64,
    /// Hands lost to a peeked dealer natural.
    pub dealer_blackjack: u64,
    /// Wins where the dealer busted.
    pub dealer_bust_win: u64,
}

impl OutcomeCounts {
    /// Increment the counter for `kind`.
    pub fn record(&mut self, kind: ResultKind) {
        match kind {
            ResultKind::Win => self.win += 1,
            ResultKind::Loss => self.loss += 1,
            ResultKind::Push => self.push += 1,
            ResultKind::BlackjackWin => self.blackjack_win += 1,
            ResultKind::BlackjackPush => self.blackjack_push += 1,
            ResultKind::Surrender => self.surrender += 1,
            ResultKind::DealerBlackjack => self.dealer_blackjack += 1,
            ResultKind::DealerBustWin => self.dealer_bust_win += 1,
        }
    }

    /// Hands won, counting naturals and dealer busts.
    pub fn wins(&self) -> u64 {
        self.win + self.blackjack_win + self.dealer_bust_win
    }

    /// Hands lost, counting dealer naturals and surrenders.
    pub fn losses(&self) -> u64 {
        self.loss + self.dealer_blackjack + self.surrender
    }

    /// Hands pushed, counting natural-against-natural.
    pub fn pushes(&self) -> u64 {
        self.push + self.blackjack_push
    }

    /// Total resolved hands.
    pub fn resolved(&self) -> u64 {
        self.wins() + self.losses() + self.pushes()
    }

    fn merge(&mut self, other: &Self) {
        self.win += other.win;
        self.loss += other.loss;
        self.push += other.push;
        self.blackjack_win += other.blackjack_win;
        self.blackjack_push += other.blackjack_push;
        self.surrender += other.surrender;
        self.dealer_blackjack += other.dealer_blackjack;
        self.dealer_bust_win += other.dealer_bust_win;
    }
}

/// Miscellaneous event counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    /// Player hands that busted, doubled busts included.
    pub player_bust: u64,
    /// Rounds in which the dealer busted.
    pub dealer_bust: u64,
    /// Doubles taken.
    pub doubles: u64,
    /// Split events.
    pub splits: u64,
}

impl Counters {
    fn merge(&mut self, other: &Self) {
        self.player_bust += other.player_bust;
        self.dealer_bust += other.dealer_bust;
        self.doubles += other.doubles;
        self.splits += other.splits;
    }
}

/// All aggregate state of one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trackers {
    /// Per-kind outcome counts.
    pub outcomes: OutcomeCounts,
    /// Event counters.
    pub counters: Counters,
    /// Final totals (4..=21) of standing hands. Busted and surrendered
    /// hands are not in here.
    pub player_totals: FxHashMap<u8, u64>,
    /// Dealer final totals (17..=21), one entry per round in which the
    /// dealer played; busts are counted in `counters.dealer_bust`.
    pub dealer_totals: FxHashMap<u8, u64>,
}

impl Trackers {
    /// Create empty trackers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one resolved hand's result kind in.
    pub fn record_outcome(&mut self, kind: ResultKind) {
        self.outcomes.record(kind);
    }

    /// Sum another run's (or worker's) trackers into this one.
    pub fn merge(&mut self, other: &Trackers) {
        self.outcomes.merge(&other.outcomes);
        self.counters.merge(&other.counters);
        for (total, count) in &other.player_totals {
            *self.player_totals.entry(*total).or_insert(0) += count;
        }
        for (total, count) in &other.dealer_totals {
            *self.dealer_totals.entry(*total).or_insert(0) += count;
        }
    }
}
