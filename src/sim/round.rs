//! Round resolver.
//!
//! Plays one full round from a two-card deal to a list of `(result,
//! payoff)` outcomes, one per resolved hand. Splits and resplits are
//! handled through an explicit work-list stack rather than recursion, so
//! memory stays bounded by the split budget and there is no call-depth to
//! worry about. Decisions come from an [`Actor`]; the resolver computes
//! the legal [`Choices`] for every decision and rejects anything outside
//! them.

use std::fmt;

use crate::game::action::{Action, Choices};
use crate::game::card::Card;
use crate::game::dealer::dealer_play;
use crate::game::hand::{is_blackjack, Hand};
use crate::game::rules::Rules;
use crate::game::shoe::DrawSource;
use crate::sim::trackers::Trackers;

/// Something that decides how to play a hand.
///
/// The simulation runner uses [`crate::strategy::BasicStrategy`]; an
/// interactive front end implements this with a prompt. Implementations
/// may consult [`crate::strategy::recommend`] with the same inputs to
/// display the book play — that is a read-only query and does not touch
/// the round's state.
pub trait Actor {
    /// Choose an action for `hand` against `dealer_up`.
    ///
    /// The returned action must be legal under `choices`; the resolver
    /// rejects the round with [`RoundError::IllegalAction`] otherwise.
    fn act(&mut self, hand: &Hand, dealer_up: Card, choices: &Choices) -> Action;
}

/// How one resolved hand ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    /// Beat the dealer's standing total.
    Win,
    /// Busted or lost the comparison.
    Loss,
    /// Tied the dealer.
    Push,
    /// Natural blackjack, paid at the configured odds.
    BlackjackWin,
    /// Natural against a dealer natural.
    BlackjackPush,
    /// Surrendered for half the bet.
    Surrender,
    /// Lost to a peeked dealer natural.
    DealerBlackjack,
    /// Won because the dealer busted.
    DealerBustWin,
}

/// One resolved hand: its result kind and signed payoff in units of the
/// base bet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    /// What happened to the hand.
    pub result: ResultKind,
    /// Signed payoff: +1 for a plain win, −2 for a doubled loss, etc.
    pub payoff: f64,
}

/// Errors a round can surface.
///
/// Illegal moves are distinct from game-state problems: an actor asking
/// for a forbidden action is [`RoundError::IllegalAction`], a finite draw
/// source running dry mid-round is [`RoundError::ShoeExhausted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundError {
    /// The actor requested an action its `Choices` do not allow.
    IllegalAction {
        /// The rejected action.
        action: Action,
    },
    /// The draw source ran out of cards mid-round. Never raised by
    /// [`crate::game::InfiniteShoe`].
    ShoeExhausted,
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundError::IllegalAction { action } => {
                write!(f, "action {} is not legal for the current hand", action)
            }
            RoundError::ShoeExhausted => write!(f, "draw source exhausted mid-round"),
        }
    }
}

impl std::error::Error for RoundError {}

/// Terminal state a played hand reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Terminal {
    Stood,
    Busted,
    Surrendered,
}

struct Played {
    hand: Hand,
    terminal: Terminal,
}

fn draw<S: DrawSource>(shoe: &mut S) -> Result<Card, RoundError> {
    shoe.next_card().ok_or(RoundError::ShoeExhausted)
}

/// Play one round and return the ordered outcomes, one per resolved hand
/// (more than one when splits occurred).
///
/// The resolver updates the trackers' event counters and total
/// histograms as it goes; folding the returned outcome kinds into the
/// trackers is the caller's job (the runner does it per round).
pub fn play_hand_once<S: DrawSource, A: Actor>(
    shoe: &mut S,
    actor: &mut A,
    rules: &Rules,
    trackers: &mut Trackers,
) -> Result<Vec<Outcome>, RoundError> {
    let player = Hand::deal(draw(shoe)?, draw(shoe)?);
    let mut dealer = vec![draw(shoe)?, draw(shoe)?];
    let dealer_up = dealer[0];
    let dealer_natural = is_blackjack(&dealer);

    // A showing ten or Ace lets the dealer peek; a natural then resolves
    // the whole round before any player decision.
    if rules.peek && dealer_up.value() >= 10 && dealer_natural {
        let outcome = if player.is_blackjack() {
            Outcome {
                result: ResultKind::BlackjackPush,
                payoff: 0.0,
            }
        } else {
            Outcome {
                result: ResultKind::DealerBlackjack,
                payoff: -1.0,
            }
        };
        return Ok(vec![outcome]);
    }

    if player.is_blackjack() {
        let outcome = if dealer_natural {
            Outcome {
                result: ResultKind::BlackjackPush,
                payoff: 0.0,
            }
        } else {
            Outcome {
                result: ResultKind::BlackjackWin,
                payoff: rules.blackjack_payout(),
            }
        };
        return Ok(vec![outcome]);
    }

    // Work-list of hands awaiting decisions. A split continues with the
    // first child and pushes the second, so hands resolve in deal order.
    // The split budget is shared across every descendant of the round's
    // original hand.
    let mut pending = vec![player];
    let mut played: Vec<Played> = Vec::new();
    let mut splits_done: u8 = 0;

    while let Some(mut hand) = pending.pop() {
        let terminal = loop {
            let choices = Choices {
                can_double: hand.len() == 2 && (!hand.from_split || rules.das),
                can_split: hand.is_pair() && splits_done < rules.resplit_limit,
                can_surrender: rules.late_surrender && !hand.from_split && hand.len() == 2,
            };
            let action = actor.act(&hand, dealer_up, &choices);
            if !choices.allows(action) {
                return Err(RoundError::IllegalAction { action });
            }
            match action {
                Action::Surrender => break Terminal::Surrendered,
                Action::Split => {
                    splits_done += 1;
                    trackers.counters.splits += 1;
                    let (kept, moved) = (hand.cards()[0], hand.cards()[1]);
                    hand = Hand::split_child(kept, draw(shoe)?);
                    pending.push(Hand::split_child(moved, draw(shoe)?));
                }
                Action::Double => {
                    hand.bet *= 2.0;
                    trackers.counters.doubles += 1;
                    hand.push(draw(shoe)?);
                    // Terminal either way, busted or not.
                    break if hand.is_bust() {
                        Terminal::Busted
                    } else {
                        Terminal::Stood
                    };
                }
                Action::Hit => {
                    hand.push(draw(shoe)?);
                    if hand.is_bust() {
                        break Terminal::Busted;
                    }
                }
                Action::Stand => break Terminal::Stood,
            }
        };
        played.push(Played { hand, terminal });
    }

    // One resolved hand per split child plus the original; anything else
    // would corrupt the whole run's trackers.
    assert_eq!(
        played.len(),
        1 + splits_done as usize,
        "resolved hand count diverged from split count"
    );

    // The dealer plays out once per round, and only when a standing hand
    // needs the comparison.
    let mut dealer_total = None;
    if played.iter().any(|p| p.terminal == Terminal::Stood) {
        let total =
            dealer_play(&mut dealer, rules.hit_soft_17, shoe).ok_or(RoundError::ShoeExhausted)?;
        if total > 21 {
            trackers.counters.dealer_bust += 1;
        } else {
            *trackers.dealer_totals.entry(total).or_insert(0) += 1;
        }
        dealer_total = Some(total);
    }

    let mut outcomes = Vec::with_capacity(played.len());
    for p in &played {
        let outcome = match p.terminal {
            Terminal::Surrendered => Outcome {
                result: ResultKind::Surrender,
                payoff: -0.5,
            },
            Terminal::Busted => {
                trackers.counters.player_bust += 1;
                Outcome {
                    result: ResultKind::Loss,
                    payoff: -p.hand.bet,
                }
            }
            Terminal::Stood => {
                let total = p.hand.total();
                *trackers.player_totals.entry(total).or_insert(0) += 1;
                let dealer_total = dealer_total.expect("dealer plays when a hand stands");
                if dealer_total > 21 {
                    Outcome {
                        result: ResultKind::DealerBustWin,
                        payoff: p.hand.bet,
                    }
                } else if total > dealer_total {
                    Outcome {
                        result: ResultKind::Win,
                        payoff: p.hand.bet,
                    }
                } else if total < dealer_total {
                    Outcome {
                        result: ResultKind::Loss,
                        payoff: -p.hand.bet,
                    }
                } else {
                    Outcome {
                        result: ResultKind::Push,
                        payoff: 0.0,
                    }
                }
            }
        };
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rules::Rules;
    use crate::game::shoe::FixedShoe;
    use crate::strategy::BasicStrategy;

    /// Test actor that plays a fixed action sequence.
    struct Script(Vec<Action>);

    impl Actor for Script {
        fn act(&mut self, _hand: &Hand, _up: Card, _choices: &Choices) -> Action {
            self.0.remove(0)
        }
    }

    fn play<A: Actor>(
        ranks: &str,
        actor: &mut A,
        rules: &Rules,
    ) -> (Result<Vec<Outcome>, RoundError>, Trackers) {
        let mut shoe = FixedShoe::from_ranks(ranks);
        let mut trackers = Trackers::new();
        let result = play_hand_once(&mut shoe, actor, rules, &mut trackers);
        (result, trackers)
    }

    #[test]
    fn test_natural_pays_three_to_two() {
        // Player AK, dealer 99: no peek trigger, immediate natural.
        let (result, _) = play("AK99", &mut BasicStrategy, &Rules::default());
        let outcomes = result.unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].result, ResultKind::BlackjackWin);
        assert_eq!(outcomes[0].payoff, 1.5);
    }

    #[test]
    fn test_natural_even_money_without_3to2() {
        let rules = Rules::default().with_blackjack_3to2(false);
        let (result, _) = play("AK99", &mut BasicStrategy, &rules);
        assert_eq!(result.unwrap()[0].payoff, 1.0);
    }

    #[test]
    fn test_peek_resolves_dealer_natural() {
        // Dealer shows an Ace with a ten underneath; player never acts.
        let (result, _) = play("T9AK", &mut Script(vec![]), &Rules::default());
        let outcomes = result.unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].result, ResultKind::DealerBlackjack);
        assert_eq!(outcomes[0].payoff, -1.0);
    }

    #[test]
    fn test_peek_pushes_natural_against_natural() {
        let (result, _) = play("AKAT", &mut Script(vec![]), &Rules::default());
        let outcomes = result.unwrap();
        assert_eq!(outcomes[0].result, ResultKind::BlackjackPush);
        assert_eq!(outcomes[0].payoff, 0.0);
    }

    #[test]
    fn test_naturals_push_even_without_peek() {
        let rules = Rules::default().with_peek(false);
        let (result, _) = play("AKAT", &mut Script(vec![]), &rules);
        assert_eq!(result.unwrap()[0].result, ResultKind::BlackjackPush);
    }

    #[test]
    fn test_surrender_pays_half_and_draws_nothing() {
        // 16 vs ten surrenders; the shoe holds exactly the four dealt
        // cards, so any further draw would error.
        let (result, trackers) = play("T6T5", &mut BasicStrategy, &Rules::default());
        let outcomes = result.unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].result, ResultKind::Surrender);
        assert_eq!(outcomes[0].payoff, -0.5);
        // No dealer playout, no totals recorded.
        assert!(trackers.dealer_totals.is_empty());
        assert!(trackers.player_totals.is_empty());
    }

    #[test]
    fn test_hit_to_bust() {
        // 16 vs 7 hits and catches a king.
        let (result, trackers) = play("T679K", &mut BasicStrategy, &Rules::default());
        let outcomes = result.unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].result, ResultKind::Loss);
        assert_eq!(outcomes[0].payoff, -1.0);
        assert_eq!(trackers.counters.player_bust, 1);
        // Dealer never plays against a bust-only round.
        assert!(trackers.dealer_totals.is_empty());
    }

    #[test]
    fn test_stand_and_win() {
        let (result, trackers) = play("T9T7", &mut BasicStrategy, &Rules::default());
        let outcomes = result.unwrap();
        assert_eq!(outcomes[0].result, ResultKind::Win);
        assert_eq!(outcomes[0].payoff, 1.0);
        assert_eq!(trackers.player_totals[&19], 1);
        assert_eq!(trackers.dealer_totals[&17], 1);
    }

    #[test]
    fn test_dealer_bust_win_is_tracked_separately() {
        // Dealer 16 draws a king and busts.
        let (result, trackers) = play("T9T6K", &mut BasicStrategy, &Rules::default());
        let outcomes = result.unwrap();
        assert_eq!(outcomes[0].result, ResultKind::DealerBustWin);
        assert_eq!(outcomes[0].payoff, 1.0);
        assert_eq!(trackers.counters.dealer_bust, 1);
        assert!(trackers.dealer_totals.is_empty());
    }

    #[test]
    fn test_push() {
        let (result, _) = play("T9T9", &mut BasicStrategy, &Rules::default());
        let outcomes = result.unwrap();
        assert_eq!(outcomes[0].result, ResultKind::Push);
        assert_eq!(outcomes[0].payoff, 0.0);
    }

    #[test]
    fn test_doubled_bust_still_resolves() {
        // Doubling 16 is never book play, so script it: the doubled hand
        // busts and must still come back as a −2 loss.
        let (result, trackers) = play("97T9K", &mut Script(vec![Action::Double]), &Rules::default());
        let outcomes = result.unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].result, ResultKind::Loss);
        assert_eq!(outcomes[0].payoff, -2.0);
        assert_eq!(trackers.counters.doubles, 1);
        assert_eq!(trackers.counters.player_bust, 1);
    }

    #[test]
    fn test_double_win_pays_double() {
        // 11 vs ten-seven dealer: double draws a ten for 21.
        let (result, trackers) = play("65T7T", &mut Script(vec![Action::Double]), &Rules::default());
        let outcomes = result.unwrap();
        assert_eq!(outcomes[0].result, ResultKind::Win);
        assert_eq!(outcomes[0].payoff, 2.0);
        assert_eq!(trackers.counters.doubles, 1);
        assert_eq!(trackers.player_totals[&21], 1);
    }

    #[test]
    fn test_split_yields_one_outcome_per_hand() {
        let mut actor = Script(vec![Action::Split, Action::Stand, Action::Stand]);
        let (result, trackers) = play("88T923", &mut actor, &Rules::default());
        let outcomes = result.unwrap();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.result == ResultKind::Loss));
        assert!(outcomes.iter().all(|o| o.payoff == -1.0));
        assert_eq!(trackers.counters.splits, 1);
        // First child stood on 10, second on 11; dealer played once.
        assert_eq!(trackers.player_totals[&10], 1);
        assert_eq!(trackers.player_totals[&11], 1);
        assert_eq!(trackers.dealer_totals[&19], 1);
    }

    #[test]
    fn test_resplit_budget_is_shared() {
        // Eights against a 6 split twice into 8,8 / 8,T / 8,T; the third
        // pair is over budget, so the book stands it on 16.
        let rules = Rules::default().with_resplit_limit(2);
        let (result, trackers) = play("886T88TTA", &mut BasicStrategy, &rules);
        let outcomes = result.unwrap();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(trackers.counters.splits, 2);
        // Dealer drew to 17; the two 18s win, the capped 16 loses.
        let payoffs: Vec<f64> = outcomes.iter().map(|o| o.payoff).collect();
        assert_eq!(payoffs, vec![1.0, 1.0, -1.0]);
    }

    #[test]
    fn test_split_hands_never_price_as_naturals() {
        // Split aces each catch a king: 21s, not blackjacks. The book
        // stands both; dealer makes 19 and both hands win exactly +1.
        let mut actor = Script(vec![Action::Split, Action::Stand, Action::Stand]);
        let (result, _) = play("AAT9KK", &mut actor, &Rules::default());
        let outcomes = result.unwrap();
        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(|o| o.result == ResultKind::Win));
        assert!(outcomes.iter().all(|o| o.payoff == 1.0));
    }

    #[test]
    fn test_illegal_split_rejected() {
        let (result, _) = play("T6T9", &mut Script(vec![Action::Split]), &Rules::default());
        assert_eq!(
            result,
            Err(RoundError::IllegalAction {
                action: Action::Split
            })
        );
    }

    #[test]
    fn test_das_false_blocks_double_after_split() {
        let rules = Rules::default().with_das(false);
        let mut actor = Script(vec![Action::Split, Action::Double]);
        let (result, _) = play("886T23", &mut actor, &rules);
        assert_eq!(
            result,
            Err(RoundError::IllegalAction {
                action: Action::Double
            })
        );
    }

    #[test]
    fn test_no_surrender_on_split_hands() {
        let mut actor = Script(vec![Action::Split, Action::Surrender]);
        let (result, _) = play("886T23", &mut actor, &Rules::default());
        assert_eq!(
            result,
            Err(RoundError::IllegalAction {
                action: Action::Surrender
            })
        );
    }

    #[test]
    fn test_exhausted_shoe_surfaces() {
        let (result, _) = play("T6", &mut Script(vec![]), &Rules::default());
        assert_eq!(result, Err(RoundError::ShoeExhausted));
    }
}
