//! Dealer policy.
//!
//! The dealer has no decisions: hit below 17, and on a soft 17 exactly
//! when the rules say so. Terminates because every draw raises the hard
//! total and a soft 17 hardens after at most a few draws.

use crate::game::card::Card;
use crate::game::hand::hand_value;
use crate::game::shoe::DrawSource;

/// Play out the dealer's hand in place and return its final total.
///
/// Draws while the total is below 17, or exactly a soft 17 with
/// `hit_soft_17` set. Returns `None` if the draw source exhausts before
/// the dealer finishes.
pub fn dealer_play<S: DrawSource>(
    cards: &mut Vec<Card>,
    hit_soft_17: bool,
    shoe: &mut S,
) -> Option<u8> {
    loop {
        let (total, soft) = hand_value(cards);
        if total < 17 || (total == 17 && soft && hit_soft_17) {
            cards.push(shoe.next_card()?);
        } else {
            return Some(total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::shoe::FixedShoe;

    fn cards(s: &str) -> Vec<Card> {
        s.chars().map(|c| Card::from_char(c).unwrap()).collect()
    }

    #[test]
    fn test_s17_stands_on_soft_17() {
        let mut dealer = cards("A6");
        let mut shoe = FixedShoe::from_ranks("");
        // No cards available, but none are needed under S17.
        assert_eq!(dealer_play(&mut dealer, false, &mut shoe), Some(17));
        assert_eq!(dealer.len(), 2);
    }

    #[test]
    fn test_h17_hits_soft_17() {
        let mut dealer = cards("A6");
        let mut shoe = FixedShoe::from_ranks("K");
        // A6 is soft 17; under H17 the dealer draws and lands on hard 17.
        assert_eq!(dealer_play(&mut dealer, true, &mut shoe), Some(17));
        assert_eq!(dealer.len(), 3);
    }

    #[test]
    fn test_stands_on_hard_17() {
        let mut dealer = cards("T7");
        let mut shoe = FixedShoe::from_ranks("");
        assert_eq!(dealer_play(&mut dealer, true, &mut shoe), Some(17));
    }

    #[test]
    fn test_draws_to_16() {
        let mut dealer = cards("T6");
        let mut shoe = FixedShoe::from_ranks("5");
        assert_eq!(dealer_play(&mut dealer, false, &mut shoe), Some(21));
        assert_eq!(dealer.len(), 3);
    }

    #[test]
    fn test_can_bust() {
        let mut dealer = cards("T6");
        let mut shoe = FixedShoe::from_ranks("K");
        assert_eq!(dealer_play(&mut dealer, false, &mut shoe), Some(26));
    }

    #[test]
    fn test_exhausted_source() {
        let mut dealer = cards("T6");
        let mut shoe = FixedShoe::from_ranks("");
        assert_eq!(dealer_play(&mut dealer, false, &mut shoe), None);
    }
}
