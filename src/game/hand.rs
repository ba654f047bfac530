//! Hand valuation and the player hand type.
//!
//! The evaluator is pure: a hand's total is the highest total not
//! exceeding 21 reachable by counting each Ace as 11 or 1 (or the lowest
//! bust total when none exists). A hand is *soft* while an Ace is still
//! counted as 11.

use std::fmt;

use crate::game::card::Card;

/// Best total and softness of a set of cards.
///
/// Every Ace starts at 11; while the total exceeds 21 and an Ace is still
/// counted high, one Ace is demoted (−10). Returns `(total, is_soft)`
/// where `is_soft` is true iff an Ace remains counted as 11.
pub fn hand_value(cards: &[Card]) -> (u8, bool) {
    let mut total: u32 = 0;
    let mut aces = 0u32;
    for card in cards {
        let v = card.value() as u32;
        if v == 11 {
            aces += 1;
        }
        total += v;
    }
    while total > 21 && aces > 0 {
        total -= 10;
        aces -= 1;
    }
    (total as u8, aces > 0)
}

/// Whether the cards form a natural: exactly two cards totaling 21.
///
/// Lineage is not visible here; `Hand::is_blackjack` additionally rules
/// out split hands.
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_value(cards).0 == 21
}

/// A player hand: its cards, the bet multiplier riding on it, and whether
/// it descends from a split.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    cards: Vec<Card>,
    /// Bet multiplier in units of the base bet: 1.0, or 2.0 after a double.
    pub bet: f64,
    /// True for hands created by splitting a pair. Split hands never
    /// qualify for natural pricing, and `das` gates their doubles.
    pub from_split: bool,
}

impl Hand {
    /// Create the original two-card hand of a round.
    pub fn deal(first: Card, second: Card) -> Self {
        Self {
            cards: vec![first, second],
            bet: 1.0,
            from_split: false,
        }
    }

    /// Create one child of a split: one card of the pair plus a fresh draw.
    pub fn split_child(kept: Card, drawn: Card) -> Self {
        Self {
            cards: vec![kept, drawn],
            bet: 1.0,
            from_split: true,
        }
    }

    /// The cards in deal order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the hand has no cards. Never true for a dealt hand.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Append a drawn card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Best total of the hand.
    pub fn total(&self) -> u8 {
        hand_value(&self.cards).0
    }

    /// Whether an Ace is currently counted as 11.
    pub fn is_soft(&self) -> bool {
        hand_value(&self.cards).1
    }

    /// Whether the hand has busted.
    pub fn is_bust(&self) -> bool {
        self.total() > 21
    }

    /// Whether the hand is a natural blackjack. Only the original
    /// (non-split) two-card hand can qualify.
    pub fn is_blackjack(&self) -> bool {
        !self.from_split && is_blackjack(&self.cards)
    }

    /// Whether the hand is a splittable pair: exactly two cards of equal
    /// value (ten-value cards pair with each other).
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].value() == self.cards[1].value()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{}", card)?;
        }
        let (total, soft) = hand_value(&self.cards);
        write!(f, " ({}{})", if soft { "soft " } else { "" }, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::card::*;

    fn cards(s: &str) -> Vec<Card> {
        s.chars().map(|c| Card::from_char(c).unwrap()).collect()
    }

    #[test]
    fn test_simple_totals() {
        assert_eq!(hand_value(&cards("23")), (5, false));
        assert_eq!(hand_value(&cards("KQ")), (20, false));
    }

    #[test]
    fn test_soft_ace() {
        assert_eq!(hand_value(&cards("A6")), (17, true));
    }

    #[test]
    fn test_demoted_ace() {
        // Counting the Ace as 11 would bust, so it counts as 1.
        assert_eq!(hand_value(&cards("T9A")), (20, false));
    }

    #[test]
    fn test_two_aces_nine() {
        // One Ace stays at 11, the other demotes: 11 + 1 + 9 = 21.
        assert_eq!(hand_value(&cards("AA9")), (21, true));
    }

    #[test]
    fn test_many_aces() {
        assert_eq!(hand_value(&cards("AAAA")), (14, true));
        assert_eq!(hand_value(&cards("AAAAK")), (14, false));
    }

    #[test]
    fn test_bust_total() {
        assert_eq!(hand_value(&cards("KQ5")), (25, false));
    }

    #[test]
    fn test_is_blackjack() {
        assert!(is_blackjack(&cards("AK")));
        assert!(is_blackjack(&cards("TA")));
        assert!(!is_blackjack(&cards("AK9")));
        assert!(!is_blackjack(&cards("KQ")));
    }

    #[test]
    fn test_split_hand_never_blackjack() {
        let hand = Hand::split_child(
            Card::from_char('A').unwrap(),
            Card::from_char('K').unwrap(),
        );
        assert_eq!(hand.total(), 21);
        assert!(!hand.is_blackjack());
    }

    #[test]
    fn test_pair_by_value() {
        let hand = Hand::deal(
            Card::from_char('K').unwrap(),
            Card::from_char('Q').unwrap(),
        );
        assert!(hand.is_pair());

        let mut three = hand.clone();
        three.push(Card::from_char('2').unwrap());
        assert!(!three.is_pair());

        let mixed = Hand::deal(
            Card::from_char('8').unwrap(),
            Card::from_char('9').unwrap(),
        );
        assert!(!mixed.is_pair());
    }

    #[test]
    fn test_deal_defaults() {
        let hand = Hand::deal(
            Card::from_char('8').unwrap(),
            Card::from_char('8').unwrap(),
        );
        assert_eq!(hand.bet, 1.0);
        assert!(!hand.from_split);
        assert_eq!(hand.len(), 2);
    }
}
