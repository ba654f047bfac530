//! Player actions and per-decision eligibility.

use std::fmt;

/// A player decision at one point in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one card and keep deciding.
    Hit,
    /// Stop drawing; await the dealer.
    Stand,
    /// Double the bet, draw exactly one card, end the hand.
    Double,
    /// Split a pair into two independent hands.
    Split,
    /// Forfeit half the bet and end the hand immediately.
    Surrender,
}

impl Action {
    /// One-letter chart symbol (H/S/D/P/R).
    pub fn symbol(&self) -> &'static str {
        match self {
            Action::Hit => "H",
            Action::Stand => "S",
            Action::Double => "D",
            Action::Split => "P",
            Action::Surrender => "R",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Hit => write!(f, "Hit"),
            Action::Stand => write!(f, "Stand"),
            Action::Double => write!(f, "Double"),
            Action::Split => write!(f, "Split"),
            Action::Surrender => write!(f, "Surrender"),
        }
    }
}

/// Which actions are legal for the current decision.
///
/// Computed by the round resolver from the hand, its lineage, and the
/// rule set; hit and stand are always legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Choices {
    /// Two cards, and either not a split hand or doubling after split is
    /// allowed.
    pub can_double: bool,
    /// A pair with split budget remaining.
    pub can_split: bool,
    /// First decision of the original hand with late surrender enabled.
    pub can_surrender: bool,
}

impl Choices {
    /// Whether `action` is legal under these choices.
    pub fn allows(&self, action: Action) -> bool {
        match action {
            Action::Hit | Action::Stand => true,
            Action::Double => self.can_double,
            Action::Split => self.can_split,
            Action::Surrender => self.can_surrender,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_and_stand_always_legal() {
        let none = Choices::default();
        assert!(none.allows(Action::Hit));
        assert!(none.allows(Action::Stand));
        assert!(!none.allows(Action::Double));
        assert!(!none.allows(Action::Split));
        assert!(!none.allows(Action::Surrender));
    }

    #[test]
    fn test_gated_actions() {
        let all = Choices {
            can_double: true,
            can_split: true,
            can_surrender: true,
        };
        assert!(all.allows(Action::Double));
        assert!(all.allows(Action::Split));
        assert!(all.allows(Action::Surrender));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Action::Split.symbol(), "P");
        assert_eq!(Action::Surrender.symbol(), "R");
    }
}
