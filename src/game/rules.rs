//! Table rule configuration.
//!
//! A `Rules` value is immutable for the duration of a run. All options
//! have the common H17 table as defaults, and a partial JSON document
//! deserializes with those defaults filled in; unrecognized keys are
//! rejected.

use serde::{Deserialize, Serialize};

/// Largest accepted `resplit_limit`. Bounds the resolver's work-list;
/// no real table allows anywhere near this many splits.
pub const MAX_RESPLIT_LIMIT: u8 = 32;

/// Configurable blackjack rules.
///
/// # Example
/// ```
/// use blackjack_sim::Rules;
///
/// let rules = Rules::default();
/// assert!(rules.hit_soft_17);
/// assert_eq!(rules.resplit_limit, 3);
///
/// let rules: Rules = serde_json::from_str(r#"{"hit_soft_17": false}"#).unwrap();
/// assert_eq!(rules.label(), "S17");
/// assert!(rules.blackjack_3to2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    /// Dealer hits a soft 17.
    pub hit_soft_17: bool,

    /// Player may surrender half the bet on the first decision of the
    /// original hand.
    pub late_surrender: bool,

    /// Doubling allowed on hands produced by a split.
    pub das: bool,

    /// Maximum number of split events per original hand, shared across
    /// all of its descendants.
    pub resplit_limit: u8,

    /// Dealer checks for a natural before the player acts when showing a
    /// ten-value card or an Ace.
    pub peek: bool,

    /// A natural pays 3:2; when false it pays even money.
    pub blackjack_3to2: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self::h17()
    }
}

impl Rules {
    /// Common H17 rules: dealer hits soft 17, late surrender, DAS,
    /// three resplits, peek, 3:2 naturals.
    pub fn h17() -> Self {
        Self {
            hit_soft_17: true,
            late_surrender: true,
            das: true,
            resplit_limit: 3,
            peek: true,
            blackjack_3to2: true,
        }
    }

    /// S17 variant of the defaults: dealer stands on all 17s.
    pub fn s17() -> Self {
        Self {
            hit_soft_17: false,
            ..Self::h17()
        }
    }

    /// Builder method: set the dealer soft-17 rule.
    pub fn with_hit_soft_17(mut self, enable: bool) -> Self {
        self.hit_soft_17 = enable;
        self
    }

    /// Builder method: set late surrender availability.
    pub fn with_late_surrender(mut self, enable: bool) -> Self {
        self.late_surrender = enable;
        self
    }

    /// Builder method: set double-after-split availability.
    pub fn with_das(mut self, enable: bool) -> Self {
        self.das = enable;
        self
    }

    /// Builder method: set the shared split budget per original hand.
    pub fn with_resplit_limit(mut self, limit: u8) -> Self {
        self.resplit_limit = limit;
        self
    }

    /// Builder method: set dealer peek.
    pub fn with_peek(mut self, enable: bool) -> Self {
        self.peek = enable;
        self
    }

    /// Builder method: set the natural payout to 3:2 (true) or even money.
    pub fn with_blackjack_3to2(mut self, enable: bool) -> Self {
        self.blackjack_3to2 = enable;
        self
    }

    /// Short rule label for summaries: "H17" or "S17".
    pub fn label(&self) -> &'static str {
        if self.hit_soft_17 {
            "H17"
        } else {
            "S17"
        }
    }

    /// Payoff of a winning natural in units of the base bet.
    pub fn blackjack_payout(&self) -> f64 {
        if self.blackjack_3to2 {
            1.5
        } else {
            1.0
        }
    }

    /// Validate the rule set, failing fast before any round is played.
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.resplit_limit > MAX_RESPLIT_LIMIT {
            return Err(RulesError::ResplitLimitTooLarge {
                limit: self.resplit_limit,
                max: MAX_RESPLIT_LIMIT,
            });
        }
        Ok(())
    }
}

/// Errors from rule-set validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// `resplit_limit` exceeds [`MAX_RESPLIT_LIMIT`].
    ResplitLimitTooLarge {
        /// The configured limit.
        limit: u8,
        /// The largest accepted limit.
        max: u8,
    },
}

impl std::fmt::Display for RulesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RulesError::ResplitLimitTooLarge { limit, max } => {
                write!(f, "resplit_limit {} exceeds the maximum of {}", limit, max)
            }
        }
    }
}

impl std::error::Error for RulesError {}
