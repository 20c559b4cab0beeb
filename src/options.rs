//! Game configuration options.

extern crate alloc;

use alloc::string::String;
use core::time::Duration;

/// Conditions under which doubling down is allowed.
///
/// A hand qualifies when any of its possible totals matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DoubleOption {
    /// Double down allowed on any hand.
    Any,
    /// Double down allowed only on 9 or 10.
    NineOrTen,
    /// Double down allowed only on 9 through 11.
    #[default]
    NineThrough11,
    /// Double down not allowed.
    None,
}

impl DoubleOption {
    /// Returns whether a hand total allows doubling.
    #[must_use]
    pub const fn allows(self, total: u16) -> bool {
        match self {
            Self::Any => true,
            Self::NineOrTen => total == 9 || total == 10,
            Self::NineThrough11 => total >= 9 && total <= 11,
            Self::None => false,
        }
    }
}

/// How the dealer plays after revealing the hole card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DealerRule {
    /// Draw exactly one card on 16 or less, then stop.
    #[default]
    HitOnceOnSixteen,
    /// Draw until the total is 17 or more.
    StandOnSeventeen,
}

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    #[default]
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardrs::BlackjackOptions;
///
/// let options = BlackjackOptions::default()
///     .with_starting_money(200)
///     .with_bet_limits(5, 50);
/// assert_eq!(options.min_bet, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlackjackOptions {
    /// Money the player starts with.
    pub starting_money: usize,
    /// Smallest accepted bet.
    pub min_bet: usize,
    /// Largest accepted bet.
    pub max_bet: usize,
    /// Double down conditions.
    pub double: DoubleOption,
    /// Dealer drawing rule.
    pub dealer_rule: DealerRule,
    /// Rounding mode for fractional payouts.
    pub rounding: RoundingMode,
    /// Pause between dealt cards.
    pub deal_delay: Duration,
}

impl Default for BlackjackOptions {
    fn default() -> Self {
        Self {
            starting_money: 1000,
            min_bet: 10,
            max_bet: 500,
            double: DoubleOption::NineThrough11,
            dealer_rule: DealerRule::HitOnceOnSixteen,
            rounding: RoundingMode::Down,
            deal_delay: Duration::from_millis(500),
        }
    }
}

impl BlackjackOptions {
    /// Sets the starting money.
    #[must_use]
    pub const fn with_starting_money(mut self, money: usize) -> Self {
        self.starting_money = money;
        self
    }

    /// Sets the minimum and maximum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use cardrs::BlackjackOptions;
    ///
    /// let options = BlackjackOptions::default().with_bet_limits(25, 100);
    /// assert_eq!((options.min_bet, options.max_bet), (25, 100));
    /// ```
    #[must_use]
    pub const fn with_bet_limits(mut self, min: usize, max: usize) -> Self {
        self.min_bet = min;
        self.max_bet = max;
        self
    }

    /// Sets the double down conditions.
    #[must_use]
    pub const fn with_double(mut self, double: DoubleOption) -> Self {
        self.double = double;
        self
    }

    /// Sets the dealer drawing rule.
    ///
    /// # Example
    ///
    /// ```
    /// use cardrs::{BlackjackOptions, DealerRule};
    ///
    /// let options = BlackjackOptions::default().with_dealer_rule(DealerRule::StandOnSeventeen);
    /// assert_eq!(options.dealer_rule, DealerRule::StandOnSeventeen);
    /// ```
    #[must_use]
    pub const fn with_dealer_rule(mut self, rule: DealerRule) -> Self {
        self.dealer_rule = rule;
        self
    }

    /// Sets the rounding mode for fractional payouts.
    #[must_use]
    pub const fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = mode;
        self
    }

    /// Sets the pause between dealt cards.
    #[must_use]
    pub const fn with_deal_delay(mut self, delay: Duration) -> Self {
        self.deal_delay = delay;
        self
    }
}

/// Configuration options for a game of Go Fish.
///
/// ```
/// use cardrs::GoFishOptions;
///
/// let options = GoFishOptions::default().with_opponents(2).with_starting_cards(7);
/// assert_eq!(options.opponents, 2);
/// assert_eq!(options.starting_cards, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoFishOptions {
    /// Number of computer opponents.
    pub opponents: usize,
    /// Cards dealt to each player before the first turn.
    pub starting_cards: usize,
    /// Name of the human player.
    pub human_name: String,
    /// Pause between dealt cards.
    pub deal_delay: Duration,
    /// Pause before a player continues or the turn passes.
    pub turn_delay: Duration,
}

impl Default for GoFishOptions {
    fn default() -> Self {
        Self {
            opponents: 3,
            starting_cards: 6,
            human_name: String::from("PLAYER"),
            deal_delay: Duration::from_millis(10),
            turn_delay: Duration::from_millis(500),
        }
    }
}

impl GoFishOptions {
    /// Sets the number of computer opponents.
    #[must_use]
    pub const fn with_opponents(mut self, opponents: usize) -> Self {
        self.opponents = opponents;
        self
    }

    /// Sets the starting hand size.
    #[must_use]
    pub const fn with_starting_cards(mut self, cards: usize) -> Self {
        self.starting_cards = cards;
        self
    }

    /// Sets the human player's name.
    #[must_use]
    pub fn with_human_name(mut self, name: impl Into<String>) -> Self {
        self.human_name = name.into();
        self
    }

    /// Sets the pause between dealt cards.
    #[must_use]
    pub const fn with_deal_delay(mut self, delay: Duration) -> Self {
        self.deal_delay = delay;
        self
    }

    /// Sets the pause between turns.
    #[must_use]
    pub const fn with_turn_delay(mut self, delay: Duration) -> Self {
        self.turn_delay = delay;
        self
    }
}
