//! Settlement types for blackjack rounds.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Multiplier applied to a bet when it is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Payout {
    /// Nothing returned.
    Loss,
    /// Half the stake returned.
    Surrender,
    /// Stake returned.
    Push,
    /// Stake returned plus a matching win.
    Win,
}

impl Payout {
    /// The multiplier on the bet value: 0, 0.5, 1 or 2.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Loss => 0.0,
            Self::Surrender => 0.5,
            Self::Push => 1.0,
            Self::Win => 2.0,
        }
    }
}

/// How a seat's hand ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses to a higher dealer value.
    Lose,
    /// Player went over 21.
    Bust,
    /// Push (tie).
    Push,
    /// Player surrendered.
    Surrendered,
}

impl HandOutcome {
    /// The payout this outcome receives.
    #[must_use]
    pub const fn payout(self) -> Payout {
        match self {
            Self::Win => Payout::Win,
            Self::Push => Payout::Push,
            Self::Surrendered => Payout::Surrender,
            Self::Lose | Self::Bust => Payout::Loss,
        }
    }
}

/// Result for a single seat (one hand, possibly from a split).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatResult {
    /// Seat name.
    pub name: String,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet value when resolved.
    pub bet: usize,
    /// Amount paid back to the wallet.
    pub paid: usize,
    /// The player's hand value.
    pub player_value: u16,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results in resolution order.
    pub seats: Vec<SeatResult>,
    /// The dealer's final hand value.
    pub dealer_value: u16,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Money after settlement.
    pub money: usize,
}

impl RoundResult {
    /// Sum paid back over every seat.
    #[must_use]
    pub fn total_paid(&self) -> usize {
        self.seats.iter().map(|seat| seat.paid).sum()
    }

    /// Sum staked over every seat.
    #[must_use]
    pub fn total_bet(&self) -> usize {
        self.seats.iter().map(|seat| seat.bet).sum()
    }

    /// Net result (positive = profit).
    #[must_use]
    pub fn net(&self) -> isize {
        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = self.total_paid() as isize - self.total_bet() as isize;
        net
    }
}
