//! Round state and seat types.

extern crate alloc;

use alloc::string::String;

use crate::deck::Deck;
use crate::hand::HandTotals;
use crate::money::BetId;
use crate::result::HandOutcome;

/// Blackjack round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the player to place a bet.
    AwaitingBet,
    /// Bet placed; initial cards not dealt yet.
    Dealing,
    /// Waiting for an action on the seat at this index.
    PlayerTurn(usize),
    /// Dealer reveals and plays out their hand.
    DealerTurn,
    /// Dealer is done; remaining seats can be compared and paid.
    Settlement,
}

/// A player action offered during [`GameState::PlayerTurn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one card.
    Hit,
    /// End the turn without drawing.
    Stand,
    /// Double the bet, draw exactly one card, end the turn.
    DoubleDown,
    /// Split a pair into two hands with matching bets.
    Split,
    /// Give up the hand for half the bet.
    Surrender,
}

impl Action {
    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::DoubleDown => "Double Down",
            Self::Split => "Split",
            Self::Surrender => "Surrender",
        }
    }
}

/// Where a seat is in the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    /// Still taking actions.
    Deciding,
    /// Done acting; waits for the dealer.
    Standing,
    /// Bet already resolved; out of the round.
    Resolved(HandOutcome),
}

/// One hand at the table with its own bet.
///
/// The player starts with one seat; every split adds another right after the
/// seat that was split.
#[derive(Debug, Clone)]
pub struct Seat {
    pub(super) name: String,
    pub(super) hand: Deck,
    pub(super) bet: BetId,
    pub(super) decisions: u32,
    pub(super) status: SeatStatus,
}

impl Seat {
    pub(super) fn new(name: impl Into<String>, bet: BetId, hand: Deck) -> Self {
        Self {
            name: name.into(),
            hand,
            bet,
            decisions: 0,
            status: SeatStatus::Deciding,
        }
    }

    /// Seat name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards in the hand.
    #[must_use]
    pub const fn hand(&self) -> &Deck {
        &self.hand
    }

    /// The seat's bet.
    #[must_use]
    pub const fn bet(&self) -> BetId {
        self.bet
    }

    /// Decisions already taken with this hand.
    #[must_use]
    pub const fn decisions(&self) -> u32 {
        self.decisions
    }

    /// Where the seat is in the round.
    #[must_use]
    pub const fn status(&self) -> SeatStatus {
        self.status
    }

    /// Every total the hand can take.
    #[must_use]
    pub fn totals(&self) -> HandTotals {
        HandTotals::of(self.hand.cards())
    }

    /// The value that counts.
    #[must_use]
    pub fn value(&self) -> u16 {
        self.totals().best()
    }

    /// Returns whether the seat is still in the round.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !matches!(self.status, SeatStatus::Resolved(_))
    }
}
