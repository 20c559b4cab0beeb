//! Error types for game operations.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// Bet amount is below the table minimum.
    #[error("bet is below the table minimum")]
    BelowMinimum,
    /// Bet amount is above the table maximum.
    #[error("bet is above the table maximum")]
    AboveMaximum,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Bet is not open.
    #[error("bet not found")]
    UnknownBet,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Not enough cards in the shoe.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Cannot surrender at this point.
    #[error("cannot surrender at this point")]
    CannotSurrender,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

/// Errors that can occur while the dealer plays and the round settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// No cards left in the shoe.
    #[error("no cards left in the shoe")]
    NoCards,
}

/// Errors raised by the book ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    /// The owner is not tracked by the ledger.
    #[error("unknown owner '{0}'")]
    UnknownOwner(String),
}

/// Errors that can occur during a game of Go Fish.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoFishError {
    /// Invalid game phase for this request.
    #[error("invalid game state for this request")]
    InvalidState,
    /// The target is the asking player, eliminated, or does not exist.
    #[error("invalid target player")]
    InvalidTarget,
    /// The current player is a computer opponent.
    #[error("not the human player's turn")]
    NotHumanTurn,
    /// The current player is the human player.
    #[error("not an opponent's turn")]
    NotOpponentTurn,
    /// Book bookkeeping failed.
    #[error(transparent)]
    Book(#[from] BookError),
}
