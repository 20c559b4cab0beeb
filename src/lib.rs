//! Card game engines for Blackjack and Go Fish with optional `no_std` support.
//!
//! The crate provides the card and deck model, a Blackjack hand evaluator,
//! Go Fish book detection, a generic card transfer mediator and one round
//! state machine per game: [`Blackjack`] and [`GoFish`].
//!
//! # Example
//!
//! ```
//! use cardrs::{Blackjack, BlackjackOptions, GameState};
//!
//! let mut game = Blackjack::new(BlackjackOptions::default(), 42);
//! game.place_bet(100).unwrap();
//! game.deal().unwrap();
//! assert!(matches!(game.state(), GameState::PlayerTurn(_)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod blackjack;
pub mod book;
pub mod card;
pub mod deck;
pub mod engine;
pub mod error;
pub mod event;
pub mod gofish;
pub mod hand;
pub mod money;
pub mod options;
pub mod result;

// Re-export main types
pub use blackjack::{Action, Blackjack, GameState, Seat, SeatStatus};
pub use book::{BOOK_SIZE, BookLedger, Score, count_ranks, fill_books};
pub use card::{Card, CardColor, CardId, DECK_SIZE, Rank, Suit, random_card};
pub use deck::{Deck, empty_deck, standard_52_deck};
pub use engine::{
    CompletedTransfer, CompletionCheck, ManagedDeck, ManagedPile, PileId, PileRole,
    TransferCallback, TurnEngine,
};
pub use error::{ActionError, BetError, BookError, DealError, GoFishError, ShowdownError};
pub use event::{Event, Severity};
pub use gofish::{FishPlayer, GoFish, Phase, PlayerKind, RoundState, TurnOutcome};
pub use hand::{BLACKJACK, DealerHand, HandTotals, beneficial_value, total_values};
pub use money::{BetId, Wallet};
pub use options::{BlackjackOptions, DealerRule, DoubleOption, GoFishOptions, RoundingMode};
pub use result::{HandOutcome, Payout, RoundResult, SeatResult};
