//! Blackjack round state machine.
//!
//! A round moves through [`GameState::AwaitingBet`], [`GameState::Dealing`],
//! one [`GameState::PlayerTurn`] per seat, [`GameState::DealerTurn`] and
//! [`GameState::Settlement`], then back to waiting for a bet.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::event::{Event, Severity};
use crate::hand::DealerHand;
use crate::money::Wallet;
use crate::options::BlackjackOptions;
use crate::result::SeatResult;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{Action, GameState, Seat, SeatStatus};

/// A single-player blackjack table.
///
/// The table owns the shoe, the wallet, the seats and the dealer's hand for
/// the whole round. Callers only read that state and request transitions.
pub struct Blackjack {
    options: BlackjackOptions,
    state: GameState,
    shoe: Deck,
    wallet: Wallet,
    seats: Vec<Seat>,
    dealer: DealerHand,
    /// Seats already resolved this round, in resolution order.
    results: Vec<SeatResult>,
    events: Vec<Event>,
    rng: ChaCha8Rng,
}

impl Blackjack {
    /// Creates a table with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cardrs::{Blackjack, BlackjackOptions, GameState};
    ///
    /// let table = Blackjack::new(BlackjackOptions::default(), 42);
    /// assert_eq!(table.state(), GameState::AwaitingBet);
    /// assert_eq!(table.money(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: BlackjackOptions, seed: u64) -> Self {
        let wallet = Wallet::new(options.starting_money, options.min_bet, options.max_bet)
            .with_rounding(options.rounding);

        Self {
            options,
            state: GameState::AwaitingBet,
            shoe: Deck::empty(),
            wallet,
            seats: Vec::new(),
            dealer: DealerHand::new(),
            results: Vec::new(),
            events: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Builds and shuffles a fresh shoe for a new round.
    fn fresh_shoe(&mut self) -> Deck {
        let mut shoe = Deck::standard_52();
        shoe.shuffle(&mut self.rng);
        shoe
    }

    /// Draws a card from the shoe.
    fn draw(&mut self) -> Option<Card> {
        self.shoe.draw()
    }

    fn notify(&mut self, severity: Severity, text: impl Into<String>) {
        self.events.push(Event::notice(severity, text));
    }

    fn pause(&mut self) {
        self.events.push(Event::Pause(self.options.deal_delay));
    }

    /// Table options.
    #[must_use]
    pub const fn options(&self) -> &BlackjackOptions {
        &self.options
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Money not committed to a bet.
    #[must_use]
    pub const fn money(&self) -> usize {
        self.wallet.money()
    }

    /// The player's wallet.
    #[must_use]
    pub const fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    /// All seats this round, in action order.
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn current_seat(&self) -> Option<&Seat> {
        match self.state {
            GameState::PlayerTurn(index) => self.seats.get(index),
            _ => None,
        }
    }

    /// The dealer's hand.
    #[must_use]
    pub const fn dealer(&self) -> &DealerHand {
        &self.dealer
    }

    /// Number of cards left in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    /// Replaces the shoe. The last card is drawn first.
    ///
    /// A new shoe is built whenever a bet is placed, so call this between
    /// [`Blackjack::place_bet`] and [`Blackjack::deal`] to stack the deck.
    pub fn set_shoe(&mut self, shoe: Deck) {
        self.shoe = shoe;
    }

    /// Takes the queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<Event> {
        core::mem::take(&mut self.events)
    }
}
