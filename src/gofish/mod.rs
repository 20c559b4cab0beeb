//! Go Fish round state machine.
//!
//! One human player and a configurable number of computer opponents take
//! turns asking each other for ranks. A game runs [`Phase::Setup`] →
//! [`Phase::TurnCycle`] → [`Phase::RoundOver`].

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::book::BookLedger;
use crate::card::Rank;
use crate::deck::Deck;
use crate::error::GoFishError;
use crate::event::{Event, Severity};
use crate::options::GoFishOptions;

mod opponent;
pub mod state;
mod turn;

pub use state::{FishPlayer, Phase, PlayerKind, RoundState, TurnOutcome};

/// A game of Go Fish.
///
/// The game owns the draw pile, every hand, the book ledger and the round
/// state. Callers read them and request turns; nothing else mutates them.
pub struct GoFish {
    options: GoFishOptions,
    phase: Phase,
    pile: Deck,
    players: Vec<FishPlayer>,
    books: BookLedger,
    round: RoundState,
    events: Vec<Event>,
    rng: ChaCha8Rng,
}

impl GoFish {
    /// Creates a game with the given seed. Call [`GoFish::new_game`] to deal.
    ///
    /// # Example
    ///
    /// ```
    /// use cardrs::{GoFish, GoFishOptions, Phase};
    ///
    /// let mut game = GoFish::new(GoFishOptions::default(), 7);
    /// assert_eq!(game.phase(), Phase::Setup);
    /// game.new_game().unwrap();
    /// assert_eq!(game.players().len(), 4);
    /// assert_eq!(game.pile().len(), 52 - 4 * 6);
    /// ```
    #[must_use]
    pub fn new(options: GoFishOptions, seed: u64) -> Self {
        let players = Self::seat_players(&options);
        let books = BookLedger::new(players.iter().map(|player| player.name.clone()));
        let round = RoundState::new(players.len());

        Self {
            options,
            phase: Phase::Setup,
            pile: Deck::empty(),
            players,
            books,
            round,
            events: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn seat_players(options: &GoFishOptions) -> Vec<FishPlayer> {
        let mut players = Vec::with_capacity(options.opponents + 1);
        players.push(FishPlayer::new(
            options.human_name.clone(),
            PlayerKind::Human,
        ));
        for index in 0..options.opponents {
            players.push(FishPlayer::new(
                format!("OPPONENT {}", index + 1),
                PlayerKind::Opponent,
            ));
        }
        players
    }

    /// Shuffles a fresh deck, deals every player their starting hand, lays
    /// down any books dealt complete and hands the first turn to the human.
    ///
    /// Any game in progress is discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if book bookkeeping fails.
    pub fn new_game(&mut self) -> Result<(), GoFishError> {
        self.players = Self::seat_players(&self.options);
        self.books = BookLedger::new(self.players.iter().map(|player| player.name.clone()));
        self.events.clear();
        self.phase = Phase::Setup;

        let mut pile = Deck::standard_52();
        pile.shuffle(&mut self.rng);
        self.pile = pile;

        for index in 0..self.players.len() {
            for _ in 0..self.options.starting_cards {
                let Some(card) = self.pile.draw() else {
                    break;
                };
                self.players[index].hand.insert_top(card);
                self.events.push(Event::Pause(self.options.deal_delay));
            }
        }

        for index in 0..self.players.len() {
            self.lay_down_books(index)?;
        }

        self.round = RoundState::new(self.players.len());
        self.phase = Phase::TurnCycle;
        info!(
            players = self.players.len(),
            pile = self.pile.len(),
            "go fish game started"
        );
        self.notify(Severity::Success, "Game started!");
        self.announce_turn();
        Ok(())
    }

    /// Removes completed books from a player's hand and credits them.
    fn lay_down_books(&mut self, player: usize) -> Result<Vec<Rank>, GoFishError> {
        let name = self.players[player].name.clone();
        let (books, remaining) = self.books.fill(&self.players[player].hand, &name)?;
        self.players[player].hand = remaining;

        for &rank in &books {
            debug!(player = %name, %rank, "book completed");
            self.events.push(Event::BookCompleted {
                owner: name.clone(),
                rank,
            });
            self.notify(
                Severity::Success,
                format!("{name} completed a book of {}", rank.plural_name()),
            );
        }
        Ok(books)
    }

    fn notify(&mut self, severity: Severity, text: impl Into<String>) {
        self.events.push(Event::notice(severity, text));
    }

    fn announce_turn(&mut self) {
        self.events.push(Event::Pause(self.options.turn_delay));
        let name = self.players[self.round.current()].name.clone();
        self.notify(Severity::Info, format!("{name} turn!"));
    }

    /// Game options.
    #[must_use]
    pub const fn options(&self) -> &GoFishOptions {
        &self.options
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Turn bookkeeping.
    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    /// All players; index 0 is the human.
    #[must_use]
    pub fn players(&self) -> &[FishPlayer] {
        &self.players
    }

    /// The draw pile.
    #[must_use]
    pub const fn pile(&self) -> &Deck {
        &self.pile
    }

    /// Completed books per player.
    #[must_use]
    pub const fn books(&self) -> &BookLedger {
        &self.books
    }

    /// The player whose turn it is, while turns are running.
    #[must_use]
    pub const fn current_player(&self) -> Option<usize> {
        match self.phase {
            Phase::TurnCycle => Some(self.round.current()),
            _ => None,
        }
    }

    /// Returns whether the human is up.
    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        self.current_player()
            .is_some_and(|index| self.players[index].kind == PlayerKind::Human)
    }

    /// Players the current player may ask: every other active player.
    #[must_use]
    pub fn valid_targets(&self) -> Vec<usize> {
        let Some(current) = self.current_player() else {
            return Vec::new();
        };
        self.round
            .active()
            .iter()
            .copied()
            .filter(|&index| index != current)
            .collect()
    }

    /// The winner once the game is over.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        match self.phase {
            Phase::RoundOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Replaces the draw pile. The last card is drawn first.
    pub fn set_pile(&mut self, pile: Deck) {
        self.pile = pile;
    }

    /// Replaces a player's hand. Out-of-range indices are ignored.
    pub fn set_hand(&mut self, player: usize, hand: Deck) {
        if let Some(player) = self.players.get_mut(player) {
            player.hand = hand;
        }
    }

    /// Takes the queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<Event> {
        core::mem::take(&mut self.events)
    }
}
