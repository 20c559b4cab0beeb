//! Go Fish round state and player types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::deck::Deck;

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Players created, nothing dealt yet.
    Setup,
    /// Players take turns asking for ranks.
    TurnCycle,
    /// Every player has been eliminated.
    RoundOver {
        /// Player with the most books; earliest seat wins ties.
        winner: usize,
    },
}

/// Who controls a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    /// Driven by user input.
    Human,
    /// Driven by the built-in opponent policy.
    Opponent,
}

/// A Go Fish player.
#[derive(Debug, Clone)]
pub struct FishPlayer {
    pub(super) name: String,
    pub(super) kind: PlayerKind,
    pub(super) hand: Deck,
}

impl FishPlayer {
    pub(super) fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            hand: Deck::empty(),
        }
    }

    /// Player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Who controls the player.
    #[must_use]
    pub const fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Cards in hand.
    #[must_use]
    pub const fn hand(&self) -> &Deck {
        &self.hand
    }
}

/// Turn bookkeeping for one game.
///
/// Each transition returns a new value instead of mutating in place, so the
/// machine swaps in the result only once a turn is fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    current: usize,
    active: Vec<usize>,
    players: usize,
    turn: u32,
}

impl RoundState {
    /// First turn of a game with `players` players, all active.
    #[must_use]
    pub fn new(players: usize) -> Self {
        Self {
            current: 0,
            active: (0..players).collect(),
            players,
            turn: 1,
        }
    }

    /// Player whose turn it is.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Players not yet eliminated, in seat order.
    #[must_use]
    pub fn active(&self) -> &[usize] {
        &self.active
    }

    /// Returns whether `player` is still in the game.
    #[must_use]
    pub fn is_active(&self, player: usize) -> bool {
        self.active.contains(&player)
    }

    /// Number of turns started so far.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// Returns whether every player has been eliminated.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.active.is_empty()
    }

    /// Passes the turn to the next active player after the current one,
    /// wrapping around and skipping eliminated seats.
    #[must_use]
    pub fn advanced(&self) -> Self {
        let next = (1..=self.players)
            .map(|offset| (self.current + offset) % self.players)
            .find(|candidate| self.active.contains(candidate));

        Self {
            current: next.unwrap_or(self.current),
            active: self.active.clone(),
            players: self.players,
            turn: self.turn + 1,
        }
    }

    /// Removes `player` from the active set. The turn does not move.
    #[must_use]
    pub fn without(&self, player: usize) -> Self {
        Self {
            current: self.current,
            active: self
                .active
                .iter()
                .copied()
                .filter(|&index| index != player)
                .collect(),
            players: self.players,
            turn: self.turn,
        }
    }
}

/// What happened when a player asked for a rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The target handed over every card of the rank. The asker goes again.
    Caught {
        /// Player who gave the cards.
        from: usize,
        /// Requested rank.
        rank: Rank,
        /// Cards transferred.
        count: usize,
        /// Books the asker completed with them.
        books: Vec<Rank>,
    },
    /// No match; the asker drew from the pile and the turn passed.
    GoFish {
        /// Card drawn.
        drew: Card,
        /// Books the asker completed with it.
        books: Vec<Rank>,
    },
    /// No match and the pile was empty; the asker is out.
    Eliminated,
}
