//! Ordered card containers.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// An ordered, mutable sequence of cards.
///
/// The top of the deck is the end of the sequence. Cloning a deck copies the
/// sequence; the cards keep their identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Wraps an existing card list (last element is the top).
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Creates a deck with no cards.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates the 52 suit x rank combinations, suit-major and rank-minor,
    /// each with a fresh identity.
    #[must_use]
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Returns the cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Replaces the card list.
    pub fn set_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Puts a card on top.
    pub fn insert_top(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Reads a card without removing it; offset 0 is the top.
    #[must_use]
    pub fn peek(&self, offset: usize) -> Option<&Card> {
        let index = self.cards.len().checked_sub(offset)?.checked_sub(1)?;
        self.cards.get(index)
    }

    /// Randomizes the order of the cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Sorts ascending by rank. Cards of equal rank keep their order.
    pub fn sort(&mut self) {
        self.cards.sort_by(Card::compare);
    }

    /// Moves every card into `count` decks of `ceil(len / count)` cards each,
    /// taken from the bottom. The last decks may be short or empty.
    ///
    /// Returns `None` if `count` is zero.
    pub fn split(&mut self, count: usize) -> Option<Vec<Self>> {
        if count == 0 {
            return None;
        }
        let target = self.cards.len().div_ceil(count);
        self.mass_draw(count, target, false)
    }

    /// Moves up to `count * target_size` cards into `count` decks, taken from
    /// the bottom.
    ///
    /// In strict mode the call fails, leaving the deck untouched, unless
    /// every one of the `count` decks can be filled to `target_size`.
    pub fn mass_draw(&mut self, count: usize, target_size: usize, strict: bool) -> Option<Vec<Self>> {
        if strict && count.saturating_mul(target_size) > self.cards.len() {
            return None;
        }

        let mut decks = Vec::with_capacity(count);
        for _ in 0..count {
            let take = target_size.min(self.cards.len());
            let section: Vec<Card> = self.cards.drain(..take).collect();
            decks.push(Self::new(section));
        }
        Some(decks)
    }

    /// Removes the first card with the same identity as `card`.
    ///
    /// Returns whether the card was found.
    pub fn remove(&mut self, card: &Card) -> bool {
        if let Some(index) = self.cards.iter().position(|c| c.id() == card.id()) {
            self.cards.remove(index);
            true
        } else {
            false
        }
    }

    /// Returns whether this exact card is in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.iter().any(|c| c.id() == card.id())
    }

    /// Counts the cards of a rank.
    #[must_use]
    pub fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|c| c.rank() == rank).count()
    }

    /// Removes and returns every card of a rank, in deck order.
    pub fn take_rank(&mut self, rank: Rank) -> Vec<Card> {
        let (taken, kept): (Vec<Card>, Vec<Card>) =
            self.cards.drain(..).partition(|c| c.rank() == rank);
        self.cards = kept;
        taken
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

/// Returns a fresh, unshuffled standard deck.
#[must_use]
pub fn standard_52_deck() -> Deck {
    Deck::standard_52()
}

/// Returns a deck with no cards.
#[must_use]
pub const fn empty_deck() -> Deck {
    Deck::empty()
}
