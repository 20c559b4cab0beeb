//! Hand valuation and the dealer's hand.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::deck::Deck;

/// Highest total that is not a bust.
pub const BLACKJACK: u16 = 21;

const fn base_value(rank: Rank) -> u16 {
    match rank {
        Rank::Ace => 0,
        Rank::Jack | Rank::Queen | Rank::King => 10,
        _ => rank.ordinal() as u16,
    }
}

/// Computes every point total a set of cards can take.
///
/// Each ace counts as either 1 or 11. Only how many aces count low matters,
/// so with `n` aces there are `n + 1` totals: the first has every ace high,
/// the last every ace low.
#[must_use]
pub fn total_values(cards: &[Card]) -> Vec<u16> {
    let mut aces: u16 = 0;
    let mut base: u16 = 0;

    for card in cards {
        if card.rank() == Rank::Ace {
            aces += 1;
        } else {
            base += base_value(card.rank());
        }
    }

    (0..=aces).map(|low| base + low + 11 * (aces - low)).collect()
}

/// Picks the total that counts: 21 if present, else the highest total not
/// over 21, else (a bust) the lowest total.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn beneficial_value(totals: &[u16]) -> Option<u16> {
    if totals.contains(&BLACKJACK) {
        return Some(BLACKJACK);
    }
    totals
        .iter()
        .copied()
        .filter(|&total| total <= BLACKJACK)
        .max()
        .or_else(|| totals.iter().copied().min())
}

/// The set of totals for one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandTotals {
    totals: Vec<u16>,
}

impl HandTotals {
    /// Evaluates a set of cards.
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        Self {
            totals: total_values(cards),
        }
    }

    /// All possible totals.
    #[must_use]
    pub fn totals(&self) -> &[u16] {
        &self.totals
    }

    /// Returns whether one of the totals equals `value`.
    #[must_use]
    pub fn contains(&self, value: u16) -> bool {
        self.totals.contains(&value)
    }

    /// The total that counts for comparisons. See [`beneficial_value`].
    #[must_use]
    pub fn best(&self) -> u16 {
        beneficial_value(&self.totals).unwrap_or(0)
    }

    /// Returns whether even the best total is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.best() > BLACKJACK
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Deck,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Deck::empty(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.insert_top(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.cards.cards()
    }

    /// Returns the hand as a deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.cards().first()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Totals of the cards a player can see.
    #[must_use]
    pub fn visible_totals(&self) -> HandTotals {
        if self.hole_revealed {
            self.totals()
        } else {
            HandTotals::of(&self.cards.cards()[..self.cards.len().min(1)])
        }
    }

    /// Totals of the full hand.
    #[must_use]
    pub fn totals(&self) -> HandTotals {
        HandTotals::of(self.cards.cards())
    }

    /// The value that counts for the full hand.
    #[must_use]
    pub fn value(&self) -> u16 {
        self.totals().best()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.totals().is_bust()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards = Deck::empty();
        self.hole_revealed = false;
    }
}
