//! Go Fish book detection and scoring.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::deck::Deck;
use crate::error::BookError;

/// Cards of one rank that make a book.
pub const BOOK_SIZE: usize = 4;

/// Counts the cards of each rank, indexed by `ordinal - 1`.
#[must_use]
pub fn count_ranks(cards: &[Card]) -> [usize; 13] {
    let mut counts = [0; 13];
    for card in cards {
        counts[usize::from(card.rank().ordinal() - 1)] += 1;
    }
    counts
}

/// Finds every completed book in `deck`.
///
/// Returns the completed ranks in ascending order and a copy of the deck with
/// those cards removed. The input deck is not modified.
#[must_use]
pub fn fill_books(deck: &Deck) -> (Vec<Rank>, Deck) {
    let counts = count_ranks(deck.cards());
    let books: Vec<Rank> = Rank::ALL
        .into_iter()
        .filter(|rank| counts[usize::from(rank.ordinal() - 1)] == BOOK_SIZE)
        .collect();

    let remaining = deck
        .cards()
        .iter()
        .filter(|card| !books.contains(&card.rank()))
        .copied()
        .collect::<Vec<_>>();

    (books, Deck::new(remaining))
}

/// A player's score line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    /// Owner name.
    pub name: String,
    /// Number of books.
    pub books: usize,
}

/// Books completed per owner over one game.
#[derive(Debug, Clone, Default)]
pub struct BookLedger {
    owners: Vec<String>,
    library: Vec<Vec<Rank>>,
    completed: Vec<Rank>,
}

impl BookLedger {
    /// Creates an empty ledger for the given owners.
    #[must_use]
    pub fn new<I, S>(owners: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let owners: Vec<String> = owners.into_iter().map(Into::into).collect();
        let library = owners.iter().map(|_| Vec::new()).collect();
        Self {
            owners,
            library,
            completed: Vec::new(),
        }
    }

    /// Owner names, in registration order.
    #[must_use]
    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    /// Removes completed books from `deck`, credits them to `owner`, and
    /// returns the newly completed ranks with the remaining deck.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::UnknownOwner`] if `owner` was not registered.
    /// The ledger is left unchanged.
    pub fn fill(&mut self, deck: &Deck, owner: &str) -> Result<(Vec<Rank>, Deck), BookError> {
        let index = self
            .owners
            .iter()
            .position(|name| name == owner)
            .ok_or_else(|| BookError::UnknownOwner(owner.to_string()))?;

        let (books, remaining) = fill_books(deck);
        self.library[index].extend_from_slice(&books);
        self.completed.extend_from_slice(&books);
        Ok((books, remaining))
    }

    /// Books credited to `owner`, or `None` if unknown.
    #[must_use]
    pub fn library(&self, owner: &str) -> Option<&[Rank]> {
        let index = self.owners.iter().position(|name| name == owner)?;
        Some(&self.library[index])
    }

    /// Number of books for the owner at `index`.
    #[must_use]
    pub fn book_count(&self, index: usize) -> usize {
        self.library.get(index).map_or(0, Vec::len)
    }

    /// Every completed rank, in completion order.
    #[must_use]
    pub fn completed(&self) -> &[Rank] {
        &self.completed
    }

    /// Scores, highest first. Equal scores keep registration order.
    #[must_use]
    pub fn scores(&self) -> Vec<Score> {
        let mut scores: Vec<Score> = self
            .owners
            .iter()
            .zip(&self.library)
            .map(|(name, books)| Score {
                name: name.clone(),
                books: books.len(),
            })
            .collect();
        scores.sort_by(|left, right| right.books.cmp(&left.books));
        scores
    }
}
