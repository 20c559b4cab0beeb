//! Card transfers between managed piles.
//!
//! A [`TurnEngine`] owns the piles a game puts on screen and lets at most one
//! card be in flight between them at a time. A transfer starts when a card is
//! picked and completes once a target pile accepts it.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use rand::RngCore;
use tracing::debug;

use crate::card::Card;
use crate::deck::Deck;

/// The capability surface a pile exposes to the round state machines.
pub trait ManagedDeck {
    /// Current contents.
    fn deck(&self) -> &Deck;

    /// Replaces the contents.
    fn set_deck(&mut self, deck: Deck);

    /// Offers a card to the pile. Returns whether it was accepted.
    fn deposit_card(&mut self, card: Card) -> bool;

    /// Takes the pile's next card, if it has one to give.
    fn draw_card(&mut self) -> Option<Card>;

    /// Removes a specific card. Returns whether it was present.
    fn take_card(&mut self, card: &Card) -> bool;

    /// Sorts the contents by rank.
    fn sort(&mut self);

    /// Randomizes the contents.
    fn shuffle(&mut self, rng: &mut dyn RngCore);
}

/// What a registered pile is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileRole {
    /// Face-down stock players draw from.
    DrawPile,
    /// The local player's hand; cards are picked from it.
    Hand,
    /// A computer opponent's hand.
    OpponentHand,
    /// Face-up pile cards are played onto.
    Discard,
}

/// Handle of a registered pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PileId(usize);

/// The default pile implementation.
///
/// Draw piles and discards give up their top card; hands give up the card
/// the player picked.
#[derive(Debug, Clone)]
pub struct ManagedPile {
    name: String,
    role: PileRole,
    deck: Deck,
    picked: Option<Card>,
}

impl ManagedPile {
    /// Creates a pile.
    #[must_use]
    pub fn new(name: impl Into<String>, role: PileRole, deck: Deck) -> Self {
        Self {
            name: name.into(),
            role,
            deck,
            picked: None,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Role of the pile.
    #[must_use]
    pub const fn role(&self) -> PileRole {
        self.role
    }

    /// Marks the card at `index` as picked and returns it.
    pub fn pick(&mut self, index: usize) -> Option<Card> {
        let card = self.deck.cards().get(index).copied();
        self.picked = card;
        card
    }

    /// The currently picked card.
    #[must_use]
    pub const fn picked(&self) -> Option<Card> {
        self.picked
    }
}

impl ManagedDeck for ManagedPile {
    fn deck(&self) -> &Deck {
        &self.deck
    }

    fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
        self.picked = None;
    }

    fn deposit_card(&mut self, card: Card) -> bool {
        self.deck.insert_top(card);
        true
    }

    fn draw_card(&mut self) -> Option<Card> {
        match self.role {
            PileRole::DrawPile | PileRole::Discard => self.deck.draw(),
            PileRole::Hand | PileRole::OpponentHand => {
                let card = self.picked.take()?;
                self.deck.remove(&card).then_some(card)
            }
        }
    }

    fn take_card(&mut self, card: &Card) -> bool {
        if self.picked.is_some_and(|picked| picked.id() == card.id()) {
            self.picked = None;
        }
        self.deck.remove(card)
    }

    fn sort(&mut self) {
        self.deck.sort();
    }

    fn shuffle(&mut self, rng: &mut dyn RngCore) {
        self.deck.shuffle(rng);
    }
}

/// Decides, when a transfer completes, whether the card may leave its source.
///
/// The check runs against the source pile and usually removes the card from
/// it.
pub type CompletionCheck<P> = Box<dyn FnMut(&mut P, &Card) -> bool>;

/// Called after every completed transfer.
pub type TransferCallback = Box<dyn FnMut(&CompletedTransfer)>;

struct InFlight<P> {
    card: Card,
    source: PileId,
    check: CompletionCheck<P>,
}

/// A transfer that reached its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedTransfer {
    /// The card that moved.
    pub card: Card,
    /// Where it came from.
    pub source: PileId,
    /// Where it went.
    pub target: PileId,
}

/// Mediates card transfers between registered piles.
pub struct TurnEngine<P = ManagedPile> {
    piles: Vec<P>,
    in_flight: Option<InFlight<P>>,
    target: Option<PileId>,
    on_finish: Option<TransferCallback>,
    /// Grows with every transfer until drained.
    completed: Vec<CompletedTransfer>,
}

impl<P> Default for TurnEngine<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> TurnEngine<P> {
    /// Creates an engine with no piles.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            piles: Vec::new(),
            in_flight: None,
            target: None,
            on_finish: None,
            completed: Vec::new(),
        }
    }

    /// Registers a pile and returns its handle.
    pub fn register(&mut self, pile: P) -> PileId {
        self.piles.push(pile);
        PileId(self.piles.len() - 1)
    }

    /// Returns a registered pile.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&P> {
        self.piles.get(id.0)
    }

    /// Returns a registered pile mutably.
    pub fn pile_mut(&mut self, id: PileId) -> Option<&mut P> {
        self.piles.get_mut(id.0)
    }

    /// Sets the callback fired after each completed transfer.
    pub fn on_transfer_complete(&mut self, callback: impl FnMut(&CompletedTransfer) + 'static) {
        self.on_finish = Some(Box::new(callback));
    }

    /// The card currently in flight.
    #[must_use]
    pub fn card_in_flight(&self) -> Option<Card> {
        self.in_flight.as_ref().map(|flight| flight.card)
    }

    /// Returns whether a transfer is pending.
    #[must_use]
    pub const fn is_card_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The registered target, if any.
    #[must_use]
    pub const fn target(&self) -> Option<PileId> {
        self.target
    }

    /// Drains the log of completed transfers.
    ///
    /// The engine keeps every completed transfer until this is called, so a
    /// long-running caller should drain it regularly.
    pub fn drain_completed(&mut self) -> Vec<CompletedTransfer> {
        core::mem::take(&mut self.completed)
    }
}

impl<P: ManagedDeck + 'static> TurnEngine<P> {
    /// Registers the pile the next transfer should land on.
    ///
    /// If a card is already in flight, completion is attempted right away.
    /// Returns whether a transfer completed.
    pub fn set_target(&mut self, target: Option<PileId>) -> bool {
        self.target = target;
        match target {
            Some(target) if self.in_flight.is_some() => self.complete_transfer(target),
            _ => false,
        }
    }

    /// Starts moving `card` out of `source`.
    ///
    /// Fails, leaving the pending transfer untouched, if a card is already in
    /// flight or `source` is unknown. When a target is registered, completion
    /// is attempted immediately; the transfer stays pending if that fails.
    pub fn start_transfer(
        &mut self,
        card: Card,
        source: PileId,
        check: impl FnMut(&mut P, &Card) -> bool + 'static,
    ) -> bool {
        if self.in_flight.is_some() || self.pile(source).is_none() {
            debug!(card = %card, "transfer rejected");
            return false;
        }

        debug!(card = %card, source = source.0, "transfer started");
        self.in_flight = Some(InFlight {
            card,
            source,
            check: Box::new(check),
        });

        if let Some(target) = self.target {
            self.complete_transfer(target);
        }
        true
    }

    /// Starts a transfer whose check removes the card from its source.
    pub fn start_take(&mut self, card: Card, source: PileId) -> bool {
        self.start_transfer(card, source, |pile, card| pile.take_card(card))
    }

    /// Lands the in-flight card on `target`.
    ///
    /// Succeeds only when the completion check passes and the target accepts
    /// the card; then the in-flight state and the registered target are
    /// cleared and the completion callback fires. On failure the transfer
    /// stays pending and the source pile is restored to how it was before
    /// the check ran.
    pub fn complete_transfer(&mut self, target: PileId) -> bool {
        let Some(flight) = self.in_flight.as_mut() else {
            return false;
        };
        let card = flight.card;
        let source = flight.source;
        if target.0 >= self.piles.len() {
            return false;
        }

        let snapshot = self.piles[source.0].deck().clone();
        if !(flight.check)(&mut self.piles[source.0], &card)
            || !self.piles[target.0].deposit_card(card)
        {
            self.piles[source.0].set_deck(snapshot);
            return false;
        }

        self.in_flight = None;
        self.target = None;
        let done = CompletedTransfer {
            card,
            source,
            target,
        };
        debug!(card = %card, source = source.0, target = target.0, "transfer completed");
        if let Some(callback) = self.on_finish.as_mut() {
            callback(&done);
        }
        self.completed.push(done);
        true
    }
}
