//! Turn engine tests.

use core::cell::Cell;
use std::rc::Rc;

use cardrs::{
    Card, Deck, ManagedDeck, ManagedPile, PileId, PileRole, Rank, Suit, TurnEngine,
};
use rand::RngCore;

fn table() -> (TurnEngine, PileId, PileId, Card) {
    let top = Card::new(Suit::Hearts, Rank::Queen);
    let stock = Deck::new(vec![Card::new(Suit::Clubs, Rank::Two), top]);

    let mut engine = TurnEngine::new();
    let draw = engine.register(ManagedPile::new("DRAW", PileRole::DrawPile, stock));
    let hand = engine.register(ManagedPile::new("PLAYER", PileRole::Hand, Deck::empty()));
    (engine, draw, hand, top)
}

fn len(engine: &TurnEngine, id: PileId) -> usize {
    engine.pile(id).map_or(0, |pile| pile.deck().len())
}

#[test]
fn transfer_completes_when_target_is_set() {
    let (mut engine, draw, hand, top) = table();
    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);
    engine.on_transfer_complete(move |_| counter.set(counter.get() + 1));

    assert!(engine.start_take(top, draw));
    assert_eq!(engine.card_in_flight(), Some(top));
    assert_eq!(len(&engine, draw), 2);

    assert!(engine.set_target(Some(hand)));
    assert!(!engine.is_card_in_flight());
    assert_eq!(engine.target(), None);
    assert_eq!(len(&engine, draw), 1);
    assert!(engine.pile(hand).unwrap().deck().contains(&top));
    assert_eq!(fired.get(), 1);

    let log = engine.drain_completed();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].card, top);
    assert_eq!(log[0].source, draw);
    assert_eq!(log[0].target, hand);
    assert!(engine.drain_completed().is_empty());
}

#[test]
fn registered_target_completes_on_start() {
    let (mut engine, draw, hand, top) = table();

    assert!(!engine.set_target(Some(hand)));
    assert_eq!(engine.target(), Some(hand));

    assert!(engine.start_take(top, draw));
    assert!(!engine.is_card_in_flight());
    assert_eq!(len(&engine, hand), 1);
}

#[test]
fn only_one_card_in_flight() {
    let (mut engine, draw, _hand, top) = table();
    let other = engine.pile(draw).unwrap().deck().cards()[0];

    assert!(engine.start_take(top, draw));
    assert!(!engine.start_take(other, draw));
    assert_eq!(engine.card_in_flight(), Some(top));
}

#[test]
fn failed_check_keeps_the_transfer_pending() {
    let (mut engine, draw, hand, top) = table();

    assert!(engine.start_transfer(top, draw, |_, _| false));
    assert!(!engine.complete_transfer(hand));
    assert_eq!(engine.card_in_flight(), Some(top));
    assert_eq!(len(&engine, draw), 2);
    assert_eq!(len(&engine, hand), 0);
    assert!(engine.drain_completed().is_empty());
}

#[test]
fn check_runs_only_on_completion() {
    let (mut engine, draw, hand, top) = table();
    let allowed = Rc::new(Cell::new(false));
    let gate = Rc::clone(&allowed);

    assert!(engine.start_transfer(top, draw, move |pile: &mut ManagedPile, card: &Card| {
        gate.get() && pile.take_card(card)
    }));
    assert!(!engine.complete_transfer(hand));

    allowed.set(true);
    assert!(engine.complete_transfer(hand));
    assert_eq!(len(&engine, draw), 1);
    assert_eq!(len(&engine, hand), 1);
}

#[test]
fn unknown_piles_are_rejected() {
    let (mut engine, draw, hand, top) = table();
    let mut other = TurnEngine::<ManagedPile>::new();
    for name in ["X", "Y", "Z"] {
        other.register(ManagedPile::new(name, PileRole::Discard, Deck::empty()));
    }
    let far = other.register(ManagedPile::new("W", PileRole::Discard, Deck::empty()));

    assert!(!engine.start_take(top, far));
    assert!(engine.start_take(top, draw));
    assert!(!engine.complete_transfer(far));
    assert!(engine.is_card_in_flight());
    assert!(engine.complete_transfer(hand));
}

#[test]
fn hands_give_up_the_picked_card() {
    let low = Card::new(Suit::Spades, Rank::Three);
    let high = Card::new(Suit::Spades, Rank::Jack);
    let mut hand = ManagedPile::new("PLAYER", PileRole::Hand, Deck::new(vec![low, high]));

    assert_eq!(hand.draw_card(), None);
    assert_eq!(hand.pick(0), Some(low));
    assert_eq!(hand.picked(), Some(low));
    assert_eq!(hand.draw_card(), Some(low));
    assert_eq!(hand.picked(), None);
    assert_eq!(hand.deck().cards(), &[high]);

    let mut discard = ManagedPile::new("DISCARD", PileRole::Discard, Deck::new(vec![low, high]));
    assert_eq!(discard.draw_card(), Some(high));
    assert_eq!(discard.name(), "DISCARD");
    assert_eq!(discard.role(), PileRole::Discard);
}

/// A pile that can be told to refuse deposits.
struct Tray {
    deck: Deck,
    accepts: bool,
}

impl ManagedDeck for Tray {
    fn deck(&self) -> &Deck {
        &self.deck
    }

    fn set_deck(&mut self, deck: Deck) {
        self.deck = deck;
    }

    fn deposit_card(&mut self, card: Card) -> bool {
        if self.accepts {
            self.deck.insert_top(card);
        }
        self.accepts
    }

    fn draw_card(&mut self) -> Option<Card> {
        self.deck.draw()
    }

    fn take_card(&mut self, card: &Card) -> bool {
        self.deck.remove(card)
    }

    fn sort(&mut self) {
        self.deck.sort();
    }

    fn shuffle(&mut self, rng: &mut dyn RngCore) {
        self.deck.shuffle(rng);
    }
}

#[test]
fn refused_deposit_restores_the_source() {
    let bottom = Card::new(Suit::Hearts, Rank::Two);
    let top = Card::new(Suit::Hearts, Rank::Nine);
    let mut engine = TurnEngine::new();
    let source = engine.register(Tray {
        deck: Deck::new(vec![bottom, top]),
        accepts: true,
    });
    let target = engine.register(Tray {
        deck: Deck::empty(),
        accepts: false,
    });

    assert!(engine.start_take(bottom, source));
    assert!(!engine.complete_transfer(target));
    assert!(engine.is_card_in_flight());
    assert_eq!(engine.pile(source).unwrap().deck().cards(), &[bottom, top]);
    assert!(engine.pile(target).unwrap().deck().is_empty());

    engine.pile_mut(target).unwrap().accepts = true;
    assert!(engine.complete_transfer(target));
    assert_eq!(engine.pile(source).unwrap().deck().cards(), &[top]);
    assert_eq!(engine.pile(target).unwrap().deck().cards(), &[bottom]);
}
