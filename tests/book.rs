//! Book detection tests.

use cardrs::{BookError, BookLedger, Card, Deck, Rank, Score, Suit, count_ranks, fill_books};

fn four_of(rank: Rank) -> Vec<Card> {
    Suit::ALL.into_iter().map(|suit| Card::new(suit, rank)).collect()
}

#[test]
fn counts_per_rank() {
    let mut hand = four_of(Rank::Seven);
    hand.push(Card::new(Suit::Hearts, Rank::Ace));

    let counts = count_ranks(&hand);
    assert_eq!(counts[0], 1);
    assert_eq!(counts[6], 4);
    assert_eq!(counts.iter().sum::<usize>(), 5);
}

#[test]
fn detects_a_book_without_touching_the_input() {
    let mut cards = four_of(Rank::Seven);
    let king = Card::new(Suit::Hearts, Rank::King);
    cards.push(king);
    cards.push(Card::new(Suit::Spades, Rank::King));
    cards.push(Card::new(Suit::Clubs, Rank::King));
    let deck = Deck::new(cards);

    let (books, remaining) = fill_books(&deck);
    assert_eq!(books, vec![Rank::Seven]);
    assert_eq!(remaining.len(), 3);
    assert!(remaining.contains(&king));
    assert_eq!(remaining.count_rank(Rank::Seven), 0);
    assert_eq!(deck.len(), 7);
}

#[test]
fn several_books_come_back_ascending() {
    let mut cards = four_of(Rank::Queen);
    cards.extend(four_of(Rank::Three));
    let (books, remaining) = fill_books(&Deck::new(cards));

    assert_eq!(books, vec![Rank::Three, Rank::Queen]);
    assert!(remaining.is_empty());
}

#[test]
fn three_of_a_kind_is_not_a_book() {
    let mut cards = four_of(Rank::Two);
    cards.pop();
    let (books, remaining) = fill_books(&Deck::new(cards));
    assert!(books.is_empty());
    assert_eq!(remaining.len(), 3);
}

#[test]
fn ledger_credits_owners() {
    let mut ledger = BookLedger::new(["ANNA", "BOB"]);

    let (books, remaining) = ledger.fill(&Deck::new(four_of(Rank::Nine)), "BOB").unwrap();
    assert_eq!(books, vec![Rank::Nine]);
    assert!(remaining.is_empty());

    ledger.fill(&Deck::new(four_of(Rank::Ace)), "ANNA").unwrap();
    ledger.fill(&Deck::new(four_of(Rank::Two)), "BOB").unwrap();

    assert_eq!(ledger.library("BOB"), Some(&[Rank::Nine, Rank::Two][..]));
    assert_eq!(ledger.book_count(0), 1);
    assert_eq!(ledger.book_count(1), 2);
    assert_eq!(ledger.book_count(9), 0);
    assert_eq!(ledger.completed(), &[Rank::Nine, Rank::Ace, Rank::Two]);
    assert_eq!(
        ledger.scores(),
        vec![
            Score {
                name: "BOB".into(),
                books: 2
            },
            Score {
                name: "ANNA".into(),
                books: 1
            },
        ]
    );
}

#[test]
fn equal_scores_keep_registration_order() {
    let ledger = BookLedger::new(["C", "A", "B"]);
    let names: Vec<String> = ledger.scores().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[test]
fn unknown_owner_is_rejected() {
    let mut ledger = BookLedger::new(["ANNA"]);
    let err = ledger
        .fill(&Deck::new(four_of(Rank::Five)), "ZED")
        .unwrap_err();
    assert_eq!(err, BookError::UnknownOwner("ZED".into()));
    assert!(ledger.completed().is_empty());
    assert_eq!(ledger.library("ZED"), None);
}
