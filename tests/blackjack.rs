//! Blackjack round integration tests.

use cardrs::{
    Action, ActionError, BetError, Blackjack, BlackjackOptions, Card, DealError, DealerRule, Deck,
    DoubleOption, Event, GameState, HandOutcome, Rank, SeatStatus, ShowdownError, Suit,
};

fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Builds a shoe that deals `draws` in order.
fn stacked(draws: &[Card]) -> Deck {
    let mut cards = draws.to_vec();
    cards.reverse();
    Deck::new(cards)
}

/// Bets 100 and deals player, player, dealer up, dealer hole, then `rest`.
fn table_with(options: BlackjackOptions, draws: &[Card]) -> Blackjack {
    let mut game = Blackjack::new(options, 1);
    game.place_bet(100).unwrap();
    game.set_shoe(stacked(draws));
    game.deal().unwrap();
    game
}

fn table(draws: &[Card]) -> Blackjack {
    table_with(BlackjackOptions::default(), draws)
}

#[test]
fn deal_order_and_events() {
    let p1 = card(Suit::Hearts, Rank::Ten);
    let p2 = card(Suit::Spades, Rank::Nine);
    let up = card(Suit::Clubs, Rank::Nine);
    let hole = card(Suit::Diamonds, Rank::Four);
    let mut game = table(&[p1, p2, up, hole]);

    assert_eq!(game.state(), GameState::PlayerTurn(0));
    assert_eq!(game.seats().len(), 1);
    assert_eq!(game.seats()[0].hand().cards(), &[p1, p2]);
    assert_eq!(game.dealer().cards(), &[up, hole]);
    assert_eq!(game.dealer().visible_totals().best(), 9);
    assert_eq!(game.money(), 900);
    assert_eq!(game.cards_remaining(), 0);

    let events = game.drain_events();
    let pauses = events
        .iter()
        .filter(|event| matches!(event, Event::Pause(_)))
        .count();
    assert_eq!(pauses, 4);
    assert!(matches!(
        events.last(),
        Some(Event::Notice { text, .. }) if text.contains("nine of clubs")
    ));
    assert!(game.drain_events().is_empty());
}

#[test]
fn fresh_shoe_is_dealt_without_stacking() {
    let mut game = Blackjack::new(BlackjackOptions::default(), 9);
    game.place_bet(50).unwrap();
    assert_eq!(game.cards_remaining(), 52);
    game.deal().unwrap();
    assert_eq!(game.cards_remaining(), 48);
    assert_eq!(game.seats()[0].hand().len(), 2);
    assert_eq!(game.dealer().len(), 2);
}

#[test]
fn dealer_on_sixteen_draws_exactly_once() {
    let mut game = table(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Four),
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::Five),
    ]);

    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 1);
    assert_eq!(game.dealer().value(), 15);
    assert_eq!(game.cards_remaining(), 1);
    assert!(game.dealer().is_hole_revealed());
    assert_eq!(game.state(), GameState::Settlement);

    let result = game.settle().unwrap();
    assert_eq!(result.dealer_value, 15);
    assert_eq!(result.seats.len(), 1);
    assert_eq!(result.seats[0].outcome, HandOutcome::Win);
    assert_eq!(result.seats[0].paid, 200);
    assert_eq!(result.net(), 100);
    assert_eq!(game.money(), 1100);
    assert_eq!(game.state(), GameState::AwaitingBet);
}

#[test]
fn dealer_standing_on_seventeen_keeps_drawing() {
    let options = BlackjackOptions::default().with_dealer_rule(DealerRule::StandOnSeventeen);
    let mut game = table_with(
        options,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Diamonds, Rank::Four),
            card(Suit::Hearts, Rank::Two),
            card(Suit::Spades, Rank::Five),
        ],
    );

    game.stand().unwrap();
    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 2);
    assert_eq!(game.dealer().value(), 20);

    let result = game.settle().unwrap();
    assert_eq!(result.seats[0].outcome, HandOutcome::Lose);
    assert_eq!(game.money(), 900);
}

#[test]
fn dealer_at_seventeen_does_not_draw() {
    let mut game = table(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Seven),
        card(Suit::Clubs, Rank::King),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Hearts, Rank::Two),
    ]);

    game.stand().unwrap();
    assert!(game.dealer_play().unwrap().is_empty());
    let result = game.settle().unwrap();
    assert_eq!(result.seats[0].outcome, HandOutcome::Push);
    assert_eq!(game.money(), 1000);
}

#[test]
fn dealer_bust_pays_standing_seats() {
    let mut game = table(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Hearts, Rank::King),
    ]);

    game.stand().unwrap();
    game.dealer_play().unwrap();
    let result = game.settle().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.dealer_value, 26);
    assert_eq!(result.seats[0].outcome, HandOutcome::Win);
    assert_eq!(game.money(), 1100);
}

#[test]
fn player_bust_resolves_immediately() {
    let mut game = table(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Six),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Hearts, Rank::King),
        card(Suit::Hearts, Rank::Five),
    ]);

    let drawn = game.hit().unwrap();
    assert_eq!(drawn.rank(), Rank::King);
    assert_eq!(
        game.seats()[0].status(),
        SeatStatus::Resolved(HandOutcome::Bust)
    );
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.money(), 900);

    assert!(game.dealer_play().unwrap().is_empty());
    assert_eq!(game.cards_remaining(), 1);

    let result = game.settle().unwrap();
    assert_eq!(result.seats.len(), 1);
    assert_eq!(result.seats[0].outcome, HandOutcome::Bust);
    assert_eq!(result.seats[0].player_value, 26);
    assert_eq!(result.total_paid(), 0);
    assert_eq!(game.money(), 900);
}

#[test]
fn hit_keeps_the_turn_below_twenty_two() {
    let mut game = table(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Spades, Rank::Three),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Hearts, Rank::Four),
    ]);

    game.hit().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn(0));
    assert_eq!(game.seats()[0].value(), 9);
    assert_eq!(game.seats()[0].decisions(), 1);
}

#[test]
fn double_down_on_eleven() {
    let mut game = table(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Spades, Rank::Six),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Hearts, Rank::Ten),
    ]);

    assert!(game.available_actions().contains(&Action::DoubleDown));
    game.double_down().unwrap();
    assert_eq!(game.wallet().bet_value(game.seats()[0].bet()), Some(200));
    assert_eq!(game.money(), 800);
    assert_eq!(game.seats()[0].status(), SeatStatus::Standing);
    assert_eq!(game.state(), GameState::DealerTurn);

    game.dealer_play().unwrap();
    let result = game.settle().unwrap();
    assert_eq!(result.seats[0].bet, 200);
    assert_eq!(result.seats[0].paid, 400);
    assert_eq!(game.money(), 1200);
}

#[test]
fn double_down_respects_the_option() {
    let mut game = table(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Five),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Hearts, Rank::Two),
    ]);
    assert!(!game.available_actions().contains(&Action::DoubleDown));
    assert_eq!(game.double_down().unwrap_err(), ActionError::CannotDouble);
    assert_eq!(game.state(), GameState::PlayerTurn(0));

    let options = BlackjackOptions::default().with_double(DoubleOption::Any);
    let mut game = table_with(
        options,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Spades, Rank::Five),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Seven),
            card(Suit::Hearts, Rank::Two),
        ],
    );
    assert!(game.available_actions().contains(&Action::DoubleDown));
    game.act(Action::DoubleDown).unwrap();
    assert_eq!(game.seats()[0].value(), 17);
}

#[test]
fn double_down_needs_funds() {
    let options = BlackjackOptions::default().with_starting_money(150);
    let mut game = table_with(
        options,
        &[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Spades, Rank::Five),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Diamonds, Rank::Seven),
            card(Suit::Hearts, Rank::Two),
        ],
    );

    assert!(!game.available_actions().contains(&Action::DoubleDown));
    assert_eq!(game.double_down().unwrap_err(), ActionError::InsufficientFunds);
    assert_eq!(game.money(), 50);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn split_creates_a_second_seat() {
    let mut game = table(&[
        card(Suit::Hearts, Rank::Eight),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Spades, Rank::Ten),
    ]);

    assert!(game.available_actions().contains(&Action::Split));
    game.split().unwrap();

    let seats = game.seats();
    assert_eq!(seats.len(), 2);
    assert_eq!(seats[0].name(), "PLAYER");
    assert_eq!(seats[1].name(), "PLAYER (split 1)");
    assert_eq!(seats[0].value(), 11);
    assert_eq!(seats[1].value(), 18);
    assert_eq!(seats[0].decisions(), 0);
    assert_eq!(seats[1].decisions(), 0);
    assert_eq!(game.money(), 800);
    assert_eq!(game.wallet().open_bets(), vec![100, 100]);
    assert_eq!(game.state(), GameState::PlayerTurn(0));

    game.stand().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn(1));
    assert_eq!(game.current_seat().map(|seat| seat.name()), Some("PLAYER (split 1)"));
    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);

    game.dealer_play().unwrap();
    let result = game.settle().unwrap();
    assert_eq!(result.seats.len(), 2);
    assert_eq!(result.seats[0].outcome, HandOutcome::Lose);
    assert_eq!(result.seats[1].outcome, HandOutcome::Win);
    assert_eq!(result.total_bet(), 200);
    assert_eq!(game.money(), 1000);
}

#[test]
fn split_requires_an_undecided_pair() {
    let mut game = table(&[
        card(Suit::Hearts, Rank::Eight),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Seven),
    ]);
    assert!(!game.available_actions().contains(&Action::Split));
    assert_eq!(game.split().unwrap_err(), ActionError::CannotSplit);
}

#[test]
fn surrender_only_after_first_decision() {
    let mut game = table(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Two),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Hearts, Rank::Three),
    ]);

    assert!(!game.available_actions().contains(&Action::Surrender));
    assert_eq!(game.surrender().unwrap_err(), ActionError::CannotSurrender);

    game.hit().unwrap();
    assert!(game.available_actions().contains(&Action::Surrender));
    assert_eq!(game.surrender(), Ok(50));
    assert_eq!(game.money(), 950);
    assert_eq!(game.state(), GameState::DealerTurn);

    assert!(game.dealer_play().unwrap().is_empty());
    let result = game.settle().unwrap();
    assert_eq!(result.seats[0].outcome, HandOutcome::Surrendered);
    assert_eq!(game.money(), 950);
}

#[test]
fn hit_and_stand_are_offered_while_cards_remain() {
    let game = table(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Spades, Rank::Two),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Hearts, Rank::Three),
    ]);
    let actions = game.available_actions();
    assert_eq!(&actions[..2], &[Action::Hit, Action::Stand]);

    let idle = Blackjack::new(BlackjackOptions::default(), 1);
    assert!(idle.available_actions().is_empty());
}

#[test]
fn empty_shoe_only_offers_stand() {
    let mut game = table(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Spades, Rank::Five),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Seven),
    ]);
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(game.available_actions(), vec![Action::Stand]);

    game.act(Action::Stand).unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);
}

#[test]
fn bet_errors() {
    let mut game = Blackjack::new(BlackjackOptions::default(), 1);
    assert_eq!(game.place_bet(5).unwrap_err(), BetError::BelowMinimum);
    assert_eq!(game.place_bet(600).unwrap_err(), BetError::AboveMaximum);

    game.place_bet(10).unwrap();
    assert_eq!(game.place_bet(10).unwrap_err(), BetError::InvalidState);

    let options = BlackjackOptions::default().with_starting_money(50);
    let mut poor = Blackjack::new(options, 1);
    assert_eq!(poor.place_bet(100).unwrap_err(), BetError::InsufficientFunds);
    assert_eq!(poor.money(), 50);
}

#[test]
fn out_of_order_calls_are_rejected() {
    let mut game = Blackjack::new(BlackjackOptions::default(), 1);
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.settle().unwrap_err(), ShowdownError::InvalidState);

    game.place_bet(100).unwrap();
    game.set_shoe(stacked(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Hearts, Rank::Four),
    ]));
    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(game.state(), GameState::Dealing);
}

#[test]
fn rounds_repeat() {
    let mut game = Blackjack::new(BlackjackOptions::default(), 5);
    for _ in 0..3 {
        game.place_bet(10).unwrap();
        game.deal().unwrap();
        while matches!(game.state(), GameState::PlayerTurn(_)) {
            game.stand().unwrap();
        }
        game.dealer_play().unwrap();
        let result = game.settle().unwrap();
        assert_eq!(result.money, game.money());
        assert!(game.wallet().open_bets().is_empty());
    }
}
