//! CLI blackjack example.
//!
//! Set `RUST_LOG=cardrs=debug` to see the engine's trace output on stderr.

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use cardrs::{
    Action, Blackjack, BlackjackOptions, Card, DealerHand, Event, GameState, Rank, Seat, Suit,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Blackjack::new(BlackjackOptions::default(), seed);

    loop {
        let money = game.money();
        if money < game.options().min_bet {
            println!("You are out of money. Game over.");
            break;
        }

        let max = game.options().max_bet.min(money);
        let prompt = format!("Bet amount ({}-{max}, 0 to quit): ", game.options().min_bet);
        let Some(bet) = prompt_usize(&prompt) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        if let Err(err) = game.place_bet(bet) {
            println!("Bet error: {err}");
            continue;
        }

        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            break;
        }
        play_events(&mut game);

        while matches!(game.state(), GameState::PlayerTurn(_)) {
            print_table(&game);

            println!("{}", format_actions(&game));
            let action = match prompt_line("Action: ").as_str() {
                "h" | "hit" => Action::Hit,
                "s" | "stand" => Action::Stand,
                "d" | "double" => Action::DoubleDown,
                "p" | "split" => Action::Split,
                "u" | "surrender" => Action::Surrender,
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = game.act(action) {
                println!("Action error: {err}");
            }
            play_events(&mut game);
        }

        match game.dealer_play() {
            Ok(drawn) => {
                if !drawn.is_empty() {
                    println!("Dealer draws {} card(s).", drawn.len());
                }
            }
            Err(err) => println!("Dealer error: {err}"),
        }
        play_events(&mut game);

        match game.settle() {
            Ok(result) => {
                play_events(&mut game);
                print_table_final(&game);
                println!("Round complete.");
                for seat in &result.seats {
                    println!("{}: {:?}, paid {}", seat.name, seat.outcome, seat.paid);
                }
                println!("Net {} | money {}", result.net(), result.money);
            }
            Err(err) => println!("Settle error: {err}"),
        }
    }
}

/// Prints queued notices and honours the pauses between them.
fn play_events(game: &mut Blackjack) {
    for event in game.drain_events() {
        match event {
            Event::Notice { text, .. } => println!("> {text}"),
            Event::Pause(delay) => thread::sleep(delay),
            Event::BookCompleted { .. } => {}
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Blackjack) {
    let remaining = game.cards_remaining();
    println!("\nShoe: {remaining} cards remaining");

    let dealer = game.dealer();
    println!(
        "\nDealer: {} (value {})",
        format_dealer(dealer),
        dealer.visible_totals().best()
    );

    let current = match game.state() {
        GameState::PlayerTurn(index) => Some(index),
        _ => None,
    };
    for (index, seat) in game.seats().iter().enumerate() {
        let marker = if Some(index) == current { "*" } else { " " };
        print_seat(game, marker, seat);
    }
    println!();
}

fn print_table_final(game: &Blackjack) {
    let dealer = game.dealer();
    println!(
        "\nDealer: {} (value {})",
        format_dealer(dealer),
        dealer.value()
    );
    for seat in game.seats() {
        print_seat(game, " ", seat);
    }
    println!();
}

fn print_seat(game: &Blackjack, marker: &str, seat: &Seat) {
    let bet = game.wallet().bet_value(seat.bet()).unwrap_or(0);
    println!(
        "{marker} {}: {} | value {} | bet {bet} | {:?}",
        seat.name(),
        format_cards(seat.hand().cards()),
        seat.value(),
        seat.status()
    );
}

fn format_actions(game: &Blackjack) -> String {
    let available = game.available_actions();
    let keys = [
        (Action::Hit, "h"),
        (Action::Stand, "s"),
        (Action::DoubleDown, "d"),
        (Action::Split, "p"),
        (Action::Surrender, "u"),
    ];
    let parts: Vec<String> = keys
        .iter()
        .map(|(action, key)| {
            let text = format!("[{key}]{}", action.label());
            if available.contains(action) {
                colorize(&text, "32")
            } else {
                colorize(&text, "90")
            }
        })
        .collect();
    format!("Actions: {}", parts.join(" "))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    if dealer.is_hole_revealed() {
        format_cards(dealer.cards())
    } else {
        let mut parts = Vec::new();
        if let Some(card) = dealer.up_card() {
            parts.push(format_card(card));
        }
        if dealer.len() > 1 {
            parts.push("??".to_string());
        }
        parts.join(" ")
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    let code = card.asset_code(false);
    if matches!(card.rank(), Rank::Jack | Rank::Queen | Rank::King) {
        colorize(&code, color_code)
    } else {
        let (rank, suit) = code.split_at(1);
        format!("{rank}{}", colorize(suit, color_code))
    }
}
