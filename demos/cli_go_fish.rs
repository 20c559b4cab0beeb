//! CLI Go Fish example.
//!
//! Set `RUST_LOG=cardrs=debug` to see the engine's trace output on stderr.

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use cardrs::{Event, GoFish, GoFishOptions, Rank};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Go Fish CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = GoFish::new(GoFishOptions::default(), seed);
    if let Err(err) = game.new_game() {
        println!("Could not start: {err}");
        return;
    }
    play_events(&mut game);

    while game.current_player().is_some() {
        if !game.is_human_turn() {
            if let Err(err) = game.play_opponent_turn() {
                println!("Opponent error: {err}");
                return;
            }
            play_events(&mut game);
            continue;
        }

        print_table(&game);
        let targets = game.valid_targets();
        let result = if targets.is_empty() {
            prompt_line("Nobody left to ask. Press enter to fish: ");
            game.fish()
        } else {
            let Some(target) = prompt_target(&game, &targets) else {
                return;
            };
            let Some(rank) = prompt_rank() else {
                return;
            };
            game.ask(target, rank)
        };

        if let Err(err) = result {
            println!("Turn error: {err}");
        }
        play_events(&mut game);
    }

    println!("\nFinal scores:");
    for score in game.books().scores() {
        println!("  {}: {} book(s)", score.name, score.books);
    }
}

/// Prints queued notices and honours the pauses between them.
fn play_events(game: &mut GoFish) {
    for event in game.drain_events() {
        match event {
            Event::Notice { text, .. } => println!("> {text}"),
            Event::BookCompleted { owner, rank } => {
                println!("* {owner} lays down the {}", rank.plural_name());
            }
            Event::Pause(delay) => thread::sleep(delay),
        }
    }
}

fn print_table(game: &GoFish) {
    println!("\nPile: {} cards", game.pile().len());
    for (index, player) in game.players().iter().enumerate() {
        let books = game.books().book_count(index);
        let out = if game.round().is_active(index) { "" } else { " (out)" };
        println!(
            "  [{index}] {}: {} card(s), {books} book(s){out}",
            player.name(),
            player.hand().len()
        );
    }

    let mut hand = game.players()[0].hand().clone();
    hand.sort();
    let codes: Vec<String> = hand.cards().iter().map(|c| c.asset_code(false)).collect();
    println!("Your hand: {}", codes.join(" "));
}

fn prompt_target(game: &GoFish, targets: &[usize]) -> Option<usize> {
    loop {
        let names: Vec<String> = targets
            .iter()
            .map(|&index| format!("{index}={}", game.players()[index].name()))
            .collect();
        let input = prompt_line(&format!("Ask whom? ({}): ", names.join(", ")));
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(index) if targets.contains(&index) => return Some(index),
            _ => println!("Pick one of the listed players."),
        }
    }
}

fn prompt_rank() -> Option<Rank> {
    loop {
        let input = prompt_line("Which rank? (a, 2-10, j, queen, k): ");
        let rank = match input.as_str() {
            "q" | "quit" => return None,
            "a" | "ace" => Some(Rank::Ace),
            "j" | "jack" => Some(Rank::Jack),
            "queen" => Some(Rank::Queen),
            "k" | "king" => Some(Rank::King),
            other => other.parse::<u8>().ok().and_then(Rank::from_ordinal),
        };
        match rank {
            Some(rank) => return Some(rank),
            None => println!("Unknown rank."),
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
