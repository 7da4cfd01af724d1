//! CLI dealing example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cardshoe::{Card, DEFAULT_SHOE_DECKS, Shoe, StandardDeck, compare_cards};

const HAND_SIZE: usize = 5;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Card shoe CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let deck = StandardDeck::default().with_jokers(2);
    let mut shoe = Shoe::new(deck, DEFAULT_SHOE_DECKS, seed);
    shoe.shuffle();

    loop {
        println!(
            "\nShoe: {} of {} cards remaining | aces {}",
            shoe.num_cards_remaining(),
            shoe.num_cards(),
            if shoe.is_ace_high() { "high" } else { "low" }
        );

        match prompt_line("[d]eal [s]huffle [r]eset [a]ce toggle [q]uit: ").as_str() {
            "d" | "deal" => deal_hand(&mut shoe),
            "s" | "shuffle" => {
                shoe.shuffle();
                println!("Shoe shuffled.");
            }
            "r" | "reset" => {
                shoe.reset();
                println!("Shoe reset.");
            }
            "a" | "ace" => shoe.set_ace_high(!shoe.is_ace_high()),
            "q" | "quit" | "" => {
                println!("Goodbye.");
                break;
            }
            other => println!("Unknown command: {other}"),
        }
    }
}

fn deal_hand(shoe: &mut Shoe) {
    let mut hand: Vec<Card> = (0..HAND_SIZE).map_while(|_| shoe.next_card()).collect();
    if hand.is_empty() {
        println!("The shoe is empty. Shuffle or reset to keep dealing.");
        return;
    }

    hand.sort_by(compare_cards);
    for card in &hand {
        println!("  {}", format_card(card));
    }
    if hand.len() < HAND_SIZE {
        println!("Only {} cards were left.", hand.len());
    }
}

fn format_card(card: &Card) -> String {
    let text = format!("{card} (value {})", card.face_value());
    match card.suit_name() {
        "Hearts" | "Diamonds" => colorize(&text, "31"),
        _ if card.is_unsuited() => colorize(&text, "35"),
        _ => text,
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

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
