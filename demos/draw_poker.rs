//! CLI draw poker example.

use std::io::{self, IsTerminal, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use jokerpoker::{Card, Deck, DeckOptions, Hand, Suit};

fn main() {
    println!("Joker poker CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let deck = Deck::new(DeckOptions::default(), seed);
    let color = io::stdout().is_terminal();

    loop {
        let hand = match Hand::deal(&deck) {
            Ok(hand) => hand,
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        };

        println!("\nDeck: {} cards remaining", deck.remaining());
        print_hand("This is your hand", &hand, color);

        let Some(positions) = prompt_positions("Exchange which cards? (1-5, empty keeps all): ")
        else {
            println!("Goodbye.");
            return;
        };

        let hand = match hand.exchange(&positions, &deck) {
            Ok(hand) => hand,
            Err(err) => {
                println!("Exchange error: {err}");
                continue;
            }
        };

        if !positions.is_empty() {
            print_hand("Your final hand", &hand, color);
        }
        println!("Score: {}", hand.score());

        if matches!(prompt_line("Deal again? (y/n): ").as_str(), "n" | "no" | "q" | "quit") {
            println!("Goodbye.");
            return;
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

/// Reads 1-based card numbers and returns them as hand positions.
fn prompt_positions(prompt: &str) -> Option<Vec<usize>> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }

        let parsed: Result<Vec<usize>, _> = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .map(str::parse::<usize>)
            .collect();

        match parsed {
            Ok(numbers) if numbers.iter().all(|&n| (1..=5).contains(&n)) => {
                return Some(numbers.into_iter().map(|n| n - 1).collect());
            }
            _ => println!("Please enter card numbers between 1 and 5."),
        }
    }
}

fn print_hand(title: &str, hand: &Hand, color: bool) {
    let cards = hand
        .cards()
        .iter()
        .enumerate()
        .map(|(index, card)| format!("{}:{}", index + 1, format_card(card, color)))
        .collect::<Vec<_>>()
        .join("  ");

    println!("{title}: {cards}");
    println!("{hand}");
}

fn format_card(card: &Card, color: bool) -> String {
    let color_code = match card.suit {
        Suit::Heart | Suit::Diamond => "31",
        Suit::Wildcard => "33",
        Suit::Spade | Suit::Club => return card.to_string(),
    };

    if color {
        colorize(&card.to_string(), color_code)
    } else {
        card.to_string()
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
