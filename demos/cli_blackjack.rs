//! CLI blackjack example.
//!
//! The demo owns the current [`GameState`] snapshot and swaps it for
//! whatever each transition returns; the engine itself never prompts or
//! prints.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ventuno::{Card, GameResult, GameState, Hand, Rank, Suit, Turn};

fn main() {
    println!("Blackjack CLI example (h hit, s stand, r redeal, q quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut state = GameState::deal(&mut rng);

    loop {
        print_table(&state);

        let action = prompt_line("Action: ");
        match action.as_str() {
            "h" | "hit" if state.turn == Turn::Player => match state.player_hits() {
                Ok(next) => state = next,
                Err(err) => println!("Action error: {err}"),
            },
            "s" | "stand" if state.turn == Turn::Player => match state.player_stands() {
                Ok(next) => state = next,
                Err(err) => println!("Action error: {err}"),
            },
            "h" | "hit" | "s" | "stand" => println!("The round is over. Redeal with 'r'."),
            "r" | "redeal" => state = GameState::deal(&mut rng),
            "q" | "quit" => return,
            _ => println!("Unknown action."),
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

fn print_table(state: &GameState) {
    println!("\nDeck: {} cards remaining", state.deck.len());

    let dealer_view = match state.turn {
        Turn::Player => format_hidden_dealer(state),
        Turn::Dealer => format!(
            "{} (score {})",
            format_hand(&state.dealer_hand),
            state.dealer_hand.score()
        ),
    };
    println!("Dealer: {dealer_view}");

    let bust = if state.player_hand.is_bust() { " BUST" } else { "" };
    println!(
        "Player: {} (score {}{})",
        format_hand(&state.player_hand),
        state.player_hand.score(),
        bust
    );

    if state.turn == Turn::Dealer {
        println!("Result: {}", describe_result(state.outcome()));
    }
    println!();
}

/// Dealer line while the player still acts: hole card down, up card shown.
fn format_hidden_dealer(state: &GameState) -> String {
    let mut parts = Vec::new();
    if state.dealer_hand.len() > 1 {
        parts.push("??".to_string());
    }
    if let Some(card) = state.dealer_up_card() {
        parts.push(format_card(card));
    }

    if parts.is_empty() {
        return "(no cards)".to_string();
    }
    parts.join(" ")
}

const fn describe_result(result: GameResult) -> &'static str {
    match result {
        GameResult::PlayerWin => "player wins",
        GameResult::DealerWin => "dealer wins",
        GameResult::Draw => "draw",
        GameResult::NoResult => "still playing",
    }
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let (rank, is_face) = match card.rank {
        Rank::Ace => ("A".to_string(), true),
        Rank::Jack => ("J".to_string(), true),
        Rank::Queen => ("Q".to_string(), true),
        Rank::King => ("K".to_string(), true),
        numeric => (numeric.value().to_string(), false),
    };

    let colored_rank = if is_face {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
