//! A deterministic blackjack rules engine with optional `no_std` support.
//!
//! The crate covers the rules of a two-party round and nothing else: deck
//! construction and shuffling, ace-flex hand scoring, the hit/stand turn
//! machine with dealer auto-play, and outcome resolution. Rendering and
//! input stay with the caller, which owns the current [`GameState`] and
//! swaps it for the snapshot each transition returns. Old snapshots remain
//! valid, so undo, replay, and table-driven tests come for free.
//!
//! # Example
//!
//! ```
//! use ventuno::{GameResult, GameState, Turn};
//!
//! let mut state = GameState::deal_seeded(42);
//! assert_eq!(state.turn, Turn::Player);
//!
//! state = state.player_hits()?;
//! state = state.player_stands()?;
//!
//! assert_eq!(state.turn, Turn::Dealer);
//! assert_ne!(state.outcome(), GameResult::NoResult);
//! # Ok::<(), ventuno::EmptyDeckError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::EmptyDeckError;
pub use game::{GameState, Turn};
pub use hand::Hand;
pub use result::GameResult;
