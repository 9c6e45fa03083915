//! Game state machine and its transitions.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::hand::Hand;

mod actions;
mod dealer;
pub mod state;

pub use state::Turn;

/// A complete snapshot of a two-party round.
///
/// The state is a plain value: transitions such as
/// [`player_hits`](Self::player_hits) and
/// [`player_stands`](Self::player_stands) take `&self` and return the
/// successor state, leaving the snapshot they were called on untouched. The
/// caller holds the current state and replaces it with each result, so
/// keeping old snapshots around for undo, replay, or assertions is free.
///
/// All fields are public; a state built by hand is as valid as a dealt one,
/// which is how the tests stack decks.
///
/// # Example
///
/// ```
/// use ventuno::{GameResult, GameState, Turn};
///
/// let state = GameState::deal_seeded(42);
/// assert_eq!(state.turn, Turn::Player);
/// assert_eq!(state.outcome(), GameResult::NoResult);
///
/// let stood = state.player_stands()?;
/// assert_eq!(stood.turn, Turn::Dealer);
/// assert_ne!(stood.outcome(), GameResult::NoResult);
/// # Ok::<(), ventuno::EmptyDeckError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// The player's cards.
    pub player_hand: Hand,
    /// The dealer's cards.
    pub dealer_hand: Hand,
    /// The remaining draw pile.
    pub deck: Deck,
    /// Whose action is pending.
    pub turn: Turn,
}

impl GameState {
    /// Deals a fresh round from a newly shuffled 52-card deck.
    ///
    /// The player takes the top two cards, the dealer the next two, and the
    /// turn starts with the player.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use ventuno::{DECK_SIZE, GameState, Turn};
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    /// let state = GameState::deal(&mut rng);
    ///
    /// assert_eq!(state.player_hand.len(), 2);
    /// assert_eq!(state.dealer_hand.len(), 2);
    /// assert_eq!(state.deck.len(), DECK_SIZE - 4);
    /// assert_eq!(state.turn, Turn::Player);
    /// ```
    #[must_use]
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards: Vec<Card> = Deck::standard().shuffled(rng).into();
        let player_hand = Hand::from(cards.split_off(cards.len() - 2));
        let dealer_hand = Hand::from(cards.split_off(cards.len() - 2));

        Self {
            player_hand,
            dealer_hand,
            deck: Deck::from(cards),
            turn: Turn::Player,
        }
    }

    /// Deals a fresh round from the given seed.
    ///
    /// The same seed always deals the same round, which pins down replays
    /// and tests.
    ///
    /// # Example
    ///
    /// ```
    /// use ventuno::GameState;
    ///
    /// assert_eq!(GameState::deal_seeded(7), GameState::deal_seeded(7));
    /// ```
    #[must_use]
    pub fn deal_seeded(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::deal(&mut rng)
    }

    /// Returns the dealer card shown face up while the player acts.
    ///
    /// The dealer's first card stays face down until the round is over;
    /// renderers pair this one with a card back. `None` only for hand-built
    /// states where the dealer holds fewer than two cards.
    #[must_use]
    pub fn dealer_up_card(&self) -> Option<&Card> {
        self.dealer_hand.cards().get(1)
    }
}
