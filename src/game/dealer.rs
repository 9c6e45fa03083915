use crate::error::EmptyDeckError;
use crate::result::GameResult;

use super::{GameState, Turn};

/// The dealer stands as soon as its score reaches this value.
const DEALER_STANDS_AT: u8 = 17;

impl GameState {
    /// Dealer auto-play: draw one card at a time while scoring 16 or less.
    ///
    /// The score is re-evaluated after every draw. Soft totals are not
    /// special-cased; any 17 stands.
    pub(super) fn dealer_draws_to_stand(&mut self) -> Result<(), EmptyDeckError> {
        while self.dealer_hand.score() < DEALER_STANDS_AT {
            let card = self.deck.draw()?;
            self.dealer_hand.push(card);
        }

        Ok(())
    }

    /// Resolves the outcome of this snapshot.
    ///
    /// While the turn is still with the player there is nothing to resolve
    /// and this returns [`GameResult::NoResult`]. Once the player has stood,
    /// precedence runs: player bust loses, then dealer bust loses, then a
    /// lone natural blackjack wins, then equal scores push, then the higher
    /// score wins. A natural therefore beats a 21 assembled from three or
    /// more cards.
    ///
    /// # Example
    ///
    /// ```
    /// use ventuno::{Card, Deck, GameResult, GameState, Hand, Rank, Suit, Turn};
    ///
    /// let state = GameState {
    ///     player_hand: Hand::from(vec![
    ///         Card::new(Suit::Spades, Rank::Ace),
    ///         Card::new(Suit::Hearts, Rank::King),
    ///     ]),
    ///     dealer_hand: Hand::from(vec![
    ///         Card::new(Suit::Clubs, Rank::Ten),
    ///         Card::new(Suit::Clubs, Rank::Nine),
    ///         Card::new(Suit::Clubs, Rank::Two),
    ///     ]),
    ///     deck: Deck::from(Vec::new()),
    ///     turn: Turn::Dealer,
    /// };
    ///
    /// // Both score 21, but only the player holds a natural.
    /// assert_eq!(state.outcome(), GameResult::PlayerWin);
    /// ```
    #[must_use]
    pub fn outcome(&self) -> GameResult {
        if self.turn == Turn::Player {
            return GameResult::NoResult;
        }

        let player = self.player_hand.score();
        let dealer = self.dealer_hand.score();

        if self.player_hand.is_bust() {
            GameResult::DealerWin
        } else if self.dealer_hand.is_bust() {
            GameResult::PlayerWin
        } else if self.player_hand.is_blackjack() && !self.dealer_hand.is_blackjack() {
            GameResult::PlayerWin
        } else if self.dealer_hand.is_blackjack() && !self.player_hand.is_blackjack() {
            GameResult::DealerWin
        } else if player == dealer {
            GameResult::Draw
        } else if player > dealer {
            GameResult::PlayerWin
        } else {
            GameResult::DealerWin
        }
    }
}
