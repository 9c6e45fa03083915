use crate::error::EmptyDeckError;

use super::{GameState, Turn};

impl GameState {
    /// Player action: hit (draw one card into the player's hand).
    ///
    /// Returns the successor state; this snapshot is left untouched. The
    /// turn does not change and the score is not inspected, so a player may
    /// keep hitting past 21. Callers gate the action on [`Turn::Player`].
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] when the deck has no cards left.
    pub fn player_hits(&self) -> Result<Self, EmptyDeckError> {
        let mut next = self.clone();
        let card = next.deck.draw()?;
        next.player_hand.push(card);
        Ok(next)
    }

    /// Player action: stand (end the player's turn and play the dealer out).
    ///
    /// The dealer draws one card at a time while scoring 16 or less and
    /// stands on any 17, soft or hard. The whole dealer turn happens inside
    /// this call; the returned state is at [`Turn::Dealer`] and ready for
    /// [`outcome`](Self::outcome).
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if the deck runs out before the dealer
    /// reaches 17. This snapshot stays valid either way.
    pub fn player_stands(&self) -> Result<Self, EmptyDeckError> {
        let mut next = self.clone();
        next.dealer_draws_to_stand()?;
        next.turn = Turn::Dealer;
        Ok(next)
    }
}
