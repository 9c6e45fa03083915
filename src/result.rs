//! Round outcome types.

/// The outcome of a round, derived on demand from a
/// [`GameState`](crate::GameState).
///
/// Outcomes are never stored in the state; recompute from whatever snapshot
/// you hold via [`GameState::outcome`](crate::GameState::outcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// The player wins (dealer busts, or the player holds the higher or the
    /// only natural score).
    PlayerWin,
    /// The dealer wins (player busts, or the dealer holds the higher or the
    /// only natural score).
    DealerWin,
    /// Push: equal standing, neither side wins.
    Draw,
    /// The round is still in progress; the player has not stood yet.
    NoResult,
}
