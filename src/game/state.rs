//! Turn marker for the game state machine.

/// Whose action is pending.
///
/// A fresh deal starts at [`Turn::Player`]. Standing plays the dealer out
/// and moves the state to [`Turn::Dealer`], which is terminal: the round is
/// over and its outcome can be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The player may hit or stand.
    Player,
    /// The dealer has played out; the round is over.
    Dealer,
}
