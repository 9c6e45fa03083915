//! Error types for game operations.

use thiserror::Error;

/// The error returned when a card is requested from a deck with none left.
///
/// Transitions never mutate the snapshot they were called on, so after this
/// error the caller still holds the prior state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;
