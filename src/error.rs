//! Error types for game operations.

use thiserror::Error;

use crate::pile::PileId;

/// Errors that can occur when building a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is outside `1..=13`.
    #[error("invalid rank {0}, expected 1 through 13")]
    InvalidRank(u8),
    /// Suit name is not one of the four suits.
    #[error("unknown suit")]
    UnknownSuit,
}

/// Errors that can occur when playing the active card.
///
/// A rejected play leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// There is no active card to play.
    #[error("no active card to play")]
    NoActiveCard,
    /// The pile does not exist.
    #[error("{0} does not exist")]
    UnknownPile(PileId),
    /// The active card cannot be played on this pile.
    #[error("cannot play on {0}")]
    IllegalTarget(PileId),
}
