//! Error types for hand and deck operations.

use thiserror::Error;

/// Errors that can occur when building or classifying a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// A hand must hold exactly five cards.
    #[error("a hand needs exactly 5 cards, got {len}")]
    InvalidSize {
        /// Number of cards supplied.
        len: usize,
    },
}

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Draw count is zero.
    #[error("draw count is zero")]
    ZeroCount,
    /// Draw count is above the per-draw limit.
    #[error("cannot draw {count} cards at once, the limit is {limit}")]
    TooMany {
        /// Requested number of cards.
        count: usize,
        /// Largest number of cards one draw may take.
        limit: usize,
    },
}

/// Errors that can occur when exchanging cards of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExchangeError {
    /// Position is not inside the hand.
    #[error("position {position} is outside the hand")]
    PositionOutOfRange {
        /// The offending position.
        position: usize,
    },
    /// Position was listed more than once.
    #[error("position {position} listed more than once")]
    DuplicatePosition {
        /// The repeated position.
        position: usize,
    },
    /// Drawing the replacement cards failed.
    #[error("drawing replacements failed: {0}")]
    Draw(#[from] DrawError),
}
