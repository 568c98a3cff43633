//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when building a card from raw codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit code outside `1..=4`.
    #[error("invalid suit code {0}")]
    InvalidSuit(u8),
    /// Rank code outside `2..=14`.
    #[error("invalid rank code {0}")]
    InvalidRank(u8),
}

/// Errors that can occur when drawing from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in deck")]
    Empty,
}

/// Errors that can occur when a player joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// The table already holds the configured maximum of players.
    #[error("maximum number of players ({max}) already in game")]
    CapacityExceeded {
        /// Configured player cap.
        max: usize,
    },
    /// The name is not valid UTF-8 text.
    #[error("invalid player name")]
    InvalidName,
}

/// Errors that can occur while running a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    /// Fewer than two players are registered.
    #[error("not enough players ({registered} registered, 2 required)")]
    NotEnoughPlayers {
        /// Number of registered players.
        registered: usize,
    },
    /// The deck cannot cover a full turn.
    #[error("not enough remaining cards to continue the game ({remaining} left, {needed} needed)")]
    NotEnoughCards {
        /// Cards left in the deck.
        remaining: usize,
        /// Cards one turn requires.
        needed: usize,
    },
    /// The deck ran dry in the middle of a turn.
    #[error(transparent)]
    EmptyDeck(#[from] DeckError),
}
