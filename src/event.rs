//! Transcript events emitted while a game is played.
//!
//! Every line a game announces is a [`GameEvent`]; its `Display` output is
//! the text shown to the table.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::error::{JoinError, RunError};
use crate::player::PlayerId;

/// Something worth announcing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A player joined the table.
    PlayerJoined {
        /// Assigned id.
        player: PlayerId,
        /// Player name.
        name: String,
    },
    /// A join request was turned down.
    PlayerRejected {
        /// Why the request failed.
        reason: JoinError,
    },
    /// Hands were cleared for a new game.
    NewGame {
        /// Whether the deck was refilled.
        deck_reset: bool,
    },
    /// The deck was shuffled.
    Shuffled {
        /// Cards in the deck at shuffle time.
        cards: usize,
    },
    /// A player drew a card.
    Draw {
        /// Drawing player.
        player: PlayerId,
        /// Player name.
        name: String,
        /// Card drawn.
        card: Card,
    },
    /// A game could not be played or had to stop.
    Aborted {
        /// Why the game stopped.
        reason: RunError,
    },
    /// A player's final score.
    Score {
        /// Player id.
        player: PlayerId,
        /// Player name.
        name: String,
        /// Score at game end.
        score: u32,
    },
    /// A single player won.
    Winner {
        /// Winning player.
        player: PlayerId,
        /// Player name.
        name: String,
        /// Winning score.
        score: u32,
    },
    /// Several players share the top score.
    Tie {
        /// Tied players in registration order.
        players: Vec<PlayerId>,
        /// Shared score.
        score: u32,
    },
}

impl GameEvent {
    /// Returns whether the event reports a failure.
    #[must_use]
    pub const fn is_diagnostic(&self) -> bool {
        matches!(self, Self::PlayerRejected { .. } | Self::Aborted { .. })
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerJoined { player, name } => write!(f, "{name} joins the game as {player}"),
            Self::PlayerRejected {
                reason: JoinError::CapacityExceeded { .. },
            } => f.write_str("Maximum number of players already in game."),
            Self::PlayerRejected {
                reason: JoinError::InvalidName,
            } => f.write_str("Invalid input: player name must be text."),
            Self::NewGame { deck_reset: true } => f.write_str("New game with a fresh deck."),
            Self::NewGame { deck_reset: false } => f.write_str("New game with the current deck."),
            Self::Shuffled { cards } => write!(f, "Shuffling {cards} cards."),
            Self::Draw { name, card, .. } => write!(f, "Player {name} draws the {card}"),
            Self::Aborted {
                reason: RunError::NotEnoughPlayers { .. },
            } => f.write_str("Not enough players."),
            Self::Aborted {
                reason: RunError::NotEnoughCards { .. },
            } => f.write_str("Not enough remaining cards to continue the game."),
            Self::Aborted {
                reason: RunError::EmptyDeck(_),
            } => f.write_str("No cards left in deck."),
            Self::Score { name, score, .. } => write!(f, "{name}'s score is {score}"),
            Self::Winner { name, score, .. } => write!(f, "{name} wins with a score of {score}"),
            Self::Tie { players, score } => {
                write!(f, "It's a tie! {} players share {score} points", players.len())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;
    use crate::card::Suit;

    #[test]
    fn draw_line_names_rank_and_suit() {
        let event = GameEvent::Draw {
            player: PlayerId(0),
            name: "Chuck".into(),
            card: Card::new(Suit::Hearts, 12),
        };
        assert_eq!(event.to_string(), "Player Chuck draws the Queen of Hearts");
    }

    #[test]
    fn diagnostics_are_flagged() {
        let rejected = GameEvent::PlayerRejected {
            reason: JoinError::CapacityExceeded { max: 2 },
        };
        let tie = GameEvent::Tie {
            players: vec![PlayerId(0), PlayerId(1)],
            score: 0,
        };
        assert!(rejected.is_diagnostic());
        assert!(!tie.is_diagnostic());
        assert_eq!(tie.to_string(), "It's a tie! 2 players share 0 points");
    }
}
