//! Game outcome types.

use alloc::vec::Vec;

use crate::player::PlayerId;

/// Final score of a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStanding {
    /// The player ID.
    pub player_id: PlayerId,
    /// Score at game end.
    pub score: u32,
    /// Number of cards held.
    pub cards: usize,
}

/// Result of a completed game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    /// Players sharing the top score, in registration order.
    pub winners: Vec<PlayerId>,
    /// The top score.
    pub top_score: u32,
    /// Every player's standing, in registration order.
    pub standings: Vec<PlayerStanding>,
}

impl GameOutcome {
    /// Returns the sole winner, or `None` on a tie or an empty table.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.winners.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Returns whether two or more players share the top score.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }

    /// Returns whether `player` is among the winners.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners.contains(&player)
    }
}
