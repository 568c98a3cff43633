//! Game state types.

/// Game state.
///
/// `WaitingForPlayers → Ready → Complete | Aborted`, and back to `Ready`
/// through [`Game::new_game`](crate::Game::new_game).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Fewer than two players have joined.
    WaitingForPlayers,
    /// Enough players to run a game.
    Ready,
    /// Every turn was dealt and a winner was determined.
    Complete,
    /// The deck ran short before the last turn; no winner.
    Aborted,
}

impl GameState {
    /// Returns whether the last game ended, with or without a winner.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Complete | Self::Aborted)
    }
}
