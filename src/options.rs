//! Game configuration options.

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use suitscore::GameOptions;
///
/// let options = GameOptions::default()
///     .with_max_players(4)
///     .with_turns(5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Maximum number of players allowed to join.
    pub max_players: usize,
    /// Number of turns; each player draws one card per turn.
    pub turns: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_players: 2,
            turns: 3,
        }
    }
}

impl GameOptions {
    /// Sets the maximum number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use suitscore::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_players(6);
    /// assert_eq!(options.max_players, 6);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets the number of turns.
    ///
    /// # Example
    ///
    /// ```
    /// use suitscore::GameOptions;
    ///
    /// let options = GameOptions::default().with_turns(10);
    /// assert_eq!(options.turns, 10);
    /// ```
    #[must_use]
    pub const fn with_turns(mut self, turns: usize) -> Self {
        self.turns = turns;
        self
    }

    /// Returns the number of cards a full game consumes.
    ///
    /// ```
    /// use suitscore::GameOptions;
    ///
    /// assert_eq!(GameOptions::default().cards_needed(2), 6);
    /// ```
    #[must_use]
    pub const fn cards_needed(&self, players: usize) -> usize {
        players.saturating_mul(self.turns)
    }
}
