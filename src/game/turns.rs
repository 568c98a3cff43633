use crate::error::RunError;
use crate::event::GameEvent;
use crate::result::GameOutcome;

use super::{Game, GameState, MIN_PLAYERS};

impl Game {
    /// Deals one card to every player in registration order.
    ///
    /// The deck is checked up front so a turn is either dealt in full or
    /// not at all.
    fn deal_turn(&mut self) -> Result<(), RunError> {
        let needed = self.players.len();
        let remaining = self.deck.len();
        if remaining < needed {
            return Err(RunError::NotEnoughCards { remaining, needed });
        }

        for index in 0..self.players.len() {
            let card = self.deck.draw()?;
            let player = &mut self.players[index];
            player.add_card(card);
            let event = GameEvent::Draw {
                player: player.id(),
                name: player.name().into(),
                card,
            };
            self.emit(event);
        }

        self.turns_played += 1;
        Ok(())
    }

    fn abort(&mut self, reason: RunError) -> RunError {
        self.emit(GameEvent::Aborted { reason });
        reason
    }

    /// Plays a game with the registered players.
    ///
    /// The deck is shuffled once, then each turn deals one card to every
    /// player. Once all turns are dealt the winners are determined with
    /// [`Game::determine_winner`].
    ///
    /// # Errors
    ///
    /// Returns [`RunError::NotEnoughPlayers`] with fewer than two players;
    /// nothing is dealt in that case. Returns [`RunError::NotEnoughCards`]
    /// when the deck cannot cover a turn: the remaining turns are skipped,
    /// cards already dealt stay in hand, no winner is determined, and the
    /// game moves to [`GameState::Aborted`].
    ///
    /// # Example
    ///
    /// ```
    /// use suitscore::{Game, GameOptions, GameState};
    ///
    /// let mut game = Game::new(GameOptions::default(), 7);
    /// game.add_player("Chuck").unwrap();
    /// game.add_player("Bob").unwrap();
    ///
    /// let outcome = game.run_game().unwrap();
    /// assert!(!outcome.winners.is_empty());
    /// assert_eq!(game.state(), GameState::Complete);
    /// assert_eq!(game.cards_remaining(), 52 - 6);
    /// ```
    pub fn run_game(&mut self) -> Result<GameOutcome, RunError> {
        let registered = self.players.len();
        if registered < MIN_PLAYERS {
            return Err(self.abort(RunError::NotEnoughPlayers { registered }));
        }

        let cards = self.deck.shuffle(&mut self.rng).len();
        self.emit(GameEvent::Shuffled { cards });

        for _ in 0..self.options.turns {
            if let Err(reason) = self.deal_turn() {
                self.state = GameState::Aborted;
                return Err(self.abort(reason));
            }
        }

        self.state = GameState::Complete;
        Ok(self.determine_winner())
    }
}
