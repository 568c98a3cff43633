//! Game engine and state management.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::JoinError;
use crate::event::GameEvent;
use crate::options::GameOptions;
use crate::player::{Player, PlayerId};

mod state;
mod turns;
mod winner;

pub use state::GameState;

/// Number of players a game needs before it can be run.
pub const MIN_PLAYERS: usize = 2;

/// A card game that owns the deck and the players.
///
/// Players join with [`Game::add_player`], [`Game::run_game`] deals the
/// configured number of turns and scores the table, and
/// [`Game::new_game`] clears hands for another round. Every announcement
/// is recorded as a [`GameEvent`] and sent to the `log` facade.
#[derive(Debug, Clone)]
pub struct Game {
    /// Cards still to be drawn.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Current game state.
    state: GameState,
    /// Players in registration order.
    players: Vec<Player>,
    /// Next player ID to assign.
    next_id: u32,
    /// Turns completed in the current game.
    turns_played: usize,
    /// Announcements not yet taken by the caller.
    events: Vec<GameEvent>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with a fresh deck and the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use suitscore::{Game, GameOptions, GameState};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.state(), GameState::WaitingForPlayers);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new game seeded from the operating system.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_entropy(options: GameOptions) -> Self {
        Self::with_rng(options, ChaCha8Rng::from_os_rng())
    }

    fn with_rng(options: GameOptions, rng: ChaCha8Rng) -> Self {
        Self {
            deck: Deck::new(),
            options,
            state: GameState::WaitingForPlayers,
            players: Vec::new(),
            next_id: 0,
            turns_played: 0,
            events: Vec::new(),
            rng,
        }
    }

    /// Records an announcement and forwards it to the logger.
    fn emit(&mut self, event: GameEvent) {
        if event.is_diagnostic() {
            log::warn!("{event}");
        } else if matches!(
            event,
            GameEvent::Score { .. } | GameEvent::Winner { .. } | GameEvent::Tie { .. }
        ) {
            log::info!("{event}");
        } else {
            log::debug!("{event}");
        }
        self.events.push(event);
    }

    /// Adds a player to the table.
    ///
    /// The name must be UTF-8 text. Names are not required to be unique or
    /// non-empty; the returned [`PlayerId`] identifies the player.
    ///
    /// A rejected request changes nothing besides recording a
    /// [`GameEvent::PlayerRejected`] diagnostic.
    ///
    /// # Errors
    ///
    /// Returns [`JoinError::CapacityExceeded`] when the table is full and
    /// [`JoinError::InvalidName`] when the name is not valid UTF-8.
    pub fn add_player(&mut self, name: impl AsRef<[u8]>) -> Result<PlayerId, JoinError> {
        let result = self.join(name.as_ref());
        if let Err(reason) = result {
            self.emit(GameEvent::PlayerRejected { reason });
        }
        result
    }

    fn join(&mut self, name: &[u8]) -> Result<PlayerId, JoinError> {
        if self.players.len() >= self.options.max_players {
            return Err(JoinError::CapacityExceeded {
                max: self.options.max_players,
            });
        }
        let name = core::str::from_utf8(name).map_err(|_| JoinError::InvalidName)?;

        let id = PlayerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.players.push(Player::new(id, name));

        if self.state == GameState::WaitingForPlayers && self.players.len() >= MIN_PLAYERS {
            self.state = GameState::Ready;
        }

        self.emit(GameEvent::PlayerJoined {
            player: id,
            name: name.into(),
        });
        Ok(id)
    }

    /// Removes a player from the table, returning them if they were present.
    pub fn remove_player(&mut self, player_id: PlayerId) -> Option<Player> {
        let index = self.players.iter().position(|p| p.id() == player_id)?;
        let player = self.players.remove(index);
        self.refresh_waiting();
        Some(player)
    }

    /// Removes every player.
    pub fn clear_players(&mut self) {
        self.players.clear();
        self.refresh_waiting();
    }

    fn refresh_waiting(&mut self) {
        if self.players.len() < MIN_PLAYERS {
            self.state = GameState::WaitingForPlayers;
        }
    }

    /// Clears every hand and score for another game with the same players.
    ///
    /// With `reset_deck` the deck is refilled to 52 unshuffled cards;
    /// otherwise it keeps whatever cards are left from the last game.
    pub fn new_game(&mut self, reset_deck: bool) {
        if reset_deck {
            self.deck.reset();
        }
        for player in &mut self.players {
            player.reset_hand();
        }
        self.turns_played = 0;
        self.state = if self.players.len() >= MIN_PLAYERS {
            GameState::Ready
        } else {
            GameState::WaitingForPlayers
        };
        self.emit(GameEvent::NewGame {
            deck_reset: reset_deck,
        });
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the players in registration order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player with the given ID.
    #[must_use]
    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    /// Returns the player with the given ID for direct hand edits.
    pub fn player_mut(&mut self, player_id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == player_id)
    }

    /// Returns the number of registered players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the deck for direct manipulation.
    pub const fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of turns completed in the current game.
    #[must_use]
    pub const fn turns_played(&self) -> usize {
        self.turns_played
    }

    /// Returns the announcements recorded so far.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Takes the recorded announcements, leaving the transcript empty.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        core::mem::take(&mut self.events)
    }
}
