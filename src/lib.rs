//! A suit-times-rank card game engine with optional `no_std` support.
//!
//! Players draw one card per turn from a shuffled 52-card deck. Each card
//! scores its suit code (Spades 1 through Clubs 4) times its rank (Two 2
//! through Ace 14), and the highest total wins; equal totals tie.
//!
//! The crate provides a [`Game`] type that owns the [`Deck`] and the
//! [`Player`]s and records every announcement as a [`GameEvent`].
//!
//! # Example
//!
//! ```
//! use suitscore::{Game, GameOptions};
//!
//! let mut game = Game::new(GameOptions::default(), 42);
//! game.add_player("Bob").unwrap();
//! game.add_player("Chuck").unwrap();
//!
//! let outcome = game.run_game().unwrap();
//! for event in game.take_events() {
//!     println!("{event}");
//! }
//! assert!(!outcome.winners.is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit, rank_name};
pub use deck::Deck;
pub use error::{CardError, DeckError, JoinError, RunError};
pub use event::GameEvent;
pub use game::{Game, GameState, MIN_PLAYERS};
pub use options::GameOptions;
pub use player::{Player, PlayerId};
pub use result::{GameOutcome, PlayerStanding};
