//! Players and their hands.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::event::GameEvent;

/// Identifier assigned by the game when a player joins.
///
/// Ids are never reused within one game, so two players sharing a name
/// stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A player's identity, hand, and running score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: PlayerId,
    name: String,
    hand: Vec<Card>,
    /// Always the sum of [`Card::value`] over `hand`.
    score: u32,
}

impl Player {
    /// Creates a player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
            score: 0,
        }
    }

    /// Adds a card to the hand and credits its value to the score.
    ///
    /// The same card may be added twice; the deck is what guarantees
    /// uniqueness during play.
    ///
    /// ```
    /// use suitscore::{Card, Player, PlayerId, Suit};
    ///
    /// let mut player = Player::new(PlayerId(0), "Chuck");
    /// player.add_card(Card::new(Suit::Hearts, 12));
    /// assert_eq!(player.score(), 36);
    /// ```
    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
        self.score += card.value();
    }

    /// Empties the hand and zeroes the score.
    pub fn reset_hand(&mut self) {
        self.hand.clear();
        self.score = 0;
    }

    /// Returns the score line for this player.
    #[must_use]
    pub fn score_report(&self) -> GameEvent {
        GameEvent::Score {
            player: self.id,
            name: self.name.clone(),
            score: self.score,
        }
    }

    /// Returns the player's id.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cards received, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::card::Suit;

    #[test]
    fn score_tracks_hand() {
        let mut player = Player::new(PlayerId(3), "Bob");
        let cards = [
            Card::new(Suit::Hearts, 2),
            Card::new(Suit::Spades, 13),
            Card::new(Suit::Diamonds, 6),
        ];
        for card in cards {
            player.add_card(card);
        }

        assert_eq!(player.hand(), cards);
        assert_eq!(player.score(), 6 + 13 + 12);

        player.reset_hand();
        assert!(player.hand().is_empty());
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn duplicate_cards_are_accepted() {
        let mut player = Player::new(PlayerId(0), "Dave");
        let card = Card::new(Suit::Clubs, 14);
        player.add_card(card);
        player.add_card(card);
        assert_eq!(player.hand().len(), 2);
        assert_eq!(player.score(), 112);
    }

    #[test]
    fn score_report_names_player() {
        let mut player = Player::new(PlayerId(1), "Chuck");
        player.add_card(Card::new(Suit::Clubs, 10));
        assert_eq!(player.score_report().to_string(), "Chuck's score is 40");
    }
}
