//! The draw pile.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, MAX_RANK, MIN_RANK, Suit};
use crate::error::DeckError;

/// An ordered pile of cards. The top of the deck is the end of the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full, unshuffled 52-card deck.
    ///
    /// ```
    /// use suitscore::{Deck, DECK_SIZE};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Self::fresh_cards(),
        }
    }

    /// Creates a deck holding exactly the given cards, last card on top.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    fn fresh_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in MIN_RANK..=MAX_RANK {
                cards.push(Card::new(suit, rank));
            }
        }
        cards
    }

    /// Restores all 52 cards in generation order: suits ascending, ranks
    /// ascending within each suit.
    pub fn reset(&mut self) {
        self.cards = Self::fresh_cards();
    }

    /// Shuffles the remaining cards in place and returns them.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[Card] {
        self.cards.shuffle(rng);
        log::debug!("shuffled {} cards", self.cards.len());
        &self.cards
    }

    /// Returns a copy of `cards` sorted by suit, then rank.
    ///
    /// Works on any card slice and never touches a deck.
    ///
    /// ```
    /// use suitscore::{Card, Deck, Suit};
    ///
    /// let sorted = Deck::sort_cards(&[
    ///     Card::new(Suit::Clubs, 13),
    ///     Card::new(Suit::Spades, 14),
    ///     Card::new(Suit::Diamonds, 12),
    /// ]);
    /// assert_eq!(
    ///     sorted,
    ///     [
    ///         Card::new(Suit::Spades, 14),
    ///         Card::new(Suit::Diamonds, 12),
    ///         Card::new(Suit::Clubs, 13),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn sort_cards(cards: &[Card]) -> Vec<Card> {
        let mut sorted = cards.to_vec();
        sorted.sort_by_key(|card| (card.suit, card.rank));
        sorted
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if no cards are left.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Returns the cards in deck order, top card last.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the deck still holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_refills_a_drawn_deck() {
        let mut deck = Deck::new();
        for _ in 0..20 {
            deck.draw().unwrap();
        }
        assert_eq!(deck.len(), DECK_SIZE - 20);

        deck.reset();
        assert_eq!(deck, Deck::new());
    }

    #[test]
    fn top_of_fresh_deck_is_ace_of_clubs() {
        let mut deck = Deck::new();
        assert_eq!(deck.draw(), Ok(Card::new(Suit::Clubs, 14)));
        assert_eq!(deck.draw(), Ok(Card::new(Suit::Clubs, 13)));
    }

    #[test]
    fn empty_deck_reports_error() {
        let mut deck = Deck::from_cards(Vec::new());
        assert!(deck.is_empty());
        assert_eq!(deck.draw(), Err(DeckError::Empty));
    }
}
