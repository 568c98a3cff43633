//! Card types and naming tables.

use core::fmt;

use crate::error::CardError;

/// Card suit, in ascending value order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades (code 1).
    Spades = 1,
    /// Diamonds (code 2).
    Diamonds = 2,
    /// Hearts (code 3).
    Hearts = 3,
    /// Clubs (code 4).
    Clubs = 4,
}

impl Suit {
    /// All suits in ascending code order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Hearts, Self::Clubs];

    /// Returns the suit for a numeric code in `1..=4`.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Spades),
            2 => Some(Self::Diamonds),
            3 => Some(Self::Hearts),
            4 => Some(Self::Clubs),
            _ => None,
        }
    }

    /// Returns the numeric code of the suit.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        SUIT_NAMES[(self as u8 - 1) as usize]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(CardError::InvalidSuit(code))
    }
}

const SUIT_NAMES: [&str; 4] = ["Spades", "Diamonds", "Hearts", "Clubs"];

const RANK_NAMES: [&str; 13] = [
    "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack", "Queen",
    "King", "Ace",
];

/// Lowest rank code (Two).
pub const MIN_RANK: u8 = 2;

/// Highest rank code (Ace, played high).
pub const MAX_RANK: u8 = 14;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Returns the display name for a rank code, or `None` outside `2..=14`.
///
/// ```
/// use suitscore::card::rank_name;
///
/// assert_eq!(rank_name(11), Some("Jack"));
/// assert_eq!(rank_name(14), Some("Ace"));
/// assert_eq!(rank_name(1), None);
/// ```
#[must_use]
pub const fn rank_name(rank: u8) -> Option<&'static str> {
    if rank < MIN_RANK || rank > MAX_RANK {
        return None;
    }
    Some(RANK_NAMES[(rank - MIN_RANK) as usize])
}

/// A playing card.
///
/// Cards order by suit first and rank second, which is the order
/// [`Deck::sort_cards`](crate::Deck::sort_cards) produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (2..=10, 11 = Jack, 12 = Queen, 13 = King, 14 = Ace).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Use
    /// [`Card::try_from`] with raw codes when the input is untrusted.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the score contribution of the card: suit code times rank.
    ///
    /// ```
    /// use suitscore::{Card, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Clubs, 14).value(), 56);
    /// assert_eq!(Card::new(Suit::Spades, 2).value(), 2);
    /// ```
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.suit.code() as u32 * self.rank as u32
    }
}

impl TryFrom<(u8, u8)> for Card {
    type Error = CardError;

    /// Builds a card from `(suit code, rank code)`.
    fn try_from((suit, rank): (u8, u8)) -> Result<Self, Self::Error> {
        let suit = Suit::try_from(suit)?;
        if rank_name(rank).is_none() {
            return Err(CardError::InvalidRank(rank));
        }
        Ok(Self::new(suit, rank))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match rank_name(self.rank) {
            Some(rank) => write!(f, "{rank} of {}", self.suit),
            None => write!(f, "{} of {}", self.rank, self.suit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suit_codes_round_trip_through_names() {
        for (code, name) in (1..=4).zip(SUIT_NAMES) {
            let suit = Suit::from_code(code).unwrap();
            assert_eq!(suit.code(), code);
            assert_eq!(suit.name(), name);
        }
        assert_eq!(Suit::from_code(0), None);
        assert_eq!(Suit::from_code(5), None);
    }

    #[test]
    fn card_from_codes_validates_both_parts() {
        assert_eq!(Card::try_from((3u8, 12u8)), Ok(Card::new(Suit::Hearts, 12)));
        assert_eq!(Card::try_from((0u8, 12u8)), Err(CardError::InvalidSuit(0)));
        assert_eq!(Card::try_from((2u8, 15u8)), Err(CardError::InvalidRank(15)));
        assert_eq!(Card::try_from((2u8, 1u8)), Err(CardError::InvalidRank(1)));
    }

    #[test]
    fn display_uses_rank_and_suit_words() {
        use alloc::string::ToString;

        assert_eq!(Card::new(Suit::Clubs, 14).to_string(), "Ace of Clubs");
        assert_eq!(Card::new(Suit::Diamonds, 10).to_string(), "Ten of Diamonds");
        assert_eq!(Card::new(Suit::Spades, 99).to_string(), "99 of Spades");
    }

    #[test]
    fn cards_order_by_suit_then_rank() {
        assert!(Card::new(Suit::Spades, 14) < Card::new(Suit::Diamonds, 2));
        assert!(Card::new(Suit::Hearts, 3) < Card::new(Suit::Hearts, 4));
    }
}
