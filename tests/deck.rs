//! Deck integration tests.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use suitscore::{Card, DECK_SIZE, Deck, DeckError, MAX_RANK, MIN_RANK, Suit};

fn generation_order() -> Vec<Card> {
    let mut cards = Vec::new();
    for suit in 1..=4u8 {
        for rank in 2..=14u8 {
            cards.push(Card::try_from((suit, rank)).unwrap());
        }
    }
    cards
}

#[test]
fn fresh_deck_holds_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(deck.cards(), generation_order());

    let unique: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in MIN_RANK..=MAX_RANK {
            assert!(deck.contains(&Card::new(suit, rank)));
        }
    }
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let mut deck = Deck::new();
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let shuffled = deck.shuffle(&mut rng).to_vec();
    assert_eq!(shuffled, deck.cards());
    assert_ne!(shuffled, generation_order());

    let mut sorted = shuffled;
    sorted.sort();
    assert_eq!(sorted, generation_order());
}

#[test]
fn shuffle_is_deterministic_per_seed() {
    let mut a = Deck::new();
    let mut b = Deck::new();
    a.shuffle(&mut ChaCha8Rng::seed_from_u64(5));
    b.shuffle(&mut ChaCha8Rng::seed_from_u64(5));
    assert_eq!(a, b);

    let mut c = Deck::new();
    c.shuffle(&mut ChaCha8Rng::seed_from_u64(6));
    assert_ne!(a, c);
}

#[test]
fn sort_cards_orders_by_suit_then_rank() {
    let cases: [&[(u8, u8)]; 4] = [
        &[(1, 14), (4, 13), (2, 12)],
        &[(4, 14), (4, 13), (4, 12)],
        &[(1, 2), (2, 8), (2, 9), (4, 14), (4, 13), (3, 12)],
        &[(3, 3), (4, 14), (1, 2), (1, 13), (2, 5)],
    ];

    for scrambled in cases {
        let cards: Vec<Card> = scrambled
            .iter()
            .map(|&codes| Card::try_from(codes).unwrap())
            .collect();
        let sorted = Deck::sort_cards(&cards);

        assert_eq!(sorted.len(), cards.len());
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(a.suit < b.suit || (a.suit == b.suit && a.rank <= b.rank));
        }
    }
}

#[test]
fn sort_cards_leaves_the_deck_alone() {
    let mut deck = Deck::new();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(3));
    let before = deck.clone();

    let sorted = Deck::sort_cards(deck.cards());
    assert_eq!(deck, before);
    assert_eq!(sorted, generation_order());
}

#[test]
fn draws_exhaust_the_deck() {
    let mut deck = Deck::new();
    for _ in 0..DECK_SIZE {
        assert!(deck.draw().is_ok());
    }
    assert!(deck.is_empty());
    assert_eq!(deck.draw(), Err(DeckError::Empty));

    for _ in 0..47 {
        assert_eq!(deck.draw(), Err(DeckError::Empty));
    }
}

#[test]
fn one_draw_returns_a_card() {
    let mut deck = Deck::new();
    let card = deck.draw().unwrap();
    assert_eq!(deck.len(), DECK_SIZE - 1);
    assert!(!deck.contains(&card));
}
