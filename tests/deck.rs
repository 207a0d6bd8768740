//! Deck and card set tests.

use std::collections::HashSet;

use jokerpoker::{
    Card, Deck, DeckOptions, DrawError, Hand, Rank, STANDARD_SET_SIZE, Suit, card_set,
};

fn joker_count(cards: &[Card]) -> usize {
    cards.iter().filter(|card| card.is_wildcard()).count()
}

/// Asserts that no ordinary card repeats and that no more jokers appear than
/// one card set holds.
fn assert_no_repeats(cards: &[Card], jokers: usize) {
    let ordinary: Vec<Card> = cards.iter().copied().filter(|card| !card.is_wildcard()).collect();
    let unique: HashSet<Card> = ordinary.iter().copied().collect();

    assert_eq!(unique.len(), ordinary.len());
    assert!(joker_count(cards) <= jokers);
}

#[test]
fn card_set_holds_every_card_once() {
    let cards = card_set(2);
    let unique: HashSet<Card> = cards.iter().copied().collect();

    assert_eq!(cards.len(), STANDARD_SET_SIZE + 2);
    assert_eq!(unique.len(), STANDARD_SET_SIZE + 1);
    assert_eq!(joker_count(&cards), 2);
    assert_eq!(cards[0], Card::new(Suit::Spade, Rank::Ace));
    assert_eq!(card_set(0).len(), STANDARD_SET_SIZE);
}

#[test]
fn enumerations_order_by_key() {
    assert!(Rank::Ace < Rank::King);
    assert!(Rank::Wildcard < Rank::Ace);
    assert!(Suit::Spade < Suit::Diamond);
    assert_eq!(Rank::ALL.len(), 14);
    assert_eq!(Suit::ORDINARY.len(), 4);
    assert!(Rank::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(Suit::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(Rank::Ten.label(), "10");
    assert_eq!(Card::new(Suit::Heart, Rank::Queen).to_string(), "♥ Q");
    assert_eq!(Card::JOKER.to_string(), "★ Joker");
}

#[test]
fn wildness_follows_suit() {
    assert!(Card::JOKER.is_wildcard());
    assert!(Card::new(Suit::Wildcard, Rank::Ace).is_wildcard());
    assert!(!Card::new(Suit::Club, Rank::Ace).is_wildcard());
}

#[test]
fn options_builder_sets_fields() {
    let options = DeckOptions::default().with_card_sets(3).with_jokers(0);

    assert_eq!(options.card_sets, 3);
    assert_eq!(options.jokers, 0);
    assert_eq!(DeckOptions::default().jokers, 2);

    let deck = Deck::new(options, 1);
    assert_eq!(deck.remaining(), 3 * STANDARD_SET_SIZE);
    assert_eq!(deck.card_set_size(), STANDARD_SET_SIZE);
}

#[test]
fn same_seed_same_draws() {
    let first = Deck::new(DeckOptions::default(), 7);
    let second = Deck::new(DeckOptions::default(), 7);

    for _ in 0..30 {
        assert_eq!(first.draw(5), second.draw(5));
    }
}

#[test]
fn draw_takes_from_the_top() {
    let deck = Deck::new(DeckOptions::default(), 11);
    let top: Vec<Card> = deck.cards.lock().iter().rev().take(3).copied().collect();

    assert_eq!(deck.draw(3).unwrap(), top);
    assert_eq!(deck.remaining(), 51);
}

#[test]
fn zero_draw_is_rejected() {
    let deck = Deck::new(DeckOptions::default(), 1);

    assert_eq!(deck.draw(0), Err(DrawError::ZeroCount));
    assert_eq!(deck.remaining(), 54);
}

#[test]
fn oversized_draw_is_rejected() {
    let deck = Deck::new(DeckOptions::default(), 1);
    let limit = Deck::MAX_DRAW;

    assert_eq!(
        deck.draw(usize::MAX),
        Err(DrawError::TooMany {
            count: usize::MAX,
            limit,
        })
    );
    assert_eq!(
        deck.draw(limit + 1),
        Err(DrawError::TooMany {
            count: limit + 1,
            limit,
        })
    );
    assert_eq!(deck.remaining(), 54);

    let drawn = deck.draw(limit).unwrap();
    assert_eq!(drawn.len(), limit);
    assert_eq!(deck.remaining() % 54, 54 - limit % 54);
}

#[test]
fn whole_set_draws_every_card() {
    let deck = Deck::new(DeckOptions::default(), 5);
    let mut drawn = deck.draw(54).unwrap();
    let mut expected = card_set(2);

    drawn.sort();
    expected.sort();
    assert_eq!(drawn, expected);
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn short_pool_refills_without_repeats() {
    let deck = Deck::new(DeckOptions::default(), 9);

    deck.draw(51).unwrap();
    assert_eq!(deck.remaining(), 3);

    let drawn = deck.draw(20).unwrap();
    assert_eq!(drawn.len(), 20);
    assert_no_repeats(&drawn, 2);
    assert_eq!(deck.remaining(), 3 + 54 - 20);

    for seed in 0..50 {
        let deck = Deck::new(DeckOptions::default(), seed);
        deck.draw(52).unwrap();
        let drawn = deck.draw(54).unwrap();
        assert_no_repeats(&drawn, 2);
        assert_eq!(joker_count(&drawn), 2);
    }
}

#[test]
fn empty_pool_refills_as_often_as_needed() {
    let deck = Deck::new(DeckOptions::default().with_card_sets(0), 2);
    assert_eq!(deck.remaining(), 0);

    let drawn = deck.draw(120).unwrap();
    assert_eq!(drawn.len(), 120);
    assert_eq!(deck.remaining(), 3 * 54 - 120);
}

#[test]
fn rebuild_append_and_shuffle() {
    let deck = Deck::new(DeckOptions::default(), 4);

    deck.draw(40).unwrap();
    deck.append_card_set();
    assert_eq!(deck.remaining(), 14 + 54);

    deck.shuffle();
    assert_eq!(deck.remaining(), 14 + 54);

    deck.rebuild();
    assert_eq!(deck.remaining(), 54);
}

#[test]
fn dealt_hands_never_hold_repeated_cards() {
    let deck = Deck::new(DeckOptions::default(), 13);

    for _ in 0..100 {
        let hand = Hand::deal(&deck).unwrap();
        assert_no_repeats(hand.cards(), 2);
        assert_eq!(hand.score() % 1000, 0);
    }
}

#[test]
fn deck_is_shared_between_threads() {
    let deck = Deck::new(DeckOptions::default().with_card_sets(4), 21);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..10 {
                    Hand::deal(&deck).unwrap();
                }
            });
        }
    });

    assert_eq!(deck.remaining(), 4 * 54 - 4 * 10 * 5);
}
