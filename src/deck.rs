//! Seeded deck with automatic refill.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, STANDARD_SET_SIZE, card_set};
use crate::error::DrawError;
use crate::histogram::Ordinary;
use crate::options::DeckOptions;
use crate::sync::Mutex;

/// A shuffled pool of cards that never runs dry.
///
/// The pool is drawn from the top. When a draw asks for more cards than
/// remain, a freshly shuffled card set is slid under the remaining cards
/// before drawing. The pool and the random number generator sit behind
/// mutexes, so a deck can be shared between threads by reference.
pub struct Deck {
    /// Cards left in the pool. The last card is the top of the pool.
    pub cards: Mutex<Vec<Card>>,
    /// Deck options.
    pub options: DeckOptions,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

/// Slot of a card in a table of every distinct card, wild cards last.
///
/// A non-wild card with a wildcard rank has no slot.
fn card_slot(card: Card) -> Option<usize> {
    if card.is_wildcard() {
        return Some(STANDARD_SET_SIZE);
    }
    Some(card.suit.slot()? * 13 + card.rank.slot()?)
}

impl Deck {
    /// Largest number of cards a single draw may take.
    pub const MAX_DRAW: usize = 1 << 16;

    /// Creates a new deck with the given seed.
    ///
    /// The same options and seed always produce the same sequence of draws.
    ///
    /// # Example
    ///
    /// ```
    /// use jokerpoker::{Deck, DeckOptions};
    ///
    /// let deck = Deck::new(DeckOptions::default(), 42);
    /// assert_eq!(deck.remaining(), 54);
    /// ```
    #[must_use]
    pub fn new(options: DeckOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::create_pool(&options, &mut rng);

        Self {
            cards: Mutex::new(cards),
            options,
            rng: Mutex::new(rng),
        }
    }

    /// Creates a pool of `card_sets` shuffled card sets.
    fn create_pool(options: &DeckOptions, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(options.card_sets as usize * Self::set_size(options));

        for _ in 0..options.card_sets {
            let mut set = card_set(options.jokers);
            set.shuffle(rng);
            cards.append(&mut set);
        }

        cards
    }

    const fn set_size(options: &DeckOptions) -> usize {
        STANDARD_SET_SIZE + options.jokers as usize
    }

    /// Slides one shuffled card set under `cards`.
    ///
    /// Copies of cards that are still waiting in `cards` are placed at the
    /// very bottom, so drawing through the old cards and into the new set
    /// meets every card of the set at most once.
    fn refill(cards: &mut Vec<Card>, jokers: u8, rng: &mut ChaCha8Rng) {
        let mut fresh = card_set(jokers);
        fresh.shuffle(rng);

        let mut waiting = [0_usize; STANDARD_SET_SIZE + 1];
        for slot in cards.iter().filter_map(|&card| card_slot(card)) {
            waiting[slot] += 1;
        }
        let (repeats, unique): (Vec<Card>, Vec<Card>) =
            fresh.into_iter().partition(|&card| match card_slot(card) {
                Some(slot) if waiting[slot] > 0 => {
                    waiting[slot] -= 1;
                    true
                }
                _ => false,
            });

        let mut pool = repeats;
        pool.extend(unique);
        pool.append(cards);
        *cards = pool;
    }

    /// Returns the number of cards in one card set, jokers included.
    #[must_use]
    pub const fn card_set_size(&self) -> usize {
        Self::set_size(&self.options)
    }

    /// Returns the number of cards remaining in the pool.
    pub fn remaining(&self) -> usize {
        self.cards.lock().len()
    }

    /// Discards the pool and builds a fresh shuffled one.
    pub fn rebuild(&self) {
        let mut rng = self.rng.lock();
        let cards = Self::create_pool(&self.options, &mut rng);
        drop(rng);

        *self.cards.lock() = cards;
    }

    /// Slides one freshly shuffled card set under the pool.
    pub fn append_card_set(&self) {
        let mut cards = self.cards.lock();
        let mut rng = self.rng.lock();
        Self::refill(&mut cards, self.options.jokers, &mut rng);
    }

    /// Shuffles the cards remaining in the pool.
    pub fn shuffle(&self) {
        let mut cards = self.cards.lock();
        let mut rng = self.rng.lock();
        cards.shuffle(&mut *rng);
    }

    /// Draws `count` cards from the top of the pool.
    ///
    /// The pool is refilled as often as needed, so a draw never runs out of
    /// cards. A draw of at most [`Self::card_set_size`] cards from a
    /// single-set deck contains every card at most once.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is zero or above [`Self::MAX_DRAW`]. The
    /// pool is left untouched in both cases.
    pub fn draw(&self, count: usize) -> Result<Vec<Card>, DrawError> {
        if count == 0 {
            return Err(DrawError::ZeroCount);
        }
        if count > Self::MAX_DRAW {
            return Err(DrawError::TooMany {
                count,
                limit: Self::MAX_DRAW,
            });
        }

        let mut cards = self.cards.lock();
        if cards.len() < count {
            let mut rng = self.rng.lock();
            while cards.len() < count {
                Self::refill(&mut cards, self.options.jokers, &mut rng);
            }
        }

        let split = cards.len() - count;
        let mut drawn = cards.split_off(split);
        drawn.reverse();

        Ok(drawn)
    }
}
