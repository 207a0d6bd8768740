//! Five-card hands and their classification.
//!
//! Classification never enumerates wildcard substitutions. Every category
//! test is a closed-form check on the suit and rank histograms of the
//! non-wild cards: the `w` wild cards can always be given whatever suit and
//! rank the test is missing, so a test only has to ask whether the `n` ordinary
//! cards leave room for them.

use core::fmt;

use crate::card::{Card, Rank, Suit};
use crate::category::Category;
use crate::deck::Deck;
use crate::error::{DrawError, ExchangeError, HandError};
use crate::histogram::Histogram;
use crate::result::Outcome;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// Suit counts of the non-wild cards of a hand.
pub type SuitHistogram = Histogram<Suit, 4>;

/// Rank counts of the non-wild cards of a hand.
pub type RankHistogram = Histogram<Rank, 13>;

/// Classifies five cards.
///
/// Returns the category together with its score.
///
/// # Errors
///
/// Returns an error if `cards` does not hold exactly five cards.
///
/// # Example
///
/// ```
/// use jokerpoker::{Card, Category, Rank, Suit, classify};
///
/// let cards = [
///     Card::JOKER,
///     Card::JOKER,
///     Card::new(Suit::Heart, Rank::Seven),
///     Card::new(Suit::Club, Rank::Seven),
///     Card::new(Suit::Diamond, Rank::King),
/// ];
/// assert_eq!(classify(&cards), Ok((Category::FourOfAKind, 7000)));
/// ```
pub fn classify(cards: &[Card]) -> Result<(Category, u32), HandError> {
    if cards.len() != HAND_SIZE {
        return Err(HandError::InvalidSize { len: cards.len() });
    }

    let category = Counts::new(cards).category();
    Ok((category, category.score()))
}

fn normal_cards(cards: &[Card]) -> impl Iterator<Item = &Card> {
    cards.iter().filter(|card| !card.is_wildcard())
}

/// Histograms of the non-wild cards of a hand.
struct Counts {
    /// Number of non-wild cards.
    normal: u8,
    suits: SuitHistogram,
    ranks: RankHistogram,
}

impl Counts {
    fn new(cards: &[Card]) -> Self {
        Self {
            normal: normal_cards(cards).count() as u8,
            suits: Histogram::new(normal_cards(cards).map(|card| card.suit)),
            ranks: Histogram::new(normal_cards(cards).map(|card| card.rank)),
        }
    }

    /// Returns the first category, strongest first, the cards satisfy.
    fn category(&self) -> Category {
        Category::BY_PRIORITY
            .into_iter()
            .find(|&category| self.satisfies(category))
            .unwrap_or(Category::HighCard)
    }

    /// Tests the raw condition of one category.
    ///
    /// A stronger hand often satisfies the condition of a weaker category
    /// too, so the result is only meaningful in priority order.
    fn satisfies(&self, category: Category) -> bool {
        match category {
            // With no ordinary cards every count is zero, so five wild cards
            // land here as well.
            Category::FiveOfAKind => self.ranks.contains(self.normal),
            Category::RoyalFlush => {
                self.is_flush() && self.ranks.sum_over(&Rank::ROYAL) == u32::from(self.normal)
            }
            Category::StraightFlush => self.is_flush() && self.is_straight(),
            Category::FourOfAKind => self.of_a_kind_short_by(1),
            Category::FullHouse => self.ranks.distinct() == 2,
            Category::Flush => self.is_flush(),
            Category::Straight => self.is_straight(),
            Category::ThreeOfAKind => self.of_a_kind_short_by(2),
            Category::TwoPair => self.ranks.distinct() == 3,
            Category::OnePair => self.ranks.distinct() == 4,
            Category::HighCard => true,
        }
    }

    fn is_flush(&self) -> bool {
        self.suits.contains(self.normal)
    }

    /// No rank repeats and some run of five consecutive ranks, Ace down to
    /// Two without wrapping, holds every ordinary card.
    fn is_straight(&self) -> bool {
        self.ranks.max() <= 1
            && self
                .ranks
                .windows(HAND_SIZE)
                .any(|sum| sum == u32::from(self.normal))
    }

    /// Some rank holds all ordinary cards but `missing` of them.
    fn of_a_kind_short_by(&self, missing: u8) -> bool {
        self.normal
            .checked_sub(missing)
            .is_some_and(|count| self.ranks.contains(count))
    }
}

/// A classified five-card hand.
///
/// The category is computed once, when the hand is built, and the hand is
/// read-only afterwards. Cards are kept sorted by rank then suit, so wild
/// cards come first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    category: Category,
}

impl Hand {
    /// Builds and classifies a hand.
    ///
    /// # Errors
    ///
    /// Returns an error if `cards` does not hold exactly five cards.
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::InvalidSize { len: cards.len() })?;

        Ok(Self::from_array(cards))
    }

    fn from_array(mut cards: [Card; HAND_SIZE]) -> Self {
        cards.sort_unstable_by_key(|card| (card.rank, card.suit));
        let category = Counts::new(&cards).category();

        Self { cards, category }
    }

    /// Draws five cards from the deck and classifies them.
    ///
    /// # Errors
    ///
    /// Returns an error if the draw fails.
    pub fn deal(deck: &Deck) -> Result<Self, DrawError> {
        let mut cards = [Card::JOKER; HAND_SIZE];
        for (slot, card) in cards.iter_mut().zip(deck.draw(HAND_SIZE)?) {
            *slot = card;
        }

        Ok(Self::from_array(cards))
    }

    /// Returns the cards of the hand.
    #[must_use]
    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    /// Returns the category of the hand.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Returns the score of the hand.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.category.score()
    }

    /// Returns the number of wild cards.
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_wildcard()).count()
    }

    /// Returns the number of non-wild cards.
    #[must_use]
    pub fn normal_count(&self) -> usize {
        HAND_SIZE - self.wildcard_count()
    }

    /// Returns the suit histogram of the non-wild cards.
    #[must_use]
    pub fn suit_histogram(&self) -> SuitHistogram {
        Counts::new(&self.cards).suits
    }

    /// Returns the rank histogram of the non-wild cards.
    #[must_use]
    pub fn rank_histogram(&self) -> RankHistogram {
        Counts::new(&self.cards).ranks
    }

    /// Compares this hand against another by score.
    ///
    /// Hands of the same category always draw.
    #[must_use]
    pub fn versus(&self, other: &Self) -> Outcome {
        self.score().cmp(&other.score()).into()
    }

    /// Discards the cards at `positions` and returns a new hand with
    /// replacements drawn from the deck.
    ///
    /// Positions index into [`Self::cards`]. This hand is left untouched.
    /// With no positions the same hand is returned and nothing is drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if a position is not below five or is listed twice.
    pub fn exchange(&self, positions: &[usize], deck: &Deck) -> Result<Self, ExchangeError> {
        let mut picked = [false; HAND_SIZE];
        for &position in positions {
            let slot = picked
                .get_mut(position)
                .ok_or(ExchangeError::PositionOutOfRange { position })?;
            if *slot {
                return Err(ExchangeError::DuplicatePosition { position });
            }
            *slot = true;
        }

        if positions.is_empty() {
            return Ok(self.clone());
        }

        let mut cards = self.cards;
        let replacements = deck.draw(positions.len())?;
        for (&position, card) in positions.iter().zip(replacements) {
            cards[position] = card;
        }

        Ok(Self::from_array(cards))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category.label())
    }
}
