//! Card types and card set construction.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

use crate::histogram::Ordinary;

/// Number of ordinary (non-wild) cards in one card set.
pub const STANDARD_SET_SIZE: usize = 52;

/// Number of jokers added to a card set unless configured otherwise.
pub const DEFAULT_JOKERS: u8 = 2;

/// Card suit.
///
/// Suits are ordered by their order key. The wildcard suit carries a negative
/// key and therefore sorts before every ordinary suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// The joker suit.
    Wildcard,
    /// Spades.
    Spade,
    /// Hearts.
    Heart,
    /// Clubs.
    Club,
    /// Diamonds.
    Diamond,
}

impl Suit {
    /// Every suit in declaration order, wildcard first.
    pub const ALL: [Self; 5] = [
        Self::Wildcard,
        Self::Spade,
        Self::Heart,
        Self::Club,
        Self::Diamond,
    ];

    /// The four ordinary suits in declaration order.
    pub const ORDINARY: [Self; 4] = [Self::Spade, Self::Heart, Self::Club, Self::Diamond];

    /// Returns the display label of the suit.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wildcard => "★",
            Self::Spade => "♠",
            Self::Heart => "♥",
            Self::Club => "♣",
            Self::Diamond => "♦",
        }
    }

    /// Returns the order key of the suit.
    #[must_use]
    pub const fn order(self) -> i8 {
        match self {
            Self::Wildcard => -1,
            Self::Spade => 1,
            Self::Heart => 2,
            Self::Club => 3,
            Self::Diamond => 4,
        }
    }

    /// Returns whether this is the wildcard suit.
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::Wildcard)
    }
}

impl PartialOrd for Suit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order().cmp(&other.order())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Ordinary<4> for Suit {
    const MEMBERS: [Self; 4] = Self::ORDINARY;

    fn slot(self) -> Option<usize> {
        if self.is_wildcard() {
            None
        } else {
            Some(self.order() as usize - 1)
        }
    }
}

/// Card rank.
///
/// Ranks follow card-game order rather than face value: the Ace has the
/// lowest order key (1) and is the strongest rank, the Two has the highest
/// key (13). The wildcard rank carries a negative key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// The joker rank.
    Wildcard,
    /// Ace.
    Ace,
    /// King.
    King,
    /// Queen.
    Queen,
    /// Jack.
    Jack,
    /// Ten.
    Ten,
    /// Nine.
    Nine,
    /// Eight.
    Eight,
    /// Seven.
    Seven,
    /// Six.
    Six,
    /// Five.
    Five,
    /// Four.
    Four,
    /// Three.
    Three,
    /// Two.
    Two,
}

impl Rank {
    /// Every rank in declaration order, wildcard first.
    pub const ALL: [Self; 14] = [
        Self::Wildcard,
        Self::Ace,
        Self::King,
        Self::Queen,
        Self::Jack,
        Self::Ten,
        Self::Nine,
        Self::Eight,
        Self::Seven,
        Self::Six,
        Self::Five,
        Self::Four,
        Self::Three,
        Self::Two,
    ];

    /// The thirteen ordinary ranks, Ace through Two.
    pub const ORDINARY: [Self; 13] = [
        Self::Ace,
        Self::King,
        Self::Queen,
        Self::Jack,
        Self::Ten,
        Self::Nine,
        Self::Eight,
        Self::Seven,
        Self::Six,
        Self::Five,
        Self::Four,
        Self::Three,
        Self::Two,
    ];

    /// The ranks of a royal flush.
    pub const ROYAL: [Self; 5] = [Self::Ten, Self::Jack, Self::Queen, Self::King, Self::Ace];

    /// Returns the display label of the rank.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wildcard => "Joker",
            Self::Ace => "A",
            Self::King => "K",
            Self::Queen => "Q",
            Self::Jack => "J",
            Self::Ten => "10",
            Self::Nine => "9",
            Self::Eight => "8",
            Self::Seven => "7",
            Self::Six => "6",
            Self::Five => "5",
            Self::Four => "4",
            Self::Three => "3",
            Self::Two => "2",
        }
    }

    /// Returns the order key of the rank.
    #[must_use]
    pub const fn order(self) -> i8 {
        match self {
            Self::Wildcard => -1,
            Self::Ace => 1,
            Self::King => 2,
            Self::Queen => 3,
            Self::Jack => 4,
            Self::Ten => 5,
            Self::Nine => 6,
            Self::Eight => 7,
            Self::Seven => 8,
            Self::Six => 9,
            Self::Five => 10,
            Self::Four => 11,
            Self::Three => 12,
            Self::Two => 13,
        }
    }

    /// Returns whether this is the wildcard rank.
    #[must_use]
    pub const fn is_wildcard(self) -> bool {
        matches!(self, Self::Wildcard)
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order().cmp(&other.order())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Ordinary<13> for Rank {
    const MEMBERS: [Self; 13] = Self::ORDINARY;

    fn slot(self) -> Option<usize> {
        if self.is_wildcard() {
            None
        } else {
            Some(self.order() as usize - 1)
        }
    }
}

/// A playing card.
///
/// Equality and ordering compare the suit first, then the rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card. Ignored when the suit is [`Suit::Wildcard`].
    pub rank: Rank,
}

impl Card {
    /// The joker.
    pub const JOKER: Self = Self::new(Suit::Wildcard, Rank::Wildcard);

    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the card is wild.
    ///
    /// Only the suit decides; the rank of a wild card is irrelevant.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        self.suit.is_wildcard()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit, self.rank)
    }
}

/// Builds one card set: every ordinary suit and rank pair followed by
/// `jokers` wild cards.
///
/// # Example
///
/// ```
/// use jokerpoker::card::{Card, STANDARD_SET_SIZE, card_set};
///
/// let cards = card_set(2);
/// assert_eq!(cards.len(), STANDARD_SET_SIZE + 2);
/// assert_eq!(cards.last(), Some(&Card::JOKER));
/// ```
#[must_use]
pub fn card_set(jokers: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(STANDARD_SET_SIZE + jokers as usize);

    for suit in Suit::ORDINARY {
        for rank in Rank::ORDINARY {
            cards.push(Card::new(suit, rank));
        }
    }
    cards.extend(core::iter::repeat_n(Card::JOKER, jokers as usize));

    cards
}
