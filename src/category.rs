//! Hand categories and their scores.

use core::fmt;

/// One of the eleven poker hand categories, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// No other category applies.
    HighCard,
    /// Four distinct ranks.
    OnePair,
    /// Three distinct ranks.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Two distinct ranks.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A straight in one suit.
    StraightFlush,
    /// Ten through Ace in one suit.
    RoyalFlush,
    /// Five cards of one rank, only reachable with wildcards.
    FiveOfAKind,
}

impl Category {
    /// Every category, strongest first. This is the order in which a hand is
    /// tested against them.
    pub const BY_PRIORITY: [Self; 11] = [
        Self::FiveOfAKind,
        Self::RoyalFlush,
        Self::StraightFlush,
        Self::FourOfAKind,
        Self::FullHouse,
        Self::Flush,
        Self::Straight,
        Self::ThreeOfAKind,
        Self::TwoPair,
        Self::OnePair,
        Self::HighCard,
    ];

    /// Width of the score band of one category.
    pub const SCORE_BAND: u32 = 1000;

    /// Returns the display label of the category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighCard => "High Card",
            Self::OnePair => "One Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
            Self::FiveOfAKind => "Five of a Kind",
        }
    }

    /// Returns the score of the category: `0` for a high card, up to `10000`
    /// for five of a kind, in steps of [`Self::SCORE_BAND`].
    #[must_use]
    pub const fn score(self) -> u32 {
        self as u32 * Self::SCORE_BAND
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
