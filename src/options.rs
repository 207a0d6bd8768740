//! Deck configuration options.

use crate::card::DEFAULT_JOKERS;

/// Configuration options for a [`Deck`](crate::Deck).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use jokerpoker::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_card_sets(2)
///     .with_jokers(1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Number of card sets shuffled into a fresh pool.
    pub card_sets: u8,
    /// Number of jokers in each card set.
    pub jokers: u8,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            card_sets: 1,
            jokers: DEFAULT_JOKERS,
        }
    }
}

impl DeckOptions {
    /// Sets the number of card sets in a fresh pool.
    ///
    /// # Example
    ///
    /// ```
    /// use jokerpoker::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_card_sets(3);
    /// assert_eq!(options.card_sets, 3);
    /// ```
    #[must_use]
    pub const fn with_card_sets(mut self, card_sets: u8) -> Self {
        self.card_sets = card_sets;
        self
    }

    /// Sets the number of jokers per card set.
    ///
    /// # Example
    ///
    /// ```
    /// use jokerpoker::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_jokers(0);
    /// assert_eq!(options.jokers, 0);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: u8) -> Self {
        self.jokers = jokers;
        self
    }
}
