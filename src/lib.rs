//! Five-card poker hand classification with wild jokers, with optional
//! `no_std` support.
//!
//! The crate provides a [`Hand`] type that classifies five cards into one of
//! eleven [`Category`] values, from high card to five of a kind, treating
//! jokers as wildcards. A seeded [`Deck`] deals hands from a 52-card set plus
//! jokers and refills itself when it runs low.
//!
//! # Example
//!
//! ```
//! use jokerpoker::{Deck, DeckOptions, Hand};
//!
//! let deck = Deck::new(DeckOptions::default(), 42);
//! let hand = Hand::deal(&deck).unwrap();
//! assert_eq!(hand.score() % 1000, 0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod category;
pub mod deck;
pub mod error;
pub mod hand;
pub mod histogram;
pub mod options;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DEFAULT_JOKERS, Rank, STANDARD_SET_SIZE, Suit, card_set};
pub use category::Category;
pub use deck::Deck;
pub use error::{DrawError, ExchangeError, HandError};
pub use hand::{HAND_SIZE, Hand, RankHistogram, SuitHistogram, classify};
pub use histogram::{Histogram, Ordinary};
pub use options::DeckOptions;
pub use result::Outcome;
