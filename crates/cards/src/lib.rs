// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivehand Poker cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use fivehand_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert_eq!(ah.compare(&kd), 1);
//! assert_eq!("AH".parse::<Card>().unwrap(), ah);
//! ```
//!
//! and a [Deck] type for shuffling, parsing, dealing and iterating cards in
//! the deck. Shuffling takes the random generator as a parameter so that a
//! seeded generator gives the same deck every time:
//!
//! ```
//! # use fivehand_cards::Deck;
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut deck = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
//! let card = deck.deal();
//! assert!(card.is_some());
//! assert_eq!(deck.count(), Deck::SIZE - 1);
//! ```
//!
//! A deck can also be parsed from comma separated cards:
//!
//! ```
//! # use fivehand_cards::{CardError, Deck};
//! let deck = Deck::parse("10D, JH, AS").unwrap();
//! assert_eq!(deck.count(), 3);
//!
//! let err = Deck::parse("10D, JH, 10D").unwrap_err();
//! assert!(matches!(err, CardError::DuplicateCard(_)));
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use thiserror::Error;

mod card;
pub use card::{Card, Rank, Suit};

mod deck;
pub use deck::{Deck, DeckDisplay};

/// Errors for malformed cards and decks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// A card token or rank that doesn't describe a valid card.
    #[error("Malformed card {0:?}")]
    MalformedCard(String),
    /// A card that appears more than once in a deck.
    #[error("Duplicated card {0} found in deck")]
    DuplicateCard(Card),
}
