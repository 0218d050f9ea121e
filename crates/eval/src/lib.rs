// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivehand Poker hand evaluator.
//!
//! Classifies five cards Poker hands into one of ten categories, from high
//! card to royal straight flush, and compares hands of the same category
//! using the standard tie-break rules with the suit as a last resort.
//!
//! To use the evaluator create a [Hand], add five cards and compare it with
//! another hand:
//!
//! ```
//! # use fivehand_eval::*;
//! let mut flush = Hand::new();
//! for card in ["2H", "7H", "9H", "JH", "KH"] {
//!     flush.add_card(card.parse().unwrap()).unwrap();
//! }
//!
//! let cards = ["AS", "2D", "3C", "4H", "5S"].map(|c| c.parse::<Card>().unwrap());
//! let mut wheel = Hand::from_cards(&cards).unwrap();
//! assert_eq!(wheel.rank(), Some(HandRank::Straight));
//!
//! assert!(flush.compare(&mut wheel).unwrap() > 0);
//! assert_eq!(flush.rank(), Some(HandRank::Flush));
//! ```
//!
//! and use [rank_hands] to sort many hands from the strongest to the weakest:
//!
//! ```
//! # use fivehand_eval::*;
//! let mut deck = Deck::default();
//! let mut hands = vec![Hand::new(), Hand::new()];
//! for _ in 0..Hand::SIZE {
//!     for hand in hands.iter_mut() {
//!         hand.add_card(deck.deal().unwrap()).unwrap();
//!     }
//! }
//!
//! rank_hands(&mut hands).unwrap();
//! assert!(hands[0].compare_classified(&hands[1]).unwrap() > 0);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub use error::EvalError;

mod hand;
pub use hand::{Hand, rank_hands};

mod rank;
pub use rank::HandRank;

// Reexport cards types.
pub use fivehand_cards::{Card, CardError, Deck, Rank, Suit};
