// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A deck of cards.
use ahash::AHashSet;
use log::debug;
use rand::prelude::*;
use std::fmt;

use crate::{Card, CardError, Rank, Suit};

/// A cards Deck, cards are dealt from the top.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck using the given random generator.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Parses a deck from comma separated cards, for example `10D, JH, AS`.
    ///
    /// Cards can span multiple lines and empty tokens are skipped. Returns
    /// [CardError::DuplicateCard] for the first card that appears twice.
    pub fn parse(text: &str) -> Result<Self, CardError> {
        let mut seen = AHashSet::with_capacity(Self::SIZE);
        let mut cards = Vec::with_capacity(Self::SIZE);

        let tokens = text
            .split([',', '\n'])
            .map(str::trim)
            .filter(|t| !t.is_empty());

        for token in tokens {
            let card = token.parse::<Card>()?;
            if !seen.insert(card) {
                return Err(CardError::DuplicateCard(card));
            }

            cards.push(card);
        }

        debug!("Parsed deck with {} cards", cards.len());

        Ok(Self { cards })
    }

    /// Deals the top card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Iterates the cards from the top of the deck.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns a displayable deck with `per_line` cards on each line.
    pub fn display(&self, per_line: usize) -> DeckDisplay<'_> {
        DeckDisplay {
            cards: &self.cards,
            per_line: per_line.max(1),
        }
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Panics if k is not 2 <= k <= 5.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=5).contains(&k), "2 <= k <= 5");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut idx = (0..k).collect::<Vec<_>>();
        let mut hand = idx.iter().map(|&i| self.cards[i]).collect::<Vec<_>>();

        loop {
            f(&hand);

            // Find the rightmost index that can still move forward.
            let Some(i) = (0..k).rev().find(|&i| idx[i] < n - k + i) else {
                return;
            };

            idx[i] += 1;
            hand[i] = self.cards[idx[i]];
            for j in (i + 1)..k {
                idx[j] = idx[j - 1] + 1;
                hand[j] = self.cards[idx[j]];
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(13))
    }
}

/// Formats a deck with a fixed number of cards per line.
pub struct DeckDisplay<'a> {
    cards: &'a [Card],
    per_line: usize,
}

impl fmt::Display for DeckDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (line_idx, line) in self.cards.chunks(self.per_line).enumerate() {
            if line_idx > 0 {
                writeln!(f)?;
            }

            for (idx, card) in line.iter().enumerate() {
                if idx > 0 {
                    write!(f, ",")?;
                }

                write!(f, "{card:>3}")?;
            }
        }

        Ok(())
    }
}
