// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand classification and comparison.
//!
//! A [Hand] is classified by looking at its cards sorted by rank, categories
//! are tested from the strongest to the weakest and the first match wins.
//! Two hands in the same category are compared using a tie-breaker card that
//! depends on the category, pairs and two pairs use up to three tie-breaker
//! cards before falling back to the suit of the last tie-breaker.
use log::trace;
use std::{cmp::Ordering, fmt};

use crate::{Card, EvalError, HandRank};

/// A five cards Poker hand.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in deal order.
    cards: Vec<Card>,
    /// Cards sorted by rank, set by classify.
    sorted: Vec<Card>,
    /// The hand category, set by classify.
    rank: Option<HandRank>,
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates an empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a classified hand from five cards.
    pub fn from_cards(cards: &[Card]) -> Result<Self, EvalError> {
        if cards.len() != Self::SIZE {
            return Err(EvalError::InvalidHandSize(cards.len()));
        }

        let mut hand = Self::new();
        for card in cards {
            hand.add_card(*card)?;
        }

        hand.classify()?;
        Ok(hand)
    }

    /// Adds a card to the hand.
    ///
    /// Returns an error if the hand has already five cards, adding a card
    /// resets the hand classification.
    pub fn add_card(&mut self, card: Card) -> Result<(), EvalError> {
        if self.cards.len() >= Self::SIZE {
            return Err(EvalError::InvalidHandSize(self.cards.len() + 1));
        }

        self.cards.push(card);
        self.sorted.clear();
        self.rank = None;

        Ok(())
    }

    /// The hand cards in deal order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The hand cards sorted by ascending rank, empty until classified.
    pub fn sorted(&self) -> &[Card] {
        &self.sorted
    }

    /// The hand category if the hand has been classified.
    pub fn rank(&self) -> Option<HandRank> {
        self.rank
    }

    /// Number of cards in the hand.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Checks if the hand has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Classifies this hand and returns its category.
    ///
    /// The classification is cached so calling this method again without
    /// adding cards returns the same category.
    pub fn classify(&mut self) -> Result<HandRank, EvalError> {
        if let Some(rank) = self.rank {
            return Ok(rank);
        }

        if self.cards.len() != Self::SIZE {
            return Err(EvalError::InvalidHandSize(self.cards.len()));
        }

        // Stable sort, cards with the same rank keep their deal order.
        let mut sorted = self.cards.clone();
        sorted.sort_by_key(|c| c.rank());

        let rank = category(&sorted);
        self.sorted = sorted;
        self.rank = Some(rank);

        trace!("Classified {self}");

        Ok(rank)
    }

    /// Compares this hand with another hand classifying both hands.
    ///
    /// Returns a negative value if this hand is weaker than the other hand,
    /// zero if the hands are equal, and a positive value if this hand is
    /// stronger.
    pub fn compare(&mut self, other: &mut Hand) -> Result<i32, EvalError> {
        let rank = self.classify()?;
        let other_rank = other.classify()?;
        Ok(self.resolve(rank, other, other_rank))
    }

    /// Compares two hands that have already been classified.
    ///
    /// Returns `None` if any of the two hands has not been classified.
    pub fn compare_classified(&self, other: &Hand) -> Option<i32> {
        Some(self.resolve(self.rank?, other, other.rank?))
    }

    /// Returns the tie-breaker card for the given pass.
    ///
    /// Only pairs and two pairs use more than one pass, other categories
    /// always return the same card. Returns `None` if not classified.
    pub fn tie_breaker(&self, pass: usize) -> Option<Card> {
        self.rank.map(|rank| self.breaker(rank, pass))
    }

    /// Returns the highest card whose rank appears only once in the hand.
    ///
    /// Returns `None` if the hand has not been classified or all ranks are
    /// paired.
    pub fn kicker(&self) -> Option<Card> {
        self.sorted
            .iter()
            .filter(|c| self.sorted.iter().filter(|o| o.rank() == c.rank()).count() == 1)
            .max_by_key(|c| c.rank())
            .copied()
    }

    fn resolve(&self, rank: HandRank, other: &Hand, other_rank: HandRank) -> i32 {
        let diff = i32::from(rank.value()) - i32::from(other_rank.value());
        if diff != 0 {
            return diff;
        }

        let passes = rank.tie_break_passes();
        let mut pass = 0;

        loop {
            let mine = self.breaker(rank, pass);
            let theirs = other.breaker(rank, pass);

            let diff = mine.compare(&theirs);
            if diff != 0 {
                return diff;
            }

            pass += 1;
            if pass == passes {
                return i32::from(mine.suit().value()) - i32::from(theirs.suit().value());
            }
        }
    }

    fn breaker(&self, rank: HandRank, pass: usize) -> Card {
        let s = &self.sorted;
        let highest = s[Self::SIZE - 1];

        match rank {
            HandRank::RoyalStraightFlush | HandRank::Flush | HandRank::HighCard => highest,
            HandRank::StraightFlush | HandRank::Straight => {
                // The ace plays low in a wheel so the five is the top card.
                if is_wheel(&rank_list(s)) { s[3] } else { highest }
            }
            HandRank::FourOfAKind | HandRank::FullHouse | HandRank::ThreeOfAKind => s[2],
            HandRank::TwoPair => match pass {
                0 => self
                    .paired_cards()
                    .reduce(|max, c| if c.compare(&max) > 0 { c } else { max })
                    .unwrap_or(highest),
                1 => self
                    .paired_cards()
                    .reduce(|min, c| if c.compare(&min) < 0 { c } else { min })
                    .unwrap_or(highest),
                _ => self.kicker().unwrap_or(highest),
            },
            HandRank::Pair => match pass {
                0 => self.paired_cards().next().unwrap_or(highest),
                1 => self.kicker().unwrap_or(highest),
                _ => highest,
            },
        }
    }

    /// The second card of each adjacent pair of equal ranks.
    fn paired_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.sorted
            .windows(2)
            .filter(|w| w[0].rank() == w[1].rank())
            .map(|w| w[1])
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }

            write!(f, "{card:>3}")?;
        }

        if let Some(rank) = self.rank {
            write!(f, " - {rank}")?;
        }

        Ok(())
    }
}

/// Classifies and sorts hands from the strongest to the weakest.
///
/// The sort is stable, equal hands keep their relative order.
pub fn rank_hands(hands: &mut [Hand]) -> Result<(), EvalError> {
    for hand in hands.iter_mut() {
        hand.classify()?;
    }

    hands.sort_by(|a, b| match b.compare_classified(a) {
        Some(diff) => diff.cmp(&0),
        None => Ordering::Equal,
    });

    Ok(())
}

/// Computes the category of a hand sorted by rank.
fn category(sorted: &[Card]) -> HandRank {
    let r = rank_list(sorted);
    let flush = sorted.iter().all(|c| c.suit() == sorted[0].suit());
    let straight = is_straight(r);

    if straight && flush && r[0] == 10 && r[4] == 14 {
        HandRank::RoyalStraightFlush
    } else if straight && flush {
        HandRank::StraightFlush
    } else if r[0] == r[3] || r[1] == r[4] {
        HandRank::FourOfAKind
    } else if (r[0] == r[1] && r[2] == r[4]) || (r[0] == r[2] && r[3] == r[4]) {
        HandRank::FullHouse
    } else if flush {
        HandRank::Flush
    } else if straight {
        HandRank::Straight
    } else if r[0] == r[2] || r[1] == r[3] || r[2] == r[4] {
        HandRank::ThreeOfAKind
    } else if (r[0] == r[1] && r[2] == r[3])
        || (r[0] == r[1] && r[3] == r[4])
        || (r[1] == r[2] && r[3] == r[4])
    {
        HandRank::TwoPair
    } else if r.windows(2).any(|w| w[0] == w[1]) {
        HandRank::Pair
    } else {
        HandRank::HighCard
    }
}

/// The numeric ranks of five cards sorted by rank.
fn rank_list(sorted: &[Card]) -> [u8; Hand::SIZE] {
    std::array::from_fn(|i| sorted[i].rank().value())
}

/// Checks for the A-2-3-4-5 straight candidate.
fn is_wheel(r: &[u8; Hand::SIZE]) -> bool {
    r[0] == 2 && r[4] == 14
}

fn is_straight(mut r: [u8; Hand::SIZE]) -> bool {
    if is_wheel(&r) {
        // Ace counts as one.
        r = [1, r[0], r[1], r[2], r[3]];
    }

    r.windows(2).all(|w| w[1] == w[0] + 1)
}
