// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::CardError;

/// A Poker card.
///
/// A card is an immutable rank and suit pair, cards are copied by value and
/// compare by rank only with [Card::compare], the suit is never part of the
/// rank comparison.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self { rank, suit }
    }

    /// Returns the card rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Compares this card rank with another card rank.
    ///
    /// Returns the rank difference, zero if the two cards have the same rank.
    #[inline]
    pub fn compare(&self, other: &Card) -> i32 {
        i32::from(self.rank.value()) - i32::from(other.rank.value())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pad the whole card so that alignment works for 10s.
        f.pad(&format!("{}{}", self.rank, self.suit))
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses a card from its text form, for example `10D`, `JH` or `AS`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let malformed = || CardError::MalformedCard(token.to_string());

        let mut chars = token.chars();
        let suit = match chars.next_back().ok_or_else(malformed)? {
            'D' => Suit::Diamonds,
            'C' => Suit::Clubs,
            'H' => Suit::Hearts,
            'S' => Suit::Spades,
            _ => return Err(malformed()),
        };

        let rank = match chars.as_str() {
            "2" => Rank::Deuce,
            "3" => Rank::Trey,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return Err(malformed()),
        };

        Ok(Card::new(rank, suit))
    }
}

/// Card rank, the discriminant is the rank numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank numeric value, from 2 for a deuce to 14 for an ace.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::ranks()
            .find(|r| r.value() == value)
            .ok_or_else(|| CardError::MalformedCard(format!("rank {value}")))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            Rank::Ace => write!(f, "A"),
            _ => write!(f, "{}", self.value()),
        }
    }
}

/// Card suit.
///
/// Suits have no value in Poker, the discriminant order is only used as a
/// stable last resort when comparing two otherwise equal hands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    /// Diamonds suit.
    Diamonds = 0,
    /// Clubs suit.
    Clubs = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Spades suit.
    Spades = 3,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit position in the tie-break order.
    #[inline]
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_compare_ignores_suit() {
        let kd = Card::new(Rank::King, Suit::Diamonds);
        let ks = Card::new(Rank::King, Suit::Spades);
        let fc = Card::new(Rank::Five, Suit::Clubs);

        assert_eq!(kd.compare(&ks), 0);
        assert_eq!(kd.compare(&fc), 8);
        assert_eq!(fc.compare(&kd), -8);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "JC");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "10H");
        assert_eq!(format!("{c:>3}"), "10H");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(format!("{c:>3}"), " AH");
    }

    #[test]
    fn card_from_str() {
        assert_eq!(
            " 10D".parse::<Card>().unwrap(),
            Card::new(Rank::Ten, Suit::Diamonds)
        );
        assert_eq!(
            "JH".parse::<Card>().unwrap(),
            Card::new(Rank::Jack, Suit::Hearts)
        );
        assert_eq!(
            "2C\n".parse::<Card>().unwrap(),
            Card::new(Rank::Deuce, Suit::Clubs)
        );

        for bad in [
            "", "D", "1D", "11H", "AX", "ZS", "AS7", "+5D", "05D", "010H", "+10S",
        ] {
            assert!(
                matches!(bad.parse::<Card>(), Err(CardError::MalformedCard(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn card_text_form_round_trips() {
        for suit in Suit::suits() {
            for rank in Rank::ranks() {
                let card = Card::new(rank, suit);
                assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
            }
        }
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Deuce.value(), 2);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::try_from(11).unwrap(), Rank::Jack);
        assert!(Rank::try_from(1).is_err());
        assert!(Rank::try_from(15).is_err());
    }
}
