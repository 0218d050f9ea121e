// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five hands game, deals hands from a deck and ranks them.
use anyhow::{Context, Result, bail};
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

use fivehand_eval::{Card, Deck, Hand, HandRank, rank_hands};

/// Cards per line when printing a shuffled deck.
const SHUFFLED_PER_LINE: usize = 13;

/// Where the game deck comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckSource {
    /// A shuffled deck, a seed makes the shuffle reproducible.
    Random {
        /// The shuffle seed.
        seed: Option<u64>,
    },
    /// A deck loaded from a file of comma separated cards.
    File(PathBuf),
}

/// The game configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The deck source.
    pub source: DeckSource,
    /// The number of hands to deal.
    pub hands: usize,
    /// Print the winning order as JSON.
    pub json: bool,
}

/// A game that deals five cards hands and ranks them.
#[derive(Debug)]
pub struct Game {
    deck: Deck,
    hands: Vec<Hand>,
    source: DeckSource,
}

impl Game {
    /// Creates a game loading the deck from the configured source.
    pub fn new(config: &Config) -> Result<Self> {
        let deck = load_deck(&config.source)?;
        Ok(Self::with_deck(deck, config.source.clone(), config.hands))
    }

    /// Creates a game with the given deck.
    pub fn with_deck(deck: Deck, source: DeckSource, hands: usize) -> Self {
        Self {
            deck,
            hands: vec![Hand::new(); hands],
            source,
        }
    }

    /// The game hands.
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// The cards left in the deck.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Deals five cards to each hand.
    ///
    /// A shuffled deck deals one card to each hand in turn, a file deck
    /// deals five consecutive cards to each hand.
    pub fn deal(&mut self) -> Result<()> {
        let num_hands = self.hands.len();
        let needed = num_hands * Hand::SIZE;
        if self.deck.count() < needed {
            bail!(
                "Deck has {} cards, {needed} cards needed to deal {num_hands} hands",
                self.deck.count()
            );
        }

        info!("Dealing {num_hands} hands");

        for idx in 0..needed {
            let card = self.deck.deal().context("Deck is empty")?;
            let hand_idx = match self.source {
                DeckSource::Random { .. } => idx % num_hands,
                DeckSource::File(_) => idx / Hand::SIZE,
            };

            self.hands[hand_idx].add_card(card)?;
        }

        for (idx, hand) in self.hands.iter().enumerate() {
            debug!("Hand {idx}: {hand}");
        }

        Ok(())
    }

    /// Classifies the hands and sorts them from the strongest.
    pub fn rank(&mut self) -> Result<()> {
        rank_hands(&mut self.hands)?;
        Ok(())
    }

    /// Plays the game printing the deck, the hands and the winning order.
    pub fn play<W: Write>(mut self, out: &mut W) -> Result<()> {
        writeln!(out, "\n*** P O K E R   H A N D   A N A L Y Z E R ***\n")?;

        let is_random = matches!(self.source, DeckSource::Random { .. });
        match &self.source {
            DeckSource::Random { .. } => {
                writeln!(out, "\n*** USING RANDOMIZED DECK OF CARDS ***\n")?;
                writeln!(out, "*** Shuffled {} card deck", self.deck.count())?;
                writeln!(out, "{}", self.deck.display(SHUFFLED_PER_LINE))?;
            }
            DeckSource::File(path) => {
                writeln!(out, "\n*** USING TEST DECK ***\n")?;
                writeln!(out, "*** File: {}", path.display())?;
                writeln!(out, "{}", self.deck.display(Hand::SIZE))?;
            }
        }

        self.deal()?;

        writeln!(out, "\n*** Here are the {} hands...", self.hands.len())?;
        self.write_hands(out)?;

        if is_random {
            writeln!(out, "\n*** Here is what remains in the deck...")?;
            writeln!(out, "{}", self.deck.display(SHUFFLED_PER_LINE))?;
        }

        self.rank()?;

        writeln!(out, "\n--- WINNING HAND ORDER ---")?;
        self.write_hands(out)?;
        writeln!(out)?;

        Ok(())
    }

    /// Plays the game printing only the winning order as JSON.
    pub fn play_json<W: Write>(mut self, out: &mut W) -> Result<()> {
        self.deal()?;
        self.rank()?;

        let report = self
            .hands
            .iter()
            .enumerate()
            .filter_map(|(idx, hand)| {
                hand.rank().map(|rank| RankedHand {
                    position: idx + 1,
                    cards: hand.cards(),
                    rank,
                    name: rank.to_string(),
                })
            })
            .collect::<Vec<_>>();

        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;

        Ok(())
    }

    fn write_hands<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for hand in &self.hands {
            writeln!(out, "{hand}")?;
        }

        Ok(())
    }
}

/// A hand in the winning order.
#[derive(Debug, Serialize)]
struct RankedHand<'a> {
    position: usize,
    cards: &'a [Card],
    rank: HandRank,
    name: String,
}

/// Loads a deck from the given source.
fn load_deck(source: &DeckSource) -> Result<Deck> {
    match source {
        DeckSource::Random { seed: Some(seed) } => {
            info!("Shuffling deck with seed {seed}");
            Ok(Deck::new_and_shuffled(&mut StdRng::seed_from_u64(*seed)))
        }
        DeckSource::Random { seed: None } => Ok(Deck::new_and_shuffled(&mut rand::rng())),
        DeckSource::File(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to open file: {}", path.display()))?;
            let deck = Deck::parse(&text)
                .with_context(|| format!("Invalid deck in file {}", path.display()))?;
            info!("Loaded {} cards from {}", deck.count(), path.display());
            Ok(deck)
        }
    }
}

/// Runs a game with the given configuration writing to stdout.
pub fn run(config: &Config) -> Result<()> {
    let game = Game::new(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.json {
        game.play_json(&mut out)
    } else {
        game.play(&mut out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fivehand_eval::{CardError, Rank, Suit};

    const TEST_DECK: &str = "\
10H, JH, QH, KH, AH
 2D, 2C, 2H, 5S, 5D
 4D, 4C, 9H, 9S, KD
 AS, 2S, 3C, 4H, 5C
 4S, 7C, 9D, 9C, 3S
 3D, 6C, 8H, 10S, QD
";

    fn file_game(hands: usize) -> Game {
        let deck = Deck::parse(TEST_DECK).unwrap();
        Game::with_deck(deck, DeckSource::File("test.txt".into()), hands)
    }

    fn output(game: Game) -> String {
        let mut out = Vec::new();
        game.play(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn file_deck_deals_consecutive_cards() {
        let mut game = file_game(6);
        game.deal().unwrap();

        let first = game.hands()[0].cards();
        assert_eq!(first[0], Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!(first[4], Card::new(Rank::Ace, Suit::Hearts));

        let last = game.hands()[5].cards();
        assert_eq!(last[0], Card::new(Rank::Trey, Suit::Diamonds));
        assert!(game.deck().is_empty());
    }

    #[test]
    fn random_deck_deals_round_robin() {
        let source = DeckSource::Random { seed: None };
        let mut game = Game::with_deck(Deck::default(), source, 6);
        game.deal().unwrap();

        // The default deck starts with the diamonds in rank order.
        let first = game.hands()[0].cards();
        assert_eq!(first[0], Card::new(Rank::Deuce, Suit::Diamonds));
        assert_eq!(first[1], Card::new(Rank::Eight, Suit::Diamonds));

        let second = game.hands()[1].cards();
        assert_eq!(second[0], Card::new(Rank::Trey, Suit::Diamonds));
        assert_eq!(game.deck().count(), Deck::SIZE - 30);
    }

    #[test]
    fn not_enough_cards() {
        let mut game = file_game(7);
        let err = game.deal().unwrap_err();
        assert!(err.to_string().contains("30 cards, 35 cards needed"));
    }

    #[test]
    fn winning_order() {
        let mut game = file_game(6);
        game.deal().unwrap();
        game.rank().unwrap();

        let ranks = game
            .hands()
            .iter()
            .map(|h| h.rank().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(
            ranks,
            vec![
                HandRank::RoyalStraightFlush,
                HandRank::FullHouse,
                HandRank::Straight,
                HandRank::TwoPair,
                HandRank::Pair,
                HandRank::HighCard,
            ]
        );
    }

    #[test]
    fn play_file_game() {
        let text = output(file_game(6));

        assert!(text.contains("*** USING TEST DECK ***"));
        assert!(text.contains("*** File: test.txt"));
        assert!(!text.contains("what remains in the deck"));

        let (_, order) = text.split_once("--- WINNING HAND ORDER ---").unwrap();
        let lines = order.lines().filter(|l| !l.is_empty()).collect::<Vec<_>>();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "10H  JH  QH  KH  AH - Royal Straight Flush");
        assert_eq!(lines[2], " AS  2S  3C  4H  5C - Straight");
        assert!(lines[5].ends_with("- High Card"));
    }

    #[test]
    fn seeded_games_are_reproducible() {
        let source = DeckSource::Random { seed: Some(11) };
        let config = Config {
            source,
            hands: 6,
            json: false,
        };

        let t1 = output(Game::new(&config).unwrap());
        let t2 = output(Game::new(&config).unwrap());
        assert_eq!(t1, t2);
        assert!(t1.contains("*** Shuffled 52 card deck"));
        assert!(t1.contains("*** Here is what remains in the deck..."));
    }

    #[test]
    fn play_json_game() {
        let mut out = Vec::new();
        file_game(6).play_json(&mut out).unwrap();

        let json = serde_json::from_slice::<serde_json::Value>(&out).unwrap();
        let hands = json.as_array().unwrap();
        assert_eq!(hands.len(), 6);
        assert_eq!(hands[0]["position"], 1);
        assert_eq!(hands[0]["name"], "Royal Straight Flush");
        assert_eq!(hands[5]["rank"], "HighCard");
        assert_eq!(hands[0]["cards"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn missing_deck_file() {
        let path = std::env::temp_dir().join("fivehand-missing-deck.txt");
        let source = DeckSource::File(path);
        let err = load_deck(&source).unwrap_err();
        assert!(err.to_string().starts_with("Failed to open file"));
    }

    #[test]
    fn duplicate_card_in_deck_file() {
        let path = std::env::temp_dir().join(format!("fivehand-dup-{}.txt", std::process::id()));
        fs::write(&path, "10D, JH, AS\n10D, 2C").unwrap();

        let err = load_deck(&DeckSource::File(path.clone())).unwrap_err();
        let _ = fs::remove_file(&path);

        assert_eq!(
            err.downcast_ref::<CardError>(),
            Some(&CardError::DuplicateCard(Card::new(Rank::Ten, Suit::Diamonds)))
        );
    }
}
