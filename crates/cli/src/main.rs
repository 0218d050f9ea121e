// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Fivehand Poker hand analyzer.
//!
//! Deals five cards hands from a shuffled deck or from a deck file and prints
//! the hands from the strongest to the weakest.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use clap::Parser;
use log::error;
use std::{path::PathBuf, process::ExitCode};

use game::{Config, DeckSource};

pub mod game;

#[derive(Debug, Parser)]
struct Cli {
    /// Deck file with comma separated cards (e.g. 10D, JH, AS), a shuffled
    /// deck is used if missing.
    file: Option<PathBuf>,
    /// Seed for the deck shuffle.
    #[clap(long, short, conflicts_with = "file")]
    seed: Option<u64>,
    /// Number of hands to deal.
    #[clap(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(2..=10))]
    hands: u8,
    /// Print the winning hand order as JSON.
    #[clap(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let source = match cli.file {
        Some(path) => DeckSource::File(path),
        None => DeckSource::Random { seed: cli.seed },
    };

    let config = Config {
        source,
        hands: cli.hands as usize,
        json: cli.json,
    };

    if let Err(e) = game::run(&config) {
        error!("{e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
