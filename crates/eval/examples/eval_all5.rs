// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all5
// ...
// Total hands:          2598960
// Elapsed:              0.412s
// Hands/sec:            6308155
//
// High Card:            1302540
// Pair:                 1098240
// Two Pair:             123552
// Three of a Kind:      54912
// Straight:             10200
// Flush:                5108
// Full House:           3744
// Four of a Kind:       624
// Straight Flush:       36
// Royal Straight Flush: 4
// ```

use std::time::Instant;

use fivehand_eval::{Deck, Hand, HandRank};

fn main() {
    // Classify all 2.6M hands.
    let now = Instant::now();
    let mut counts = [0usize; 11];

    Deck::default().for_each(Hand::SIZE, |cards| {
        if let Ok(hand) = Hand::from_cards(cards)
            && let Some(rank) = hand.rank()
        {
            counts[rank.value() as usize] += 1;
        }
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands:          {total}");
    println!("Elapsed:              {:.3}s", elapsed);
    println!("Hands/sec:            {:.0}\n", total as f64 / elapsed);

    for rank in HandRank::ranks() {
        println!("{:<22}{}", format!("{rank}:"), counts[rank.value() as usize]);
    }
}
