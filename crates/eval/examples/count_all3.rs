// Copyright (C) 2025 Rhode Hold'em developers
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example count_all3
// Total hands      22100
// Elapsed:         0.002s
//
// Straight Flush:  48
// Three of a Kind: 52
// Straight:        720
// Flush:           1096
// Pair:            3744
// High Card:       16440
// ```

use std::time::Instant;

use rhode_eval::*;

fn main() {
    // Evaluate all 22,100 showdown hands.
    let now = Instant::now();
    let mut counts = [0usize; 6];

    Deck::default().for_each(3, |hand| {
        let rank = HandValue::eval(hand).rank();
        counts[rank.category() as usize - 1] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s\n", elapsed);

    for rank in HandRank::ranks() {
        let label = format!("{rank}:");
        println!("{label:<17}{}", counts[rank.category() as usize - 1]);
    }
}
