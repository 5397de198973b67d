// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Tallies every one of the C(52,5) = 2,598,960 five cards hands by
// category, a sanity check against the classical hand frequencies
// (40 straight flushes, 624 four of a kind, .., 1,302,540 high cards):
//
// ```bash
// $ cargo r --release --example eval_all5
// ```

use std::time::Instant;

use showdown_eval::{Deck, HandRank, HandValue};

fn main() {
    let cards = Deck::default().into_iter().collect::<Vec<_>>();
    let started = Instant::now();

    // One counter per category, indexed by the category ordinal.
    let mut tally = [0u64; 9];

    let n = cards.len();
    for a in 0..n {
        for b in a + 1..n {
            for c in b + 1..n {
                for d in c + 1..n {
                    for e in d + 1..n {
                        let hand = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let value = HandValue::eval(&hand).expect("unique deck cards");
                        tally[value.rank() as usize] += 1;
                    }
                }
            }
        }
    }

    let categories = [
        HandRank::HighCard,
        HandRank::OnePair,
        HandRank::TwoPair,
        HandRank::ThreeOfAKind,
        HandRank::Straight,
        HandRank::Flush,
        HandRank::FullHouse,
        HandRank::FourOfAKind,
        HandRank::StraightFlush,
    ];

    let total = tally.iter().sum::<u64>();
    for rank in categories {
        let count = tally[rank as usize];
        let pct = count as f64 * 100.0 / total as f64;
        println!("{:<16} {count:>9}  {pct:>7.4}%", rank.to_string());
    }

    println!("\n{total} hands in {:.3}s", started.elapsed().as_secs_f64());
}
