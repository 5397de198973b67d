// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classification and hand values.
use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use showdown_cards::{Card, Rank};

use super::combine::Combinations;

/// The number of cards in an evaluated hand.
const HAND_SIZE: usize = 5;

/// An invalid hand passed to the evaluator.
///
/// The evaluator has no recoverable states, either the hand is well formed
/// and a value is returned or the call fails with one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The hand has fewer cards than a full 5 cards hand.
    #[error("hand has {0} cards, at least 5 are required")]
    NotEnoughCards(usize),
    /// The same card appears more than once in the hand.
    #[error("duplicate card {0} in hand")]
    DuplicateCard(Card),
}

/// The hand categories in poker strength order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum HandRank {
    /// No matching cards.
    HighCard = 0,
    /// Two cards of one rank.
    OnePair,
    /// Two cards of one rank and two of another.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Three cards of one rank and two of another.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// Five cards in sequence of one suit.
    StraightFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pairs",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{rank}")
    }
}

/// The value of a hand.
///
/// Values order by category first and tiebreaker second, the derived
/// ordering matches poker's rank by rank tiebreak rule because the
/// tiebreaker packs the deciding ranks most significant first. Hands of
/// equal strength compare equal whatever their suits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct HandValue {
    rank: HandRank,
    tiebreak: u32,
}

impl HandValue {
    /// Evaluates the value of the best 5 cards hand out of the given cards.
    ///
    /// Fails if the hand has fewer than 5 cards or contains duplicates.
    pub fn eval(cards: &[Card]) -> Result<Self, EvalError> {
        validate(cards)?;

        let mut best: Option<HandValue> = None;
        for combo in Combinations::new(cards.len(), HAND_SIZE) {
            let value = rank_hand(&pick(cards, &combo));
            if best.is_none_or(|b| value > b) {
                best = Some(value);
            }
        }

        // A validated hand has at least one combination.
        Ok(best.expect("empty combinations for a valid hand"))
    }

    /// Evaluates the given cards and returns the best 5 cards with their
    /// value.
    ///
    /// Combinations are scored in lexicographic order and ties keep the
    /// first hand found, so the returned cards are deterministic. Fails if
    /// the hand has fewer than 5 cards or contains duplicates.
    pub fn eval_with_best_hand(cards: &[Card]) -> Result<(Self, [Card; HAND_SIZE]), EvalError> {
        validate(cards)?;

        let mut best: Option<(HandValue, [Card; HAND_SIZE])> = None;
        for combo in Combinations::new(cards.len(), HAND_SIZE) {
            let hand = pick(cards, &combo);
            let value = rank_hand(&hand);
            if best.is_none_or(|(b, _)| value > b) {
                best = Some((value, hand));
            }
        }

        // A validated hand has at least one combination.
        Ok(best.expect("empty combinations for a valid hand"))
    }

    /// This value hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The packed ranks that break ties within the same category.
    pub fn tiebreak(&self) -> u32 {
        self.tiebreak
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)
    }
}

/// Checks the hand is big enough and has no duplicate cards.
fn validate(cards: &[Card]) -> Result<(), EvalError> {
    if cards.len() < HAND_SIZE {
        return Err(EvalError::NotEnoughCards(cards.len()));
    }

    let mut seen = AHashSet::with_capacity(cards.len());
    for card in cards {
        if !seen.insert(card) {
            return Err(EvalError::DuplicateCard(*card));
        }
    }

    Ok(())
}

/// Copies the cards at the combination indices into a hand.
fn pick(cards: &[Card], combo: &[usize]) -> [Card; HAND_SIZE] {
    let mut hand = [cards[0]; HAND_SIZE];
    for (slot, &idx) in hand.iter_mut().zip(combo) {
        *slot = cards[idx];
    }
    hand
}

/// Classifies an exact 5 cards hand.
fn rank_hand(hand: &[Card; HAND_SIZE]) -> HandValue {
    let mut cards = *hand;
    cards.sort_unstable();

    let flush = cards.iter().all(|c| c.suit() == cards[0].suit());

    if let Some(high) = straight_high(&cards) {
        let rank = if flush {
            HandRank::StraightFlush
        } else {
            HandRank::Straight
        };
        return HandValue {
            rank,
            tiebreak: high,
        };
    }

    // Group the cards by rank with the biggest group first, groups of the
    // same size order by higher rank.
    let mut groups: Vec<(u32, u32)> = Vec::with_capacity(HAND_SIZE);
    for card in &cards {
        let rank = card.rank() as u32;
        match groups.iter_mut().find(|(_, r)| *r == rank) {
            Some((count, _)) => *count += 1,
            None => groups.push((1, rank)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    // Packing the group ranks in this order yields the category tiebreaker:
    // quads then kicker, trips then pair, pairs then kickers, and for high
    // cards and flushes all five ranks highest first.
    let ranks = groups.iter().map(|&(_, r)| r).collect::<Vec<_>>();
    let tiebreak = pack(&ranks);

    let pattern = (groups[0].0, groups.get(1).map_or(0, |g| g.0));
    let rank = if flush {
        HandRank::Flush
    } else {
        match pattern {
            (4, _) => HandRank::FourOfAKind,
            (3, 2) => HandRank::FullHouse,
            (3, _) => HandRank::ThreeOfAKind,
            (2, 2) => HandRank::TwoPair,
            (2, _) => HandRank::OnePair,
            _ => HandRank::HighCard,
        }
    };

    HandValue { rank, tiebreak }
}

/// Returns the high card rank of a straight, or None if the sorted cards
/// are not five consecutive ranks.
///
/// The wheel A-2-3-4-5 is the one hand where the ace plays low, it scores
/// with a five high card so it ranks below the 6-7-8-9-T straight.
fn straight_high(cards: &[Card; HAND_SIZE]) -> Option<u32> {
    let ranks = cards.map(|c| c.rank() as u32);

    if ranks == [2, 3, 4, 5, Rank::Ace as u32] {
        return Some(5);
    }

    ranks
        .windows(2)
        .all(|w| w[1] == w[0] + 1)
        .then(|| ranks[HAND_SIZE - 1])
}

/// Packs rank components into one integer, 4 bits per component with the
/// most significant component first.
///
/// Ranks go up to 14 and fit in 4 bits, and a hand packs at most 5
/// components for 20 bits, so the packed value always fits a u32.
fn pack(ranks: &[u32]) -> u32 {
    ranks.iter().fold(0, |acc, r| (acc << 4) | r)
}
