// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Poker hand evaluator for hands of 5 or more cards. The evaluator
//! classifies every 5 cards combination of the given cards and keeps the
//! strongest one, so a 7 cards hand of 2 hole cards and 5 board cards
//! evaluates to the value of its best 5 cards subset.
//!
//! To use the evaluator create a hand and use [HandValue] to evaluate the
//! hand and get its value:
//!
//! ```
//! # use showdown_eval::*;
//! // 2S, 3S, .., JS
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandValue::eval(&cards[0..5]).unwrap();
//! let v2 = HandValue::eval(&cards[5..]).unwrap();
//! assert!(v2 > v1);
//! ```
//!
//! [HandValue] is totally ordered, comparing the hand category first and
//! the packed tiebreaker second, and two hands of equal strength compare
//! equal so callers can detect split pots:
//!
//! ```
//! # use showdown_eval::*;
//! # use std::cmp::Ordering;
//! let h1 = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::Queen, Suit::Spades),
//!     Card::new(Rank::Jack, Suit::Spades),
//!     Card::new(Rank::Nine, Suit::Spades),
//! ];
//! let h2 = h1.map(|c| Card::new(c.rank(), Suit::Diamonds));
//! let (v1, v2) = (HandValue::eval(&h1).unwrap(), HandValue::eval(&h2).unwrap());
//! assert_eq!(v1.cmp(&v2), Ordering::Equal);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{EvalError, HandRank, HandValue};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, Rank, Suit};
