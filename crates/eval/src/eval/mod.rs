// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator classifies an exact 5 cards hand into one of the nine
//! standard poker categories with a packed integer tiebreaker, and picks
//! the best 5 cards subset of a larger hand by scoring every combination.
//!
//! It provides a [HandValue::eval] method that computes a hand value
//! without extracting the best hand, useful to rank players at showdown,
//! and a [HandValue::eval_with_best_hand] that also returns the five best
//! cards, useful for UIs to show a winning hand.

mod combine;

pub mod eval;
pub use eval::{EvalError, HandRank, HandValue};
