// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use showdown_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah > kd);
//! ```
//!
//! and a [Deck] type for shuffling and dealing cards:
//!
//! ```
//! # use showdown_cards::{Card, Deck, Rank, Suit};
//! let mut rng = rand::rng();
//! let mut deck = Deck::new_and_shuffled(&mut rng);
//! let hole = [deck.deal(), deck.deal()];
//! assert_eq!(deck.count(), Deck::SIZE - hole.len());
//! ```
//!
//! Cards are plain immutable `(Rank, Suit)` values ordered by rank first
//! and suit second, so sorting a hand lines it up by strength with a
//! stable order between equal ranks of different suits.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Rank, Suit};
