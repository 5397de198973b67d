// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game state for a table of Showdown Poker.
use log::info;
use rand::rngs::StdRng;

use showdown_cards::{Card, Deck};
use showdown_eval::HandValue;

use crate::chips::Chips;

/// The number of hole cards dealt to each player.
const HOLE_CARDS: usize = 2;
/// The number of community cards on the board.
const BOARD_CARDS: usize = 5;

/// A player's evaluated best hand.
#[derive(Debug, Clone, Copy)]
pub struct BestHand {
    /// The hand value used to rank players.
    pub value: HandValue,
    /// The five cards making up the best hand.
    pub cards: [Card; 5],
}

/// A player at the table.
#[derive(Debug)]
pub struct Player {
    name: String,
    chips: Chips,
    hole: Vec<Card>,
    best: Option<BestHand>,
}

impl Player {
    fn new(name: String, chips: Chips) -> Self {
        Self {
            name,
            chips,
            hole: Vec::default(),
            best: None,
        }
    }

    /// The player name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player chips.
    pub fn chips(&self) -> Chips {
        self.chips
    }

    /// The player hole cards.
    pub fn hole(&self) -> &[Card] {
        &self.hole
    }

    /// The evaluated best hand.
    ///
    /// Panics if the player's hand has not been evaluated yet.
    pub fn best(&self) -> &BestHand {
        self.best.as_ref().expect("hand not evaluated")
    }
}

/// A game of Showdown Poker.
///
/// Each hand collects the antes into the pot, deals two hole cards to
/// every player and five community cards, then the best 5 cards hand out
/// of each player's seven wins the pot, split evenly between tied hands.
#[derive(Debug)]
pub struct Game {
    players: Vec<Player>,
    board: Vec<Card>,
    pot: Chips,
    ante: Chips,
    rng: StdRng,
}

impl Game {
    /// Creates a game with the given number of players.
    pub fn new(players: usize, chips: Chips, ante: Chips, rng: StdRng) -> Self {
        let players = (1..=players)
            .map(|seat| Player::new(format!("Player {seat}"), chips))
            .collect();

        Self {
            players,
            board: Vec::default(),
            pot: Chips::ZERO,
            ante,
            rng,
        }
    }

    /// Plays one hand and returns the indices of the winning players.
    pub fn play_hand(&mut self) -> Vec<usize> {
        self.collect_antes();
        self.deal();

        let winners = self.showdown();
        self.pay_winners(&winners);
        winners
    }

    /// The players at the table.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The community cards of the last hand.
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    /// Number of players that can still pay chips into the pot.
    pub fn players_with_chips(&self) -> usize {
        self.players
            .iter()
            .filter(|p| p.chips > Chips::ZERO)
            .count()
    }

    fn collect_antes(&mut self) {
        for player in &mut self.players {
            // A short stacked player antes whatever is left.
            let paid = self.ante.min(player.chips);
            player.chips -= paid;
            self.pot += paid;
        }

        info!("Antes collected, pot is {}", self.pot);
    }

    fn deal(&mut self) {
        let mut deck = Deck::new_and_shuffled(&mut self.rng);

        for player in &mut self.players {
            player.hole = (0..HOLE_CARDS).map(|_| deck.deal()).collect();
            player.best = None;
        }

        self.board = (0..BOARD_CARDS).map(|_| deck.deal()).collect();
    }

    /// Evaluates every player's cards against the board and returns the
    /// indices of the players with the strongest hand.
    fn showdown(&mut self) -> Vec<usize> {
        let board = self.board.clone();
        for player in &mut self.players {
            let mut cards = player.hole.clone();
            cards.extend_from_slice(&board);

            let (value, cards) = HandValue::eval_with_best_hand(&cards)
                .expect("dealt cards are unique");
            player.best = Some(BestHand { value, cards });
        }

        let best = self
            .players
            .iter()
            .map(|p| p.best().value)
            .max()
            .expect("table has players");

        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.best().value == best)
            .map(|(i, _)| i)
            .collect()
    }

    fn pay_winners(&mut self, winners: &[usize]) {
        let payoffs = self.pot.split(winners.len());
        for (&winner, &chips) in winners.iter().zip(&payoffs) {
            let player = &mut self.players[winner];
            player.chips += chips;
            info!("{} wins {} with {}", player.name, chips, player.best().value);
        }

        self.pot = Chips::ZERO;
    }
}
