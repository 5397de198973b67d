// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker console game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::io::{self, BufRead, Write};

mod chips;
mod game;
mod terminal;

use chips::Chips;
use game::Game;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players at the table.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=6))]
    players: u8,
    /// Starting chips for each player.
    #[clap(long, default_value_t = 100)]
    chips: u32,
    /// Ante each player pays before the deal.
    #[clap(long, default_value_t = 2)]
    ante: u32,
    /// Seed for the deck shuffler, random when not given.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut game = Game::new(
        cli.players as usize,
        Chips::new(cli.chips),
        Chips::new(cli.ante),
        rng,
    );

    loop {
        let winners = game.play_hand();
        terminal::print_hand(&mut io::stdout().lock(), &game, &winners)?;

        if game.players_with_chips() < 2 {
            println!("Game over");
            break;
        }

        if !play_another()? {
            break;
        }
    }

    Ok(())
}

/// Asks whether to play another hand.
fn play_another() -> Result<bool> {
    print!("Play another hand? <y or n> ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_ascii_uppercase().starts_with('Y'))
}
