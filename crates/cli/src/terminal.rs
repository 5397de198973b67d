// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for a hand.
use anyhow::Result;
use std::io::Write;

use showdown_cards::{Card, Suit};

use crate::game::{Game, Player};

/// Prints the board, every player's cards and best hand, and the winners.
pub fn print_hand(w: &mut impl Write, game: &Game, winners: &[usize]) -> Result<()> {
    writeln!(w)?;
    writeln!(w, "Board: {}", fmt_cards(game.board()))?;
    writeln!(w, "{}", "+".repeat(47))?;

    for player in game.players() {
        print_player(w, player)?;
    }

    write!(w, "Winner(s):")?;
    for &winner in winners {
        let player = &game.players()[winner];
        write!(w, " {} ({})", player.name(), player.best().value)?;
    }
    writeln!(w)?;
    writeln!(w, "{}", "+".repeat(47))?;
    w.flush()?;

    Ok(())
}

fn print_player(w: &mut impl Write, player: &Player) -> Result<()> {
    writeln!(
        w,
        "{}: {} - {}",
        player.name(),
        player.chips(),
        fmt_cards(player.hole())
    )?;

    let best = player.best();
    writeln!(
        w,
        "    Best hand: {}   {}",
        fmt_cards(&best.cards),
        best.value
    )?;

    Ok(())
}

/// Formats cards with their suit symbols.
fn fmt_cards(cards: &[Card]) -> String {
    cards.iter().map(fmt_card).collect::<Vec<_>>().join(" ")
}

fn fmt_card(card: &Card) -> String {
    let suit = match card.suit() {
        Suit::Spades => '\u{2660}',
        Suit::Hearts => '\u{2665}',
        Suit::Diamonds => '\u{2666}',
        Suit::Clubs => '\u{2663}',
    };

    format!("{}{}", card.rank(), suit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chips::Chips;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn prints_board_players_and_winners() {
        let mut game = Game::new(
            3,
            Chips::new(100),
            Chips::new(2),
            StdRng::seed_from_u64(42),
        );
        let winners = game.play_hand();

        let mut out = Vec::new();
        print_hand(&mut out, &game, &winners).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Board:"));
        assert!(out.contains("Player 1:"));
        assert!(out.contains("Best hand:"));
        assert!(out.contains("Winner(s):"));
    }

    #[test]
    fn card_symbols() {
        use showdown_cards::Rank;

        let c = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(fmt_card(&c), "A\u{2660}");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(fmt_card(&c), "T\u{2665}");
    }
}
