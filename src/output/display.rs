//! Display functions for the plain CLI mode

use super::formatters::{KEYBOARD_ROWS, paint_letter};
use crate::engine::{GameSnapshot, GameStatus};
use crate::stats::Statistics;
use colored::Colorize;

/// Print the guess grid
///
/// Submitted rows are colored by their evaluation; the active row shows
/// its typed letters, and untouched slots print as dots.
pub fn print_board(snapshot: &GameSnapshot) {
    println!();
    for row in 0..snapshot.config.max_attempts() {
        let mut line = String::new();

        if let Some(evaluation) = snapshot.evaluations.get(row) {
            for (slot, &status) in evaluation.statuses().iter().enumerate() {
                let letter = snapshot.board.cell(row, slot).unwrap_or(b'?');
                line.push_str(&paint_letter(letter, status));
                line.push(' ');
            }
        } else {
            for slot in 0..snapshot.config.word_length() {
                match snapshot.board.cell(row, slot) {
                    Some(letter) => {
                        line.push(letter as char);
                        line.push(' ');
                    }
                    None => line.push_str("· "),
                }
            }
        }

        println!("  {line}");
    }
    println!();
}

/// Print the keyboard with per-letter hints
///
/// Letters never guessed print plain; guessed letters take their
/// best-known status color.
pub fn print_keyboard(snapshot: &GameSnapshot) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let mut line = " ".repeat(indent);
        for letter in row.bytes() {
            match snapshot.hints.status_of(letter) {
                Some(status) => line.push_str(&paint_letter(letter, status)),
                None => line.push(letter as char),
            }
            line.push(' ');
        }
        println!("  {line}");
    }
    println!();
}

/// Print the statistics summary
pub fn print_statistics(stats: &Statistics) {
    println!("\n📊 {}", "Statistics".bright_cyan().bold());
    println!("   Games played:  {}", stats.games_played);
    println!("   Games won:     {}", stats.games_won);
    println!("   Win rate:      {:.0}%", stats.win_rate() * 100.0);
    println!(
        "   Streak:        {}",
        stats.streak.to_string().bright_yellow()
    );
}

/// Print the end-of-game banner
pub fn print_game_end(snapshot: &GameSnapshot, target: &str) {
    match snapshot.status {
        GameStatus::Won => {
            let attempts = snapshot.evaluations.len();
            println!(
                "\n{}",
                format!(
                    "🎉 Solved in {attempts} {}!",
                    if attempts == 1 { "guess" } else { "guesses" }
                )
                .green()
                .bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "\n{}",
                format!("❌ Out of attempts! The word was {target}")
                    .red()
                    .bold()
            );
        }
        GameStatus::Playing => {}
    }
}
