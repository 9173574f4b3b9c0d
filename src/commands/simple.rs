//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI.

use crate::engine::{Game, SubmitOutcome};
use crate::output::{print_board, print_game_end, print_keyboard, print_statistics};
use crate::stats::StatsStore;
use crate::words::WordSource;
use std::io::{self, Write};

/// Run the simple line-based game loop
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_simple<W: WordSource, S: StatsStore>(game: &mut Game<W, S>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle - Interactive Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden word. After each guess the letters are colored:");
    println!("  - green: right letter, right position");
    println!("  - yellow: right letter, wrong position");
    println!("  - gray: letter not available at that position\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    loop {
        let snapshot = game.snapshot();
        print_board(&snapshot);
        print_keyboard(&snapshot);

        let word_length = snapshot.config.word_length();
        let attempts_left = snapshot.config.max_attempts() - snapshot.cursor.attempt;
        println!("{attempts_left} attempts left, {word_length} letters");

        let input = get_user_input("Guess")?.to_uppercase();

        match input.as_str() {
            "QUIT" | "Q" | "EXIT" => {
                print_statistics(&game.statistics());
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "NEW" | "N" => {
                game.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            "" => continue,
            _ => {}
        }

        if input.len() > word_length {
            println!("❌ Too long! The word has {word_length} letters.\n");
            continue;
        }

        for ch in input.chars() {
            game.press(ch);
        }

        match game.submit() {
            SubmitOutcome::Won | SubmitOutcome::Lost => {
                let snapshot = game.snapshot();
                print_board(&snapshot);
                print_game_end(&snapshot, &game.target_word());
                print_statistics(&game.statistics());

                match get_user_input("\nPlay again? (yes/no)")?
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" => {
                        game.reset();
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
            SubmitOutcome::Rejected => {
                println!("❌ Need exactly {word_length} letters!\n");
                clear_active_row(game);
            }
            SubmitOutcome::Accepted | SubmitOutcome::Ignored => {}
        }
    }
}

/// Erase whatever the rejected input left on the active row
fn clear_active_row<W: WordSource, S: StatsStore>(game: &mut Game<W, S>) {
    while game.snapshot().cursor.position > 0 {
        game.delete();
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
