//! Formatting utilities for terminal output

use crate::core::{Evaluation, LetterStatus};
use colored::Colorize;

/// QWERTY keyboard layout used for hint printouts
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format an evaluation as an emoji row
///
/// # Examples
/// ```
/// use wordle_engine::core::Evaluation;
/// use wordle_engine::output::formatters::evaluation_to_emoji;
///
/// let eval = Evaluation::score(b"TRACE", b"CRATE");
/// assert_eq!(evaluation_to_emoji(&eval), "🟨🟩🟩🟨🟩");
/// ```
#[must_use]
pub fn evaluation_to_emoji(evaluation: &Evaluation) -> String {
    evaluation
        .statuses()
        .iter()
        .map(|status| match status {
            LetterStatus::Correct => '🟩',
            LetterStatus::Present => '🟨',
            LetterStatus::Absent => '⬜',
        })
        .collect()
}

/// Color a letter by its evaluation status
#[must_use]
pub fn paint_letter(letter: u8, status: LetterStatus) -> String {
    let ch = (letter as char).to_string();
    match status {
        LetterStatus::Correct => ch.green().bold().to_string(),
        LetterStatus::Present => ch.yellow().bold().to_string(),
        LetterStatus::Absent => ch.bright_black().to_string(),
    }
}
