//! Terminal output formatting
//!
//! Display utilities for the plain CLI mode and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_end, print_keyboard, print_statistics};
