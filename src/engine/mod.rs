//! The game engine
//!
//! Board state machine, grid configuration, and cumulative keyboard
//! knowledge. The engine owns all mutable game state; hosts drive it with
//! discrete input events and re-render from [`GameSnapshot`]s.

mod board;
mod config;
mod game;
mod keyboard;

pub use board::{Board, Cursor};
pub use config::{
    ConfigField, GameConfig, MAX_ATTEMPTS, MAX_WORD_LENGTH, MIN_ATTEMPTS, MIN_WORD_LENGTH,
};
pub use game::{Game, GameSnapshot, GameStatus, SubmitOutcome};
pub use keyboard::KeyboardHints;
