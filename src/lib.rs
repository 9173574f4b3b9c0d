//! Wordle Engine
//!
//! A word-guessing game engine with multiset-correct guess evaluation,
//! cumulative keyboard hints, and statistics persisted across sessions.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::engine::{Game, GameConfig, SubmitOutcome};
//! use wordle_engine::stats::MemoryStore;
//! use wordle_engine::words::SampledSource;
//!
//! let mut game = Game::new(
//!     GameConfig::default(),
//!     SampledSource::new(["crate"]),
//!     MemoryStore::new(),
//! );
//!
//! for ch in "crate".chars() {
//!     game.press(ch);
//! }
//! assert_eq!(game.submit(), SubmitOutcome::Won);
//! ```

// Core domain types
pub mod core;

// Game state machine and configuration
pub mod engine;

// Target word supply
pub mod words;

// Statistics and persistence
pub mod stats;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
