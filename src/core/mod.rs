//! Core domain types for the game engine
//!
//! This module contains the fundamental domain types with zero external dependencies
//! beyond a hash map. All types here are pure, testable, and have clear mathematical
//! properties.

mod evaluation;
mod letter;

pub use evaluation::Evaluation;
pub use letter::LetterStatus;
