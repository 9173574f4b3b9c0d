//! Target word supply
//!
//! Provides the embedded word list compiled into the binary, file loading
//! for custom lists, and the [`WordSource`] seam the engine fetches fresh
//! targets through.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{
    FALLBACK_PAD, FALLBACK_WORD, SampledSource, WordSource, WordSourceError, fallback_word,
};
