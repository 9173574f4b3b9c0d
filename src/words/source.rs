//! Target word supply
//!
//! The engine asks a [`WordSource`] for a fresh target at every reset. A
//! source is treated as unreliable: whatever it returns is validated, and
//! on any failure the engine substitutes the deterministic fallback word
//! immediately rather than retrying.

use rand::seq::IteratorRandom;
use std::fmt;

/// Base of the deterministic fallback target
pub const FALLBACK_WORD: &str = "REACT";
/// Pad letter used when the fallback must be longer than its base
pub const FALLBACK_PAD: char = 'X';

/// Error type for word supply failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSourceError {
    /// The source holds no word of the requested length
    NoWordOfLength(usize),
}

impl fmt::Display for WordSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWordOfLength(length) => {
                write!(f, "no word of length {length} available")
            }
        }
    }
}

impl std::error::Error for WordSourceError {}

/// Supplier of target words of a requested length
pub trait WordSource {
    /// Fetch an uppercase word of exactly `length` letters
    ///
    /// # Errors
    /// Returns a `WordSourceError` when no suitable word can be supplied.
    /// Callers must be prepared to fall back (see [`fallback_word`]).
    fn fetch(&mut self, length: usize) -> Result<String, WordSourceError>;
}

/// The deterministic fallback target for a given length
///
/// `"REACT"` truncated or padded with `'X'` to exactly `length` letters.
///
/// # Examples
/// ```
/// use wordle_engine::words::fallback_word;
///
/// assert_eq!(fallback_word(3), "REA");
/// assert_eq!(fallback_word(5), "REACT");
/// assert_eq!(fallback_word(8), "REACTXXX");
/// ```
#[must_use]
pub fn fallback_word(length: usize) -> String {
    let mut word: String = FALLBACK_WORD.chars().take(length).collect();
    while word.len() < length {
        word.push(FALLBACK_PAD);
    }
    word
}

/// Word source drawing uniformly from an in-memory list
///
/// Words are normalized to uppercase on construction; entries with
/// non-letter characters are dropped.
pub struct SampledSource {
    words: Vec<String>,
}

impl SampledSource {
    /// Build a source from any word list
    #[must_use]
    pub fn new<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| {
                let w = w.as_ref().trim();
                (!w.is_empty() && w.chars().all(|c| c.is_ascii_alphabetic()))
                    .then(|| w.to_ascii_uppercase())
            })
            .collect();
        Self { words }
    }

    /// Build a source over the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(crate::words::WORDS.iter().copied())
    }

    /// Number of usable words held by this source
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the source holds no words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for SampledSource {
    fn fetch(&mut self, length: usize) -> Result<String, WordSourceError> {
        let mut rng = rand::rng();
        self.words
            .iter()
            .filter(|w| w.len() == length)
            .choose(&mut rng)
            .cloned()
            .ok_or(WordSourceError::NoWordOfLength(length))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_truncates_and_pads() {
        assert_eq!(fallback_word(3), "REA");
        assert_eq!(fallback_word(4), "REAC");
        assert_eq!(fallback_word(5), "REACT");
        assert_eq!(fallback_word(6), "REACTX");
        assert_eq!(fallback_word(8), "REACTXXX");
    }

    #[test]
    fn sampled_source_normalizes_to_uppercase() {
        let mut source = SampledSource::new(["crate", "Stone", "HOUSE"]);
        let word = source.fetch(5).unwrap();
        assert!(word.chars().all(|c| c.is_ascii_uppercase()));
        assert!(["CRATE", "STONE", "HOUSE"].contains(&word.as_str()));
    }

    #[test]
    fn sampled_source_drops_invalid_entries() {
        let source = SampledSource::new(["crate", "sh0rt", "", "with space"]);
        assert_eq!(source.len(), 1);
    }

    #[test]
    fn sampled_source_respects_requested_length() {
        let mut source = SampledSource::new(["cat", "crate", "anchor"]);
        assert_eq!(source.fetch(3).unwrap(), "CAT");
        assert_eq!(source.fetch(6).unwrap(), "ANCHOR");
    }

    #[test]
    fn sampled_source_errors_on_missing_length() {
        let mut source = SampledSource::new(["crate"]);
        assert_eq!(
            source.fetch(4),
            Err(WordSourceError::NoWordOfLength(4))
        );
    }

    #[test]
    fn embedded_source_covers_every_playable_length() {
        let mut source = SampledSource::embedded();
        for length in 3..=8 {
            let word = source.fetch(length).unwrap();
            assert_eq!(word.len(), length);
        }
    }
}
