//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded
//! constants. Entries are normalized to uppercase; anything that is not a
//! pure ASCII-letter word is skipped.

use std::fs;
use std::io;
use std::path::Path;

/// Normalize a raw entry, dropping anything that is not a plain word
fn normalize(line: &str) -> Option<String> {
    let trimmed = line.trim();
    (!trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_alphabetic()))
        .then(|| trimmed.to_ascii_uppercase())
}

/// Load words from a file
///
/// Returns the valid entries in file order, skipping blank and malformed
/// lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_engine::words::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().filter_map(normalize).collect())
}

/// Convert a string slice list to normalized owned words
///
/// # Examples
/// ```
/// use wordle_engine::words::loader::words_from_slice;
/// use wordle_engine::words::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|s| normalize(s)).collect()
}

/// Filter a word list down to one length
#[must_use]
pub fn words_of_length(words: &[String], length: usize) -> Vec<String> {
    words.iter().filter(|w| w.len() == length).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_normalizes_case() {
        let input = &["crate", "Stone", "IRATE"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["CRATE", "STONE", "IRATE"]);
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crate", "sh0rt", "", "  ", "with space", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words, vec!["CRATE", "SLATE"]);
    }

    #[test]
    fn words_of_length_filters() {
        let words = words_from_slice(&["cat", "crate", "dog", "anchor"]);
        assert_eq!(words_of_length(&words, 3), vec!["CAT", "DOG"]);
        assert_eq!(words_of_length(&words, 6), vec!["ANCHOR"]);
        assert!(words_of_length(&words, 4).is_empty());
    }

    #[test]
    fn embedded_words_are_valid() {
        use crate::words::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());

        for word in &words {
            assert!((3..=8).contains(&word.len()), "'{word}' has a bad length");
        }
    }
}
