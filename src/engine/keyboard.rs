//! Cumulative per-letter knowledge for keyboard hinting
//!
//! Tracks the best-known status of every letter that has appeared in a
//! submitted guess this game. Statuses only ever improve under the order
//! `Absent < Present < Correct`: once a letter is known correct somewhere,
//! a later guess placing it elsewhere as absent (its target occurrence
//! already consumed) must not erase that certainty.

use crate::core::{Evaluation, LetterStatus};
use rustc_hash::FxHashMap;

/// Best-known status per guessed letter
#[derive(Debug, Clone, Default)]
pub struct KeyboardHints {
    map: FxHashMap<u8, LetterStatus>,
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one submitted guess and its evaluation into the hint map
    ///
    /// Each letter's new status is merged with [`LetterStatus::merge`], so
    /// entries are monotone non-decreasing across a game.
    pub fn absorb(&mut self, guess: &[u8], evaluation: &Evaluation) {
        debug_assert_eq!(guess.len(), evaluation.len());

        for (&letter, &status) in guess.iter().zip(evaluation.statuses()) {
            self.map
                .entry(letter)
                .and_modify(|known| *known = known.merge(status))
                .or_insert(status);
        }
    }

    /// Best-known status for a letter, or `None` if never guessed
    #[must_use]
    pub fn status_of(&self, letter: u8) -> Option<LetterStatus> {
        self.map.get(&letter).copied()
    }

    /// Number of distinct letters guessed so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True before any guess has been submitted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Evaluation;

    #[test]
    fn starts_empty() {
        let hints = KeyboardHints::new();
        assert!(hints.is_empty());
        assert_eq!(hints.status_of(b'A'), None);
    }

    #[test]
    fn absorb_records_each_guessed_letter() {
        let mut hints = KeyboardHints::new();
        let eval = Evaluation::score(b"TRACE", b"CRATE");
        hints.absorb(b"TRACE", &eval);

        assert_eq!(hints.len(), 5);
        assert_eq!(hints.status_of(b'T'), Some(LetterStatus::Present));
        assert_eq!(hints.status_of(b'R'), Some(LetterStatus::Correct));
        assert_eq!(hints.status_of(b'Z'), None);
    }

    #[test]
    fn correct_is_never_downgraded() {
        let mut hints = KeyboardHints::new();

        // First guess puts E correct at position 4
        hints.absorb(b"CRANE", &Evaluation::score(b"CRANE", b"SLATE"));
        assert_eq!(hints.status_of(b'E'), Some(LetterStatus::Correct));

        // A guess with E in a consumed spot scores it absent; the hint holds
        hints.absorb(b"EERIE", &Evaluation::score(b"EERIE", b"SLATE"));
        assert_eq!(hints.status_of(b'E'), Some(LetterStatus::Correct));
    }

    #[test]
    fn absent_upgrades_to_present_and_correct() {
        let mut hints = KeyboardHints::new();

        hints.absorb(b"TUTOR", &Evaluation::score(b"TUTOR", b"SLATE"));
        assert_eq!(hints.status_of(b'T'), Some(LetterStatus::Present));

        hints.absorb(b"SLATE", &Evaluation::score(b"SLATE", b"SLATE"));
        assert_eq!(hints.status_of(b'T'), Some(LetterStatus::Correct));
    }

    #[test]
    fn statuses_are_monotone_across_a_game() {
        let target = b"CRATE";
        let guesses: &[&[u8]] = &[b"TRACE", b"CARTS", b"CRANE", b"CRATE"];

        let mut hints = KeyboardHints::new();
        let mut previous: FxHashMap<u8, LetterStatus> = FxHashMap::default();

        for &guess in guesses {
            hints.absorb(guess, &Evaluation::score(guess, target));

            for (&letter, &before) in &previous {
                let now = hints.status_of(letter).unwrap();
                assert!(now >= before, "hint for {} regressed", letter as char);
            }
            for &letter in guess {
                previous.insert(letter, hints.status_of(letter).unwrap());
            }
        }
    }
}
