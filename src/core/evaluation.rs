//! Guess evaluation against a hidden target
//!
//! An `Evaluation` holds the per-letter feedback for one submitted row.
//! Scoring is the standard two-pass algorithm: exact matches first, then
//! misplaced letters against the target's remaining letter pool, so a
//! target letter is never matched twice.

use super::LetterStatus;
use rustc_hash::FxHashMap;

/// Per-letter feedback for one submitted guess row
///
/// Immutable once computed; the engine stores one per submitted row until
/// the board is reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation(Vec<LetterStatus>);

impl Evaluation {
    /// Score `guess` against `target`
    ///
    /// Both slices must be uppercase ASCII letters of equal length.
    ///
    /// # Algorithm
    /// 1. Start with every status `Absent`; take the target's letter counts
    /// 2. First pass: mark exact position matches `Correct` and consume the
    ///    matched letter from the pool
    /// 3. Second pass: for each remaining position, mark `Present` if the
    ///    pool still holds that letter, consuming one occurrence
    ///
    /// A letter appearing once in the target but twice in the guess thus
    /// yields exactly one `Correct`/`Present` and one `Absent`.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::{Evaluation, LetterStatus};
    ///
    /// let eval = Evaluation::score(b"TRACE", b"CRATE");
    /// assert_eq!(
    ///     eval.statuses(),
    ///     &[
    ///         LetterStatus::Present,
    ///         LetterStatus::Correct,
    ///         LetterStatus::Correct,
    ///         LetterStatus::Present,
    ///         LetterStatus::Correct,
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &[u8], target: &[u8]) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "guess and target must match");

        let mut statuses = vec![LetterStatus::Absent; guess.len()];

        let mut remaining: FxHashMap<u8, u8> = FxHashMap::default();
        for &letter in target {
            *remaining.entry(letter).or_insert(0) += 1;
        }

        // First pass: exact position matches
        for (i, &letter) in guess.iter().enumerate() {
            if target[i] == letter {
                statuses[i] = LetterStatus::Correct;
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters from the remaining pool
        for (i, &letter) in guess.iter().enumerate() {
            if statuses[i] == LetterStatus::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(&letter)
                && *count > 0
            {
                statuses[i] = LetterStatus::Present;
                *count -= 1;
            }
        }

        Self(statuses)
    }

    /// The per-position statuses, in guess order
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[LetterStatus] {
        &self.0
    }

    /// Status at a specific position
    ///
    /// # Panics
    /// Panics if `position` is out of range.
    #[inline]
    #[must_use]
    pub fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// True when every position is `Correct` (the guess equals the target)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    /// Number of scored positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no positions were scored
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
