//! Per-letter evaluation outcomes
//!
//! A `LetterStatus` is the feedback for one letter of a submitted guess:
//! - `Absent`: the letter cannot be used at that position (no target
//!   occurrence remains for it)
//! - `Present`: the letter is in the target but at a different position
//! - `Correct`: right letter, right position
//!
//! The variant order doubles as the certainty order used when aggregating
//! keyboard hints: `Absent < Present < Correct`.

use std::fmt;

/// Feedback status for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterStatus {
    /// Letter not usable at this position given remaining target occurrences
    Absent,
    /// Letter occurs in the target, but elsewhere
    Present,
    /// Letter matches the target at this exact position
    Correct,
}

impl LetterStatus {
    /// Merge a newly observed status into a previously known one
    ///
    /// Keeps whichever status carries more certainty: a known `Correct` is
    /// never downgraded, a known `Absent` is upgraded by anything, and
    /// `Present` is upgraded only by `Correct`.
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::core::LetterStatus;
    ///
    /// assert_eq!(
    ///     LetterStatus::Correct.merge(LetterStatus::Absent),
    ///     LetterStatus::Correct
    /// );
    /// assert_eq!(
    ///     LetterStatus::Absent.merge(LetterStatus::Present),
    ///     LetterStatus::Present
    /// );
    /// ```
    #[inline]
    #[must_use]
    pub fn merge(self, observed: Self) -> Self {
        self.max(observed)
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_never_downgrades_correct() {
        assert_eq!(
            LetterStatus::Correct.merge(LetterStatus::Absent),
            LetterStatus::Correct
        );
        assert_eq!(
            LetterStatus::Correct.merge(LetterStatus::Present),
            LetterStatus::Correct
        );
        assert_eq!(
            LetterStatus::Correct.merge(LetterStatus::Correct),
            LetterStatus::Correct
        );
    }

    #[test]
    fn merge_upgrades_absent() {
        assert_eq!(
            LetterStatus::Absent.merge(LetterStatus::Present),
            LetterStatus::Present
        );
        assert_eq!(
            LetterStatus::Absent.merge(LetterStatus::Correct),
            LetterStatus::Correct
        );
    }

    #[test]
    fn merge_upgrades_present_only_to_correct() {
        assert_eq!(
            LetterStatus::Present.merge(LetterStatus::Absent),
            LetterStatus::Present
        );
        assert_eq!(
            LetterStatus::Present.merge(LetterStatus::Correct),
            LetterStatus::Correct
        );
    }

    #[test]
    fn certainty_order() {
        assert!(LetterStatus::Absent < LetterStatus::Present);
        assert!(LetterStatus::Present < LetterStatus::Correct);
    }

    #[test]
    fn display_names() {
        assert_eq!(LetterStatus::Absent.to_string(), "absent");
        assert_eq!(LetterStatus::Present.to_string(), "present");
        assert_eq!(LetterStatus::Correct.to_string(), "correct");
    }
}
