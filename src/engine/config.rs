//! Grid configuration and its validation rules
//!
//! A `GameConfig` fixes the board dimensions. Changing either dimension
//! invalidates the board, evaluations, cursor, and target word, so the
//! engine funnels every change through [`GameConfig::apply`], which
//! silently rejects anything out of range.

/// Smallest allowed attempt count
pub const MIN_ATTEMPTS: usize = 1;
/// Largest allowed attempt count
pub const MAX_ATTEMPTS: usize = 12;
/// Shortest allowed word length
pub const MIN_WORD_LENGTH: usize = 3;
/// Longest allowed word length
pub const MAX_WORD_LENGTH: usize = 8;

/// Which dimension a configuration change targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    MaxAttempts,
    WordLength,
}

/// Board dimensions: attempt rows and letters per row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    max_attempts: usize,
    word_length: usize,
}

impl Default for GameConfig {
    /// The classic grid: six attempts at a five-letter word
    fn default() -> Self {
        Self {
            max_attempts: 6,
            word_length: 5,
        }
    }
}

impl GameConfig {
    /// Create a config, clamping nothing: out-of-range values are refused
    ///
    /// Returns `None` if either dimension falls outside its bound
    /// (`max_attempts` in 1..=12, `word_length` in 3..=8).
    #[must_use]
    pub fn new(max_attempts: usize, word_length: usize) -> Option<Self> {
        let attempts_ok = (MIN_ATTEMPTS..=MAX_ATTEMPTS).contains(&max_attempts);
        let length_ok = (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word_length);

        (attempts_ok && length_ok).then_some(Self {
            max_attempts,
            word_length,
        })
    }

    /// Apply a single-field change, returning the updated config
    ///
    /// Returns `None`, with no mutation and no error, when the value is out
    /// of range for the field or equals the current value (nothing to change).
    ///
    /// # Examples
    /// ```
    /// use wordle_engine::engine::{ConfigField, GameConfig};
    ///
    /// let config = GameConfig::default();
    /// assert!(config.apply(ConfigField::WordLength, 7).is_some());
    /// assert!(config.apply(ConfigField::WordLength, 20).is_none());
    /// assert!(config.apply(ConfigField::MaxAttempts, 0).is_none());
    /// ```
    #[must_use]
    pub fn apply(self, field: ConfigField, value: i64) -> Option<Self> {
        let value = usize::try_from(value).ok()?;

        let updated = match field {
            ConfigField::MaxAttempts => Self::new(value, self.word_length)?,
            ConfigField::WordLength => Self::new(self.max_attempts, value)?,
        };

        (updated != self).then_some(updated)
    }

    /// Number of attempt rows on the board
    #[inline]
    #[must_use]
    pub const fn max_attempts(self) -> usize {
        self.max_attempts
    }

    /// Number of letter slots per row
    #[inline]
    #[must_use]
    pub const fn word_length(self) -> usize {
        self.word_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic_grid() {
        let config = GameConfig::default();
        assert_eq!(config.max_attempts(), 6);
        assert_eq!(config.word_length(), 5);
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert!(GameConfig::new(0, 5).is_none());
        assert!(GameConfig::new(13, 5).is_none());
        assert!(GameConfig::new(6, 2).is_none());
        assert!(GameConfig::new(6, 9).is_none());
    }

    #[test]
    fn new_accepts_bounds() {
        assert!(GameConfig::new(1, 3).is_some());
        assert!(GameConfig::new(12, 8).is_some());
    }

    #[test]
    fn apply_changes_one_field() {
        let config = GameConfig::default();

        let updated = config.apply(ConfigField::MaxAttempts, 9).unwrap();
        assert_eq!(updated.max_attempts(), 9);
        assert_eq!(updated.word_length(), 5);

        let updated = config.apply(ConfigField::WordLength, 3).unwrap();
        assert_eq!(updated.max_attempts(), 6);
        assert_eq!(updated.word_length(), 3);
    }

    #[test]
    fn apply_rejects_out_of_range() {
        let config = GameConfig::default();
        assert!(config.apply(ConfigField::WordLength, 20).is_none());
        assert!(config.apply(ConfigField::WordLength, 2).is_none());
        assert!(config.apply(ConfigField::MaxAttempts, 13).is_none());
        assert!(config.apply(ConfigField::MaxAttempts, -1).is_none());
    }

    #[test]
    fn apply_rejects_no_op_change() {
        let config = GameConfig::default();
        assert!(config.apply(ConfigField::WordLength, 5).is_none());
        assert!(config.apply(ConfigField::MaxAttempts, 6).is_none());
    }
}
