//! The board state machine
//!
//! A [`Game`] owns the grid, the hidden target, the per-row evaluations,
//! the keyboard hints, and the persistent statistics. It processes one
//! input event (press, delete, submit, reset, reconfigure) at a time,
//! and every transition is atomic: no operation can leave the board,
//! cursor, and status mutually inconsistent.

use super::board::{Board, Cursor};
use super::config::{ConfigField, GameConfig};
use super::keyboard::KeyboardHints;
use crate::core::Evaluation;
use crate::stats::{Statistics, StatsStore};
use crate::words::{WordSource, fallback_word};

/// Lifecycle of one game session
///
/// Transitions only move forward (`Playing` → `Won`, `Playing` → `Lost`);
/// a reset starts a fresh `Playing` session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// What a `submit` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The game is already over; nothing happened
    Ignored,
    /// The row was incomplete or invalid; the host should show a transient
    /// shake, durable state is unchanged
    Rejected,
    /// The guess was scored and the game continues on the next row
    Accepted,
    /// The guess matched the target
    Won,
    /// The guess missed on the final row
    Lost,
}

/// Read-only view of the engine after an operation
///
/// The presentation layer re-renders from this; nothing in it can mutate
/// the engine.
#[derive(Debug, Clone)]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub board: Board,
    pub evaluations: Vec<Evaluation>,
    pub cursor: Cursor,
    pub status: GameStatus,
    pub hints: KeyboardHints,
    pub statistics: Statistics,
}

/// The game engine: grid, target, hints, statistics, and their transitions
pub struct Game<W: WordSource, S: StatsStore> {
    config: GameConfig,
    board: Board,
    evaluations: Vec<Evaluation>,
    target: Vec<u8>,
    status: GameStatus,
    hints: KeyboardHints,
    stats: Statistics,
    words: W,
    store: S,
}

impl<W: WordSource, S: StatsStore> Game<W, S> {
    /// Start an engine: load persisted statistics, fetch the first target
    ///
    /// A store that fails to load yields all-zero statistics; a word source
    /// that fails yields the deterministic fallback target. Neither failure
    /// is surfaced.
    pub fn new(config: GameConfig, words: W, mut store: S) -> Self {
        let stats = store.load().ok().flatten().unwrap_or_default();

        let mut game = Self {
            config,
            board: Board::new(config.max_attempts(), config.word_length()),
            evaluations: Vec::new(),
            target: Vec::new(),
            status: GameStatus::Playing,
            hints: KeyboardHints::new(),
            stats,
            words,
            store,
        };
        game.target = game.next_target();
        game
    }

    /// Type a letter into the active row
    ///
    /// No-op unless the game is playing, the row has room, and `ch` is an
    /// ASCII letter (normalized to uppercase).
    pub fn press(&mut self, ch: char) {
        if self.status != GameStatus::Playing || !ch.is_ascii_alphabetic() {
            return;
        }
        self.board.push_letter(ch.to_ascii_uppercase() as u8);
    }

    /// Erase the letter before the cursor
    ///
    /// No-op unless the game is playing and the active row is non-empty.
    pub fn delete(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        self.board.pop_letter();
    }

    /// Submit the active row for evaluation
    ///
    /// Scores a full, valid row and transitions the game: a perfect match
    /// wins, a miss on the final row loses, anything else advances to the
    /// next row. Game-end transitions update and persist the statistics.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.status != GameStatus::Playing {
            return SubmitOutcome::Ignored;
        }

        let row = self.board.active_row().to_vec();
        if !self.board.active_row_full() || !self.row_is_valid(&row) {
            return SubmitOutcome::Rejected;
        }

        let evaluation = Evaluation::score(&row, &self.target);
        let won = evaluation.is_perfect();

        self.hints.absorb(&row, &evaluation);
        self.evaluations.push(evaluation);

        if won {
            self.status = GameStatus::Won;
            self.stats.record_win();
            self.persist_stats();
            SubmitOutcome::Won
        } else if self.board.cursor().attempt + 1 == self.config.max_attempts() {
            self.status = GameStatus::Lost;
            self.stats.record_loss();
            self.persist_stats();
            SubmitOutcome::Lost
        } else {
            self.board.advance_row();
            SubmitOutcome::Accepted
        }
    }

    /// Start a fresh game with a new target
    ///
    /// Permitted in any status. Clears the board, evaluations, and hints;
    /// statistics are untouched.
    pub fn reset(&mut self) {
        self.target = self.next_target();
        self.board = Board::new(self.config.max_attempts(), self.config.word_length());
        self.evaluations.clear();
        self.hints = KeyboardHints::new();
        self.status = GameStatus::Playing;
    }

    /// Change one grid dimension
    ///
    /// Out-of-range or unchanged values are silently rejected. A successful
    /// change atomically replaces the board, evaluations, cursor, and
    /// target for the new dimensions; statistics carry over.
    pub fn set_config(&mut self, field: ConfigField, value: i64) {
        if let Some(updated) = self.config.apply(field, value) {
            self.config = updated;
            self.reset();
        }
    }

    /// Read-only view of the whole engine state
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config,
            board: self.board.clone(),
            evaluations: self.evaluations.clone(),
            cursor: self.board.cursor(),
            status: self.status,
            hints: self.hints.clone(),
            statistics: self.stats,
        }
    }

    /// Current game status
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Current grid dimensions
    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Current statistics record
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        self.stats
    }

    /// The hidden target, revealed as a string
    ///
    /// Hosts show this after a lost game.
    #[must_use]
    pub fn target_word(&self) -> String {
        String::from_utf8_lossy(&self.target).into_owned()
    }

    /// Validity check for a filled row
    ///
    /// Currently a length check only; a richer dictionary check would slot
    /// in here.
    fn row_is_valid(&self, row: &[u8]) -> bool {
        row.len() == self.config.word_length()
    }

    /// Fetch the next target, falling back deterministically
    ///
    /// Any source failure (an error, a word of the wrong length, or one
    /// with non-letter characters) yields the fallback word immediately.
    fn next_target(&mut self) -> Vec<u8> {
        let length = self.config.word_length();
        match self.words.fetch(length) {
            Ok(word) if is_valid_target(&word, length) => word.into_bytes(),
            _ => fallback_word(length).into_bytes(),
        }
    }

    /// Persist the statistics after a mutation
    ///
    /// Save failures are non-fatal; the in-memory record stays
    /// authoritative for the session.
    fn persist_stats(&mut self) {
        let _ = self.store.save(&self.stats);
    }
}

fn is_valid_target(word: &str, length: usize) -> bool {
    word.len() == length && word.bytes().all(|b| b.is_ascii_uppercase())
}
