//! Win/loss statistics and their persistence
//!
//! The record is small (streak, games won, games played) but outlives a
//! session: the engine loads it once at startup and writes it back after
//! every game-end mutation through a [`StatsStore`].

mod store;

pub use store::{JsonFileStore, MemoryStore, StatsStore, StoreError};

use serde::{Deserialize, Serialize};

/// Persistent win/loss counters
///
/// Serialized with exactly the field names `streak`, `gamesWon`,
/// `gamesPlayed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Consecutive games won without an intervening loss
    pub streak: u32,
    #[serde(rename = "gamesWon")]
    pub games_won: u32,
    #[serde(rename = "gamesPlayed")]
    pub games_played: u32,
}

impl Statistics {
    /// Record a finished game that was won
    pub fn record_win(&mut self) {
        self.games_won += 1;
        self.streak += 1;
        self.games_played += 1;
    }

    /// Record a finished game that was lost
    pub fn record_loss(&mut self) {
        self.streak = 0;
        self.games_played += 1;
    }

    /// Fraction of played games won, in 0.0..=1.0
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_bumps_all_three_counters() {
        let mut stats = Statistics::default();
        stats.record_win();

        assert_eq!(stats.streak, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.games_played, 1);
    }

    #[test]
    fn loss_bumps_only_games_played_and_clears_streak() {
        let mut stats = Statistics {
            streak: 4,
            games_won: 7,
            games_played: 9,
        };
        stats.record_loss();

        assert_eq!(stats.streak, 0);
        assert_eq!(stats.games_won, 7);
        assert_eq!(stats.games_played, 10);
    }

    #[test]
    fn streak_survives_consecutive_wins() {
        let mut stats = Statistics::default();
        stats.record_win();
        stats.record_win();
        stats.record_win();
        assert_eq!(stats.streak, 3);

        stats.record_loss();
        assert_eq!(stats.streak, 0);

        stats.record_win();
        assert_eq!(stats.streak, 1);
    }

    #[test]
    fn win_rate_handles_zero_games() {
        let stats = Statistics::default();
        assert!((stats.win_rate() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_with_persisted_field_names() {
        let stats = Statistics {
            streak: 2,
            games_won: 5,
            games_played: 8,
        };
        let json = serde_json::to_string(&stats).unwrap();

        assert!(json.contains("\"streak\":2"));
        assert!(json.contains("\"gamesWon\":5"));
        assert!(json.contains("\"gamesPlayed\":8"));
    }

    #[test]
    fn round_trips_through_json() {
        let stats = Statistics {
            streak: 1,
            games_won: 3,
            games_played: 4,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let back: Statistics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }
}
