//! Statistics persistence
//!
//! A [`StatsStore`] is the narrow seam between the engine and durable
//! storage. The engine reads once at startup and writes after every
//! mutation; a failed write is non-fatal and leaves the in-memory record
//! authoritative for the session.

use super::Statistics;
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Error type for statistics storage failures
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Format(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "statistics file I/O failed: {err}"),
            Self::Format(err) => write!(f, "statistics file is malformed: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Format(err) => Some(err),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Format(err)
    }
}

/// Durable key-value persistence for the statistics record
pub trait StatsStore {
    /// Read the persisted record
    ///
    /// `Ok(None)` means nothing has been persisted yet; callers initialize
    /// all counters to zero in that case.
    ///
    /// # Errors
    /// Returns a `StoreError` when the backing storage cannot be read or
    /// holds a malformed record.
    fn load(&mut self) -> Result<Option<Statistics>, StoreError>;

    /// Write the whole record, replacing whatever was persisted before
    ///
    /// # Errors
    /// Returns a `StoreError` when the record cannot be written.
    fn save(&mut self, stats: &Statistics) -> Result<(), StoreError>;
}

/// File-backed store using a small JSON document
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StatsStore for JsonFileStore {
    fn load(&mut self) -> Result<Option<Statistics>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, stats: &Statistics) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(stats)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Option<Statistics>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already-persisted record
    #[must_use]
    pub fn with_record(stats: Statistics) -> Self {
        Self { saved: Some(stats) }
    }

    /// The record the last `save` wrote, if any
    #[must_use]
    pub fn saved(&self) -> Option<Statistics> {
        self.saved
    }
}

impl StatsStore for MemoryStore {
    fn load(&mut self) -> Result<Option<Statistics>, StoreError> {
        Ok(self.saved)
    }

    fn save(&mut self, stats: &Statistics) -> Result<(), StoreError> {
        self.saved = Some(*stats);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_loads_none_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("stats.json"));

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn file_store_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("stats.json"));

        let stats = Statistics {
            streak: 3,
            games_won: 10,
            games_played: 12,
        };
        store.save(&stats).unwrap();

        assert_eq!(store.load().unwrap(), Some(stats));
    }

    #[test]
    fn file_store_uses_persisted_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        let mut store = JsonFileStore::new(&path);

        store.save(&Statistics::default()).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.contains("\"streak\""));
        assert!(content.contains("\"gamesWon\""));
        assert!(content.contains("\"gamesPlayed\""));
    }

    #[test]
    fn file_store_rejects_malformed_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        fs::write(&path, "not json at all").unwrap();

        let mut store = JsonFileStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Format(_))));
    }

    #[test]
    fn file_store_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("stats.json"));

        let mut stats = Statistics::default();
        store.save(&stats).unwrap();
        stats.record_win();
        store.save(&stats).unwrap();

        assert_eq!(store.load().unwrap(), Some(stats));
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());

        let stats = Statistics {
            streak: 1,
            games_won: 1,
            games_played: 2,
        };
        store.save(&stats).unwrap();

        assert_eq!(store.load().unwrap(), Some(stats));
        assert_eq!(store.saved(), Some(stats));
    }
}
