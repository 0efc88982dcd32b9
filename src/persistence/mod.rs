//! Durable key-value persistence for best score, stats, achievements and settings.
//!
//! [`Persistence`] wraps a [`KeyValueStore`] backend with typed JSON access.
//! Reads never fail: a missing, unreadable or undecodable value falls back to
//! the caller's default. Writes report errors so the caller can decide whether
//! to log and carry on.

pub mod records;
pub mod store;

pub use records::{GameStats, GameSummary, Settings, StatsPatch};
pub use store::{save_dir, JsonFileStore, KeyValueStore, MemoryStore};

use crate::core::constants::{ACHIEVEMENTS_KEY, BEST_SCORE_KEY, SETTINGS_KEY, STATS_KEY};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::io;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not determine home directory")]
    NoHomeDir,
}

/// A watched key changed outside this [`Persistence`] instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreChange {
    pub key: String,
    /// New raw value; `None` if the key was removed.
    pub value: Option<String>,
}

impl StoreChange {
    /// Decode the new value, if present and valid.
    pub fn parse<T: DeserializeOwned>(&self) -> Option<T> {
        self.value
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
    }
}

/// Typed facade over a [`KeyValueStore`].
pub struct Persistence {
    store: Box<dyn KeyValueStore>,
    /// Last raw value seen for each watched key.
    watched: HashMap<String, Option<String>>,
}

impl Persistence {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            watched: HashMap::new(),
        }
    }

    /// Persistence with no durable backend.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Read `key`, falling back to `default` on absence or any failure.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key, error = %e, "stored value is corrupt, using default");
                    default
                }
            },
            Ok(None) => default,
            Err(e) => {
                warn!(key, error = %e, "read failed, using default");
                default
            }
        }
    }

    pub fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string_pretty(value)?;
        self.store.set(key, &raw)?;
        if let Some(seen) = self.watched.get_mut(key) {
            *seen = Some(raw);
        }
        debug!(key, "persisted");
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.store.remove(key)?;
        if let Some(seen) = self.watched.get_mut(key) {
            *seen = None;
        }
        Ok(())
    }

    /// Start watching `key` for changes made by other sessions.
    pub fn watch(&mut self, key: &str) {
        let current = self.store.get(key).unwrap_or_else(|e| {
            warn!(key, error = %e, "read failed while starting watch");
            None
        });
        self.watched.insert(key.to_string(), current);
    }

    /// Report watched keys whose stored value changed since the last poll.
    /// Writes made through this instance are not reported.
    pub fn poll_changes(&mut self) -> Vec<StoreChange> {
        let mut changes = Vec::new();
        for (key, seen) in self.watched.iter_mut() {
            let current = match self.store.get(key) {
                Ok(v) => v,
                Err(e) => {
                    warn!(key = key.as_str(), error = %e, "read failed while polling changes");
                    continue;
                }
            };
            if current != *seen {
                *seen = current.clone();
                changes.push(StoreChange {
                    key: key.clone(),
                    value: current,
                });
            }
        }
        changes
    }

    // =========================================================================
    // Best score
    // =========================================================================

    pub fn best_score(&self) -> u32 {
        self.read(BEST_SCORE_KEY, 0)
    }

    /// Store `score` if it beats the current best. Returns true if it did.
    pub fn update_best_score(&mut self, score: u32) -> Result<bool, PersistenceError> {
        if score <= self.best_score() {
            return Ok(false);
        }
        self.write(BEST_SCORE_KEY, &score)?;
        Ok(true)
    }

    // =========================================================================
    // Stats
    // =========================================================================

    pub fn stats(&self) -> GameStats {
        self.read(STATS_KEY, GameStats::default())
    }

    /// Merge `patch` into the stored stats and return the result.
    pub fn update_stats(&mut self, patch: &StatsPatch) -> Result<GameStats, PersistenceError> {
        let mut stats = self.stats();
        stats.merge(patch);
        self.write(STATS_KEY, &stats)?;
        Ok(stats)
    }

    /// Fold one finished game into the stored stats.
    pub fn record_game(&mut self, summary: &GameSummary) -> Result<GameStats, PersistenceError> {
        let patch = self.stats().patch_for(summary);
        self.update_stats(&patch)
    }

    // =========================================================================
    // Achievements
    // =========================================================================

    pub fn unlocked_achievements(&self) -> BTreeSet<String> {
        self.read(ACHIEVEMENTS_KEY, BTreeSet::new())
    }

    /// Add `id` to the unlocked set. Returns true if it was not there before.
    pub fn add_achievement(&mut self, id: &str) -> Result<bool, PersistenceError> {
        let mut unlocked = self.unlocked_achievements();
        if !unlocked.insert(id.to_string()) {
            return Ok(false);
        }
        self.write(ACHIEVEMENTS_KEY, &unlocked)?;
        Ok(true)
    }

    // =========================================================================
    // Settings
    // =========================================================================

    pub fn settings(&self) -> Settings {
        self.read(SETTINGS_KEY, Settings::default())
    }

    pub fn save_settings(&mut self, settings: &Settings) -> Result<(), PersistenceError> {
        self.write(SETTINGS_KEY, settings)
    }

    /// Forget best score, stats and achievements. Settings are kept.
    pub fn reset_progress(&mut self) -> Result<(), PersistenceError> {
        self.remove(BEST_SCORE_KEY)?;
        self.remove(STATS_KEY)?;
        self.remove(ACHIEVEMENTS_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that fails every operation.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied").into())
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), PersistenceError> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied").into())
        }
        fn remove(&mut self, _key: &str) -> Result<(), PersistenceError> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied").into())
        }
    }

    #[test]
    fn test_best_score_roundtrip() {
        let mut p = Persistence::in_memory();
        assert_eq!(p.read(BEST_SCORE_KEY, 0u32), 0);
        p.write(BEST_SCORE_KEY, &120u32).unwrap();
        assert_eq!(p.read(BEST_SCORE_KEY, 0u32), 120);
    }

    #[test]
    fn test_update_best_score_only_if_greater() {
        let mut p = Persistence::in_memory();
        assert!(p.update_best_score(50).unwrap());
        assert!(!p.update_best_score(50).unwrap());
        assert!(!p.update_best_score(10).unwrap());
        assert!(p.update_best_score(60).unwrap());
        assert_eq!(p.best_score(), 60);
    }

    #[test]
    fn test_update_best_score_zero_is_not_a_record() {
        let mut p = Persistence::in_memory();
        assert!(!p.update_best_score(0).unwrap());
        assert_eq!(p.best_score(), 0);
    }

    #[test]
    fn test_corrupt_value_falls_back_to_default() {
        let mut store = MemoryStore::new();
        store.set(BEST_SCORE_KEY, "not json").unwrap();
        let p = Persistence::new(store);
        assert_eq!(p.best_score(), 0);
    }

    #[test]
    fn test_broken_backend_reads_default_and_reports_writes() {
        let mut p = Persistence::new(BrokenStore);
        assert_eq!(p.best_score(), 0);
        assert_eq!(p.stats(), GameStats::default());
        assert!(p.update_best_score(10).is_err());
        assert!(p.poll_changes().is_empty());
    }

    #[test]
    fn test_record_game_twice() {
        let mut p = Persistence::in_memory();
        p.record_game(&GameSummary {
            score: 30,
            level: 1,
            snake_length: 6,
            play_time_secs: 20,
        })
        .unwrap();
        let stats = p
            .record_game(&GameSummary {
                score: 70,
                level: 2,
                snake_length: 10,
                play_time_secs: 40,
            })
            .unwrap();
        assert_eq!(stats.total_games_played, 2);
        assert_eq!(stats.total_score, 100);
        assert_eq!(stats.average_score, 50);
        assert_eq!(stats.longest_snake, 10);
        assert_eq!(stats.best_level, 2);
        assert_eq!(stats.play_time, 60);
        assert_eq!(p.stats(), stats);
    }

    #[test]
    fn test_add_achievement_is_idempotent() {
        let mut p = Persistence::in_memory();
        assert!(p.add_achievement("century").unwrap());
        assert!(!p.add_achievement("century").unwrap());
        assert_eq!(p.unlocked_achievements().len(), 1);
    }

    #[test]
    fn test_remove_and_reset_progress() {
        let mut p = Persistence::in_memory();
        p.update_best_score(40).unwrap();
        p.add_achievement("first_bite").unwrap();
        p.save_settings(&Settings {
            show_grid: true,
            ..Default::default()
        })
        .unwrap();

        p.reset_progress().unwrap();

        assert_eq!(p.best_score(), 0);
        assert!(p.unlocked_achievements().is_empty());
        assert!(p.settings().show_grid);
    }

    #[test]
    fn test_poll_changes_reports_external_writes_only() {
        let store = MemoryStore::new();
        let mut ours = Persistence::new(store.clone());
        let mut theirs = Persistence::new(store);
        ours.watch(BEST_SCORE_KEY);

        ours.write(BEST_SCORE_KEY, &10u32).unwrap();
        assert!(ours.poll_changes().is_empty());

        theirs.write(BEST_SCORE_KEY, &90u32).unwrap();
        let changes = ours.poll_changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].key, BEST_SCORE_KEY);
        assert_eq!(changes[0].parse::<u32>(), Some(90));

        // Reported once
        assert!(ours.poll_changes().is_empty());

        theirs.remove(BEST_SCORE_KEY).unwrap();
        let changes = ours.poll_changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].value, None);
    }
}
