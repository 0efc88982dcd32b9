//! Persisted record shapes.

use crate::core::config::Difficulty;
use serde::{Deserialize, Serialize};

/// Aggregate counters across all completed games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameStats {
    pub total_games_played: u64,
    pub total_score: u64,
    /// Derived: `total_score / total_games_played`.
    pub average_score: u64,
    pub longest_snake: u64,
    pub best_level: u32,
    /// Cumulative play time in seconds.
    pub play_time: u64,
    /// Unix timestamp of the last completed game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_played_at: Option<i64>,
}

/// Partial update for [`GameStats`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsPatch {
    pub total_games_played: Option<u64>,
    pub total_score: Option<u64>,
    pub longest_snake: Option<u64>,
    pub best_level: Option<u32>,
    pub play_time: Option<u64>,
    pub last_played_at: Option<i64>,
}

impl GameStats {
    /// Apply `patch` and recompute the derived average.
    pub fn merge(&mut self, patch: &StatsPatch) {
        if let Some(v) = patch.total_games_played {
            self.total_games_played = v;
        }
        if let Some(v) = patch.total_score {
            self.total_score = v;
        }
        if let Some(v) = patch.longest_snake {
            self.longest_snake = v;
        }
        if let Some(v) = patch.best_level {
            self.best_level = v;
        }
        if let Some(v) = patch.play_time {
            self.play_time = v;
        }
        if let Some(v) = patch.last_played_at {
            self.last_played_at = Some(v);
        }
        self.average_score = if self.total_games_played > 0 {
            self.total_score / self.total_games_played
        } else {
            0
        };
    }

    /// The patch that folds one finished game into these totals.
    pub fn patch_for(&self, summary: &GameSummary) -> StatsPatch {
        StatsPatch {
            total_games_played: Some(self.total_games_played + 1),
            total_score: Some(self.total_score + u64::from(summary.score)),
            longest_snake: Some(self.longest_snake.max(summary.snake_length as u64)),
            best_level: Some(self.best_level.max(summary.level)),
            play_time: Some(self.play_time + summary.play_time_secs),
            last_played_at: Some(chrono::Utc::now().timestamp()),
        }
    }
}

/// What a finished game contributes to the persisted stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u32,
    pub level: u32,
    pub snake_length: usize,
    pub play_time_secs: u64,
}

/// Player preferences. The core only reads `difficulty`; the rest is for the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub sound_enabled: bool,
    pub show_grid: bool,
    pub animations: bool,
    pub difficulty: Difficulty,
    pub theme: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            show_grid: false,
            animations: true,
            difficulty: Difficulty::Normal,
            theme: "classic".to_string(),
        }
    }
}
