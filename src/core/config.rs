//! Game configuration and difficulty presets.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Immutable game configuration, supplied once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Side length of the square board.
    pub board_size: i16,
    /// Tick interval at level 1, in milliseconds.
    pub initial_speed_ms: u64,
    /// How much faster each level gets, in milliseconds.
    pub speed_decrement_ms: u64,
    pub points_per_food: u32,
    /// Score needed per level.
    pub score_per_level: u32,
    /// Speed floor, in milliseconds.
    pub min_speed_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            initial_speed_ms: DEFAULT_INITIAL_SPEED_MS,
            speed_decrement_ms: DEFAULT_SPEED_DECREMENT_MS,
            points_per_food: DEFAULT_POINTS_PER_FOOD,
            score_per_level: DEFAULT_SCORE_PER_LEVEL,
            min_speed_ms: DEFAULT_MIN_SPEED_MS,
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the state machine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < MIN_BOARD_SIZE {
            return Err(ConfigError::Invalid(format!(
                "board size {} is below the minimum of {}",
                self.board_size, MIN_BOARD_SIZE
            )));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::Invalid(format!(
                "board size {} is above the maximum of {}",
                self.board_size, MAX_BOARD_SIZE
            )));
        }
        if self.initial_speed_ms == 0 || self.min_speed_ms == 0 {
            return Err(ConfigError::Invalid(
                "speeds must be positive".to_string(),
            ));
        }
        if self.min_speed_ms > self.initial_speed_ms {
            return Err(ConfigError::Invalid(format!(
                "minimum speed {}ms is slower than initial speed {}ms",
                self.min_speed_ms, self.initial_speed_ms
            )));
        }
        if self.points_per_food == 0 || self.score_per_level == 0 {
            return Err(ConfigError::Invalid(
                "points per food and score per level must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Difficulty presets. Board and scoring are shared; pacing differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Difficulty::Normal)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
        }
    }

    /// Parse a CLI spelling (`easy`, `normal`, `hard`), case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "normal" => Some(Self::Normal),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// The game configuration for this difficulty.
    pub fn config(&self) -> GameConfig {
        match self {
            Self::Easy => GameConfig {
                initial_speed_ms: 200,
                speed_decrement_ms: 8,
                min_speed_ms: 80,
                ..GameConfig::default()
            },
            Self::Normal => GameConfig::default(),
            Self::Hard => GameConfig {
                initial_speed_ms: 100,
                speed_decrement_ms: 10,
                min_speed_ms: 40,
                ..GameConfig::default()
            },
        }
    }
}
