//! Serpent - grid snake game logic core.
//!
//! The [`GameMachine`] owns all game state and advances it on a polled tick.
//! Presentation layers drive it through its command API and read snapshots
//! and events back out.

pub mod achievements;
pub mod build_info;
pub mod core;
pub mod persistence;

pub use achievements::{Achievement, AchievementEvaluator, AchievementId};
pub use crate::core::{
    CollisionKind, Difficulty, Direction, GameConfig, GameData, GameEvent, GameMachine,
    GameState, Position, Snake, SnapshotError,
};
pub use persistence::{GameStats, JsonFileStore, MemoryStore, Persistence};
