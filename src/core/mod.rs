//! Core game state and logic.

pub mod config;
pub mod constants;
pub mod events;
pub mod machine;
pub mod rules;
pub mod scheduler;
pub mod types;

pub use config::{ConfigError, Difficulty, GameConfig};
pub use events::{CollisionKind, GameEvent};
pub use machine::{GameMachine, SnapshotError};
pub use scheduler::{Clock, ManualClock, SystemClock, TickScheduler};
pub use types::{Direction, GameData, GameState, Position, Snake};
