//! Events emitted by the state machine for the presentation layer.

use super::types::{Direction, Position};
use crate::achievements::AchievementId;

/// What ended the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    Wall,
    SelfHit,
}

/// Something observable happened inside the machine.
///
/// The UI drains these after each poll to drive sound, flashes and overlays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    Reset,
    DirectionQueued(Direction),
    Moved { head: Position },
    FoodEaten { score: u32, length: usize },
    LevelUp { level: u32, speed_ms: u64 },
    AchievementUnlocked(AchievementId),
    NewBestScore(u32),
    GameOver { cause: CollisionKind, score: u32 },
}
