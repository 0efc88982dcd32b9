//! Game data structures.
//!
//! Everything the state machine owns lives here: the snake, the food cell,
//! and the [`GameData`] aggregate that collaborators read as a snapshot.

use super::config::GameConfig;
use super::constants::INITIAL_SNAKE_LENGTH;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) delta for this direction. Screen coordinates: y grows downward.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

/// A position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// The player-controlled snake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments. Head is at the front (index 0).
    pub segments: VecDeque<Position>,
    /// Direction committed by the last tick.
    pub direction: Direction,
    /// Queued direction, committed at the next tick.
    pub next_direction: Direction,
}

impl Snake {
    /// Build a snake from explicit segments, head first, moving in `direction`.
    ///
    /// Panics if `segments` is empty.
    pub fn new(segments: impl IntoIterator<Item = Position>, direction: Direction) -> Self {
        let segments: VecDeque<Position> = segments.into_iter().collect();
        assert!(!segments.is_empty(), "a snake needs at least one segment");
        Self {
            segments,
            direction,
            next_direction: direction,
        }
    }

    /// The starting snake: centered, extending left from the head, moving right.
    pub fn initial(board_size: i16) -> Self {
        let center = board_size / 2;
        Self::new(
            (0..INITIAL_SNAKE_LENGTH as i16).map(|i| Position::new(center - i, center)),
            Direction::Right,
        )
    }

    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn contains(&self, pos: &Position) -> bool {
        self.segments.contains(pos)
    }
}

/// Lifecycle state of a game session.
///
/// A paused game stays in `Playing` with [`GameData::is_paused`] set; the
/// `Paused` variant exists for consumers that want a single flattened value
/// (see [`GameData::display_state`]) and is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Ready,
    Playing,
    Paused,
    GameOver,
}

/// Authoritative game data, exclusively owned by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameData {
    pub snake: Snake,
    pub food: Position,
    pub score: u32,
    pub level: u32,
    pub game_state: GameState,
    /// Only meaningful while `game_state == Playing`.
    pub is_paused: bool,
    /// Best score across sessions (persisted).
    pub best_score: u32,
    /// Milliseconds per tick.
    pub game_speed: u64,
}

impl GameData {
    /// The fixed initial snapshot. Food is a placeholder until the machine places it.
    pub fn initial(config: &GameConfig, best_score: u32) -> Self {
        Self {
            snake: Snake::initial(config.board_size),
            food: Position::new(0, 0),
            score: 0,
            level: 1,
            game_state: GameState::Ready,
            is_paused: false,
            best_score,
            game_speed: config.initial_speed_ms,
        }
    }

    /// Lifecycle state with the pause flag folded in.
    pub fn display_state(&self) -> GameState {
        match self.game_state {
            GameState::Playing if self.is_paused => GameState::Paused,
            other => other,
        }
    }
}
