//! Pure geometry and rules helpers: movement, bounds, collisions, pacing.

use super::config::GameConfig;
use super::types::{Direction, Position, Snake};
use rand::Rng;

pub fn positions_equal(a: Position, b: Position) -> bool {
    a == b
}

/// True if `pos` lies on a `board_size` x `board_size` grid.
pub fn in_bounds(pos: Position, board_size: i16) -> bool {
    pos.x >= 0 && pos.x < board_size && pos.y >= 0 && pos.y < board_size
}

/// `pos` shifted one cell in `direction`.
pub fn next_position(pos: Position, direction: Direction) -> Position {
    let (dx, dy) = direction.delta();
    Position::new(pos.x + dx, pos.y + dy)
}

/// Only an exact 180-degree reversal is rejected.
pub fn is_valid_direction_change(current: Direction, requested: Direction) -> bool {
    requested != current.opposite()
}

pub fn wall_collision(snake: &Snake, board_size: i16) -> bool {
    !in_bounds(snake.head(), board_size)
}

/// True if the head overlaps any other segment.
pub fn self_collision(snake: &Snake) -> bool {
    let head = snake.head();
    snake.segments.iter().skip(1).any(|&seg| seg == head)
}

pub fn food_collision(snake: &Snake, food: Position) -> bool {
    positions_equal(snake.head(), food)
}

/// Find a random empty cell for food (not occupied by the snake).
///
/// Panics if the snake fills the board: collisions end the game long before
/// that can happen, so reaching it means an invariant was broken.
pub fn random_food_position<R: Rng + ?Sized>(snake: &Snake, board_size: i16, rng: &mut R) -> Position {
    let cells = board_size as usize * board_size as usize;
    assert!(
        snake.len() < cells,
        "no free cell for food: snake of length {} fills a {}x{} board",
        snake.len(),
        board_size,
        board_size
    );
    loop {
        let x = rng.gen_range(0..board_size);
        let y = rng.gen_range(0..board_size);
        let pos = Position::new(x, y);
        if !snake.contains(&pos) {
            return pos;
        }
    }
}

/// Tick interval for `level`, never below the configured floor.
pub fn speed_for_level(level: u32, config: &GameConfig) -> u64 {
    let steps = u64::from(level.saturating_sub(1));
    config
        .initial_speed_ms
        .saturating_sub(steps.saturating_mul(config.speed_decrement_ms))
        .max(config.min_speed_ms)
}

pub fn level_for_score(score: u32, score_per_level: u32) -> u32 {
    score / score_per_level + 1
}
