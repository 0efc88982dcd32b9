//! The game state machine: lifecycle commands, the tick, and the game-over flush.

use super::config::{ConfigError, GameConfig};
use super::constants::BEST_SCORE_KEY;
use super::events::{CollisionKind, GameEvent};
use super::rules::{
    food_collision, in_bounds, is_valid_direction_change, level_for_score, next_position,
    random_food_position, self_collision, speed_for_level, wall_collision,
};
use super::scheduler::{Clock, SystemClock, TickScheduler};
use super::types::{Direction, GameData, GameState};
use crate::achievements::{Achievement, AchievementEvaluator, AchievementId};
use crate::persistence::{GameStats, GameSummary, Persistence};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::mem;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Reasons [`GameMachine::load_snapshot`] refuses a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("snapshot snake has no segments")]
    EmptySnake,
    #[error("snake segment ({x}, {y}) is outside the {board_size}x{board_size} board")]
    OutOfBounds { x: i16, y: i16, board_size: i16 },
    #[error("snake of length {0} leaves no free cell for food")]
    BoardFull(usize),
}

/// Owns the authoritative [`GameData`] and everything that mutates it.
///
/// Commands issued in a state where they make no sense are silently ignored.
/// All methods run on the caller's thread and never block.
pub struct GameMachine {
    config: GameConfig,
    data: GameData,
    persistence: Persistence,
    evaluator: AchievementEvaluator,
    scheduler: TickScheduler,
    clock: Box<dyn Clock>,
    rng: Box<dyn RngCore>,
    events: Vec<GameEvent>,
    session_started_ms: u64,
    paused_at_ms: Option<u64>,
    paused_total_ms: u64,
    tick_count: u64,
}

impl GameMachine {
    /// Create a machine in `Ready` with the persisted best score loaded.
    pub fn new(config: GameConfig, mut persistence: Persistence) -> Result<Self, ConfigError> {
        config.validate()?;
        persistence.watch(BEST_SCORE_KEY);
        let best_score = persistence.best_score();
        let mut machine = Self {
            data: GameData::initial(&config, best_score),
            config,
            persistence,
            evaluator: AchievementEvaluator::default(),
            scheduler: TickScheduler::default(),
            clock: Box::new(SystemClock::new()),
            rng: Box::new(StdRng::from_entropy()),
            events: Vec::new(),
            session_started_ms: 0,
            paused_at_ms: None,
            paused_total_ms: 0,
            tick_count: 0,
        };
        machine.place_food();
        Ok(machine)
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Replace the random source. Food is re-placed with the new source.
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self.place_food();
        self
    }

    pub fn with_evaluator(mut self, evaluator: AchievementEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Begin a fresh game. Valid from `Ready` or `GameOver`.
    pub fn start(&mut self) {
        if !matches!(self.data.game_state, GameState::Ready | GameState::GameOver) {
            return;
        }
        self.reinitialize();
        self.data.game_state = GameState::Playing;

        let now = self.clock.now_ms();
        self.session_started_ms = now;
        self.scheduler.start(now);

        info!(best_score = self.data.best_score, "game started");
        self.events.push(GameEvent::Started);
    }

    /// Pause a running game. Valid only while playing and not paused.
    pub fn pause(&mut self) {
        if !self.is_playing() {
            return;
        }
        self.data.is_paused = true;
        self.paused_at_ms = Some(self.clock.now_ms());
        self.scheduler.stop();

        info!(score = self.data.score, "game paused");
        self.events.push(GameEvent::Paused);
    }

    /// Resume a paused game. The next tick comes a full interval from now.
    pub fn resume(&mut self) {
        if !self.is_paused() {
            return;
        }
        let now = self.clock.now_ms();
        if let Some(paused_at) = self.paused_at_ms.take() {
            self.paused_total_ms += now.saturating_sub(paused_at);
        }
        self.data.is_paused = false;
        self.scheduler.start(now);

        info!("game resumed");
        self.events.push(GameEvent::Resumed);
    }

    /// Abandon whatever is happening and return to `Ready` with fresh data.
    pub fn reset(&mut self) {
        self.scheduler.stop();
        self.reinitialize();

        info!("game reset");
        self.events.push(GameEvent::Reset);
    }

    /// Queue a turn for the next tick.
    ///
    /// Checked against the committed direction, so two quick presses can never
    /// fold the snake back onto itself within one tick. The last valid request
    /// before a tick wins.
    pub fn change_direction(&mut self, requested: Direction) {
        if !self.is_playing() {
            return;
        }
        if !is_valid_direction_change(self.data.snake.direction, requested) {
            return;
        }
        if self.data.snake.next_direction != requested {
            self.data.snake.next_direction = requested;
            self.events.push(GameEvent::DirectionQueued(requested));
        }
    }

    /// Replace the game data wholesale (e.g. restoring a snapshot).
    ///
    /// A stored `Paused` state is folded into `Playing` with the pause flag
    /// set. Food that is off the board or under the snake is re-placed. The
    /// schedule is armed if the snapshot is an unpaused running game.
    pub fn load_snapshot(&mut self, mut data: GameData) -> Result<(), SnapshotError> {
        let board_size = self.config.board_size;
        if data.snake.is_empty() {
            return Err(SnapshotError::EmptySnake);
        }
        if let Some(seg) = data.snake.segments.iter().find(|&&seg| !in_bounds(seg, board_size)) {
            return Err(SnapshotError::OutOfBounds {
                x: seg.x,
                y: seg.y,
                board_size,
            });
        }
        let cells = board_size as usize * board_size as usize;
        if data.snake.len() >= cells {
            return Err(SnapshotError::BoardFull(data.snake.len()));
        }

        if data.game_state == GameState::Paused {
            data.game_state = GameState::Playing;
            data.is_paused = true;
        }
        if data.game_state != GameState::Playing {
            data.is_paused = false;
        }

        let now = self.clock.now_ms();
        self.data = data;
        if !in_bounds(self.data.food, board_size) || self.data.snake.contains(&self.data.food) {
            debug!("snapshot food unusable, re-placing");
            self.place_food();
        }
        self.session_started_ms = now;
        self.paused_total_ms = 0;
        self.paused_at_ms = if self.is_paused() { Some(now) } else { None };
        if self.is_playing() {
            self.scheduler.start(now);
        } else {
            self.scheduler.stop();
        }
        Ok(())
    }

    // =========================================================================
    // Scheduling
    // =========================================================================

    /// Fire a tick if a full `game_speed` interval has passed since the last
    /// move. Call at a fine fixed interval. Returns true if a tick ran.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now_ms();
        if !self.scheduler.is_due(now, self.data.game_speed) {
            return false;
        }
        self.scheduler.mark_moved(now);
        self.tick();
        true
    }

    /// Milliseconds until the next tick is due, or `None` if nothing is scheduled.
    pub fn time_until_next_tick(&self) -> Option<u64> {
        self.scheduler
            .time_until_due(self.clock.now_ms(), self.data.game_speed)
    }

    /// Advance the game one step, ignoring timing. No-op unless playing.
    pub fn tick(&mut self) {
        if !self.is_playing() {
            return;
        }
        self.tick_count += 1;

        let direction = self.data.snake.next_direction;
        let new_head = next_position(self.data.snake.head(), direction);

        // Probe with the full pre-move body: the tail cell still counts as occupied
        let mut advanced = self.data.snake.clone();
        advanced.segments.push_front(new_head);
        advanced.direction = direction;

        if wall_collision(&advanced, self.config.board_size) {
            self.game_over(CollisionKind::Wall);
            return;
        }
        if self_collision(&advanced) {
            self.game_over(CollisionKind::SelfHit);
            return;
        }

        if food_collision(&advanced, self.data.food) {
            self.data.snake = advanced;
            self.eat();
        } else {
            advanced.segments.pop_back();
            self.data.snake = advanced;
        }

        debug!(
            tick = self.tick_count,
            x = new_head.x,
            y = new_head.y,
            "snake moved"
        );
        self.events.push(GameEvent::Moved { head: new_head });
    }

    fn eat(&mut self) {
        self.data.score += self.config.points_per_food;
        self.events.push(GameEvent::FoodEaten {
            score: self.data.score,
            length: self.data.snake.len(),
        });

        let level = level_for_score(self.data.score, self.config.score_per_level);
        let leveled_up = level > self.data.level;
        self.data.level = level;
        self.data.game_speed = speed_for_level(level, &self.config);
        if leveled_up {
            info!(level, speed_ms = self.data.game_speed, "level up");
            self.events.push(GameEvent::LevelUp {
                level,
                speed_ms: self.data.game_speed,
            });
        }

        self.place_food();

        for id in self.evaluator.evaluate(self.data.score, &mut self.persistence) {
            self.events.push(GameEvent::AchievementUnlocked(id));
        }
    }

    fn game_over(&mut self, cause: CollisionKind) {
        self.data.game_state = GameState::GameOver;
        self.scheduler.stop();

        info!(score = self.data.score, ?cause, "game over");
        self.events.push(GameEvent::GameOver {
            cause,
            score: self.data.score,
        });
        self.flush_session();
    }

    /// One-time write of the finished game to persistence. Failures are logged.
    ///
    /// External best-score changes are picked up first so the in-memory best
    /// ends up equal to the stored one.
    fn flush_session(&mut self) {
        self.sync_external_changes();

        let score = self.data.score;
        match self.persistence.update_best_score(score) {
            Ok(newly) => {
                if newly {
                    self.events.push(GameEvent::NewBestScore(score));
                }
                self.data.best_score = self.persistence.best_score();
            }
            Err(e) => {
                warn!(error = %e, "failed to persist best score");
                if score > self.data.best_score {
                    self.data.best_score = score;
                    self.events.push(GameEvent::NewBestScore(score));
                }
            }
        }

        let summary = GameSummary {
            score,
            level: self.data.level,
            snake_length: self.data.snake.len(),
            play_time_secs: self.play_time_ms() / 1000,
        };
        if let Err(e) = self.persistence.record_game(&summary) {
            warn!(error = %e, "failed to persist game stats");
        }
    }

    /// Fresh initial snapshot carrying over the best score. State is `Ready`.
    fn reinitialize(&mut self) {
        self.data = GameData::initial(&self.config, self.data.best_score);
        self.paused_at_ms = None;
        self.paused_total_ms = 0;
        self.tick_count = 0;
        self.place_food();
    }

    fn place_food(&mut self) {
        self.data.food = random_food_position(&self.data.snake, self.config.board_size, &mut self.rng);
    }

    /// Play time of the current session, excluding pauses.
    fn play_time_ms(&self) -> u64 {
        let now = self.clock.now_ms();
        let paused_now = self
            .paused_at_ms
            .map(|at| now.saturating_sub(at))
            .unwrap_or(0);
        now.saturating_sub(self.session_started_ms)
            .saturating_sub(self.paused_total_ms + paused_now)
    }

    /// Adopt a best score written by another session.
    pub fn sync_external_changes(&mut self) {
        for change in self.persistence.poll_changes() {
            if change.key == BEST_SCORE_KEY {
                let best = change.parse::<u32>().unwrap_or(0);
                debug!(best, "best score changed externally");
                self.data.best_score = best;
            }
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Read-only snapshot of the game data.
    pub fn data(&self) -> &GameData {
        &self.data
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_game_over(&self) -> bool {
        self.data.game_state == GameState::GameOver
    }

    /// Running and not paused.
    pub fn is_playing(&self) -> bool {
        self.data.game_state == GameState::Playing && !self.data.is_paused
    }

    pub fn is_paused(&self) -> bool {
        self.data.game_state == GameState::Playing && self.data.is_paused
    }

    /// Ticks advanced since the last start or reset.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    pub fn stats(&self) -> GameStats {
        self.persistence.stats()
    }

    pub fn achievements(&self) -> Vec<Achievement> {
        self.evaluator.list(&self.persistence)
    }

    pub fn is_achievement_unlocked(&self, id: AchievementId) -> bool {
        self.evaluator.is_unlocked(id, &self.persistence)
    }

    /// Unlock `id` directly. Returns true if newly unlocked.
    pub fn unlock_achievement(&mut self, id: AchievementId) -> bool {
        match self.evaluator.unlock(id, &mut self.persistence) {
            Ok(true) => {
                self.events.push(GameEvent::AchievementUnlocked(id));
                true
            }
            Ok(false) => false,
            Err(e) => {
                warn!(achievement = id.as_str(), error = %e, "failed to persist unlock");
                false
            }
        }
    }

    pub fn persistence(&self) -> &Persistence {
        &self.persistence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scheduler::ManualClock;
    use crate::core::types::{Position, Snake};
    use rand_chacha::ChaCha8Rng;

    fn machine() -> (GameMachine, ManualClock) {
        let clock = ManualClock::new();
        let machine = GameMachine::new(GameConfig::default(), Persistence::in_memory())
            .unwrap()
            .with_clock(clock.clone())
            .with_rng(ChaCha8Rng::seed_from_u64(42));
        (machine, clock)
    }

    /// Started game with the food parked in a far corner.
    fn started() -> (GameMachine, ManualClock) {
        let (mut m, clock) = machine();
        m.start();
        let mut data = m.data().clone();
        data.food = Position::new(0, 0);
        m.load_snapshot(data).unwrap();
        (m, clock)
    }

    fn with_snake(m: &mut GameMachine, cells: &[(i16, i16)], direction: Direction, food: (i16, i16)) {
        let mut data = m.data().clone();
        data.snake = Snake::new(cells.iter().map(|&(x, y)| Position::new(x, y)), direction);
        data.food = Position::new(food.0, food.1);
        m.load_snapshot(data).unwrap();
    }

    #[test]
    fn test_new_machine_is_ready() {
        let (m, _) = machine();
        assert_eq!(m.data().game_state, GameState::Ready);
        assert!(!m.is_playing());
        assert!(!m.is_paused());
        assert!(!m.is_game_over());
        assert!(!m.data().snake.contains(&m.data().food));
    }

    #[test]
    fn test_start_sets_playing() {
        let (mut m, _) = machine();
        m.start();
        assert!(m.is_playing());
        assert_eq!(m.data().score, 0);
        assert_eq!(m.data().level, 1);
        assert_eq!(m.data().game_speed, 150);
        assert_eq!(m.data().snake.head(), Position::new(10, 10));
        assert_eq!(m.drain_events(), vec![GameEvent::Started]);
    }

    #[test]
    fn test_start_while_playing_is_noop() {
        let (mut m, _) = started();
        m.tick();
        let before = m.data().clone();
        m.start();
        assert_eq!(m.data(), &before);
    }

    #[test]
    fn test_pause_from_ready_is_noop() {
        let (mut m, _) = machine();
        m.pause();
        assert_eq!(m.data().game_state, GameState::Ready);
        assert!(!m.data().is_paused);
        assert!(m.drain_events().is_empty());
    }

    #[test]
    fn test_pause_and_resume() {
        let (mut m, _) = started();
        m.pause();
        assert!(m.is_paused());
        assert_eq!(m.data().game_state, GameState::Playing);
        assert!(!m.is_playing());

        m.pause(); // already paused
        m.resume();
        assert!(m.is_playing());
        m.resume(); // not paused
        assert!(m.is_playing());
    }

    #[test]
    fn test_resume_without_pause_is_noop() {
        let (mut m, _) = machine();
        m.resume();
        assert_eq!(m.data().game_state, GameState::Ready);
    }

    #[test]
    fn test_reset_returns_to_ready() {
        let (mut m, _) = started();
        m.tick();
        m.reset();
        assert_eq!(m.data().game_state, GameState::Ready);
        assert_eq!(m.data().snake.head(), Position::new(10, 10));
        assert_eq!(m.time_until_next_tick(), None);
    }

    #[test]
    fn test_change_direction_rejects_reversal() {
        let (mut m, _) = started();
        m.change_direction(Direction::Left);
        assert_eq!(m.data().snake.next_direction, Direction::Right);
        m.change_direction(Direction::Up);
        assert_eq!(m.data().snake.next_direction, Direction::Up);
    }

    #[test]
    fn test_change_direction_checks_committed_direction() {
        let (mut m, _) = started();
        // Up is queued; Left is still a reversal of the committed Right
        m.change_direction(Direction::Up);
        m.change_direction(Direction::Left);
        assert_eq!(m.data().snake.next_direction, Direction::Up);
        // Down is valid against Right and overwrites the queued Up
        m.change_direction(Direction::Down);
        assert_eq!(m.data().snake.next_direction, Direction::Down);
    }

    #[test]
    fn test_change_direction_ignored_when_paused_or_ready() {
        let (mut m, _) = machine();
        m.change_direction(Direction::Up);
        assert_eq!(m.data().snake.next_direction, Direction::Right);

        m.start();
        m.pause();
        m.change_direction(Direction::Up);
        assert_eq!(m.data().snake.next_direction, Direction::Right);
    }

    #[test]
    fn test_tick_moves_and_commits_direction() {
        let (mut m, _) = started();
        m.change_direction(Direction::Down);
        m.tick();
        assert_eq!(m.data().snake.head(), Position::new(10, 11));
        assert_eq!(m.data().snake.direction, Direction::Down);
        assert_eq!(m.data().snake.len(), 3);
    }

    #[test]
    fn test_tick_onto_food_grows_and_scores() {
        let (mut m, _) = started();
        with_snake(&mut m, &[(10, 10), (9, 10), (8, 10)], Direction::Right, (11, 10));
        m.tick();

        let expected: Vec<Position> = [(11, 10), (10, 10), (9, 10), (8, 10)]
            .iter()
            .map(|&(x, y)| Position::new(x, y))
            .collect();
        assert_eq!(m.data().snake.segments.iter().copied().collect::<Vec<_>>(), expected);
        assert_eq!(m.data().score, 10);
        assert!(!m.data().snake.contains(&m.data().food));
    }

    #[test]
    fn test_level_up_speeds_game() {
        let (mut m, _) = started();
        let mut data = m.data().clone();
        data.score = 40;
        data.food = Position::new(11, 10);
        m.load_snapshot(data).unwrap();

        m.tick();
        assert_eq!(m.data().score, 50);
        assert_eq!(m.data().level, 2);
        assert_eq!(m.data().game_speed, 140);
        assert!(m
            .drain_events()
            .contains(&GameEvent::LevelUp { level: 2, speed_ms: 140 }));
    }

    #[test]
    fn test_wall_collision_ends_game_without_moving() {
        let (mut m, _) = started();
        with_snake(&mut m, &[(0, 5), (1, 5), (2, 5)], Direction::Left, (10, 10));
        let before = m.data().snake.clone();

        m.tick();

        assert!(m.is_game_over());
        assert_eq!(m.data().snake, before);
        assert_eq!(m.time_until_next_tick(), None);
    }

    #[test]
    fn test_moving_into_vacating_tail_is_a_collision() {
        let (mut m, _) = started();
        // Head (5,5) moving down into (5,6), which the tail occupies this instant
        with_snake(
            &mut m,
            &[(5, 5), (6, 5), (6, 6), (5, 6)],
            Direction::Left,
            (0, 0),
        );
        m.change_direction(Direction::Down);
        m.tick();
        assert!(m.is_game_over());
        assert!(m.drain_events().contains(&GameEvent::GameOver {
            cause: CollisionKind::SelfHit,
            score: 0
        }));
    }

    #[test]
    fn test_game_over_flushes_stats_once() {
        let (mut m, clock) = started();
        clock.advance(4_000);
        with_snake(&mut m, &[(19, 3), (18, 3), (17, 3)], Direction::Right, (0, 0));
        let mut data = m.data().clone();
        data.score = 30;
        m.load_snapshot(data).unwrap();
        clock.advance(5_000);

        m.tick();
        m.tick(); // ignored after game over

        let stats = m.stats();
        assert_eq!(stats.total_games_played, 1);
        assert_eq!(stats.total_score, 30);
        assert_eq!(stats.longest_snake, 3);
        assert_eq!(stats.play_time, 5);
        assert_eq!(m.data().best_score, 30);
        assert_eq!(m.persistence().best_score(), 30);
    }

    #[test]
    fn test_poll_respects_game_speed() {
        let (mut m, clock) = started();
        clock.advance(149);
        assert!(!m.poll());
        clock.advance(1);
        assert!(m.poll());
        assert_eq!(m.data().snake.head(), Position::new(11, 10));
        // Reference moved: next tick another full interval later
        clock.advance(100);
        assert!(!m.poll());
        assert_eq!(m.time_until_next_tick(), Some(50));
    }

    #[test]
    fn test_poll_does_nothing_when_paused() {
        let (mut m, clock) = started();
        m.pause();
        clock.advance(10_000);
        assert!(!m.poll());
    }

    #[test]
    fn test_resume_waits_full_interval() {
        let (mut m, clock) = started();
        clock.advance(140);
        m.pause();
        clock.advance(5_000);
        m.resume();
        clock.advance(100);
        assert!(!m.poll(), "no catch-up tick right after resume");
        clock.advance(50);
        assert!(m.poll());
    }

    #[test]
    fn test_play_time_excludes_pauses() {
        let (mut m, clock) = started();
        clock.advance(3_000);
        m.pause();
        clock.advance(60_000);
        m.resume();
        clock.advance(2_000);
        assert_eq!(m.play_time_ms(), 5_000);
    }

    #[test]
    fn test_restart_after_game_over_keeps_best() {
        let (mut m, _) = started();
        let mut data = m.data().clone();
        data.score = 70;
        data.snake = Snake::new([Position::new(0, 0), Position::new(1, 0)], Direction::Left);
        m.load_snapshot(data).unwrap();
        m.tick();
        assert!(m.is_game_over());

        m.start();
        assert!(m.is_playing());
        assert_eq!(m.data().score, 0);
        assert_eq!(m.data().best_score, 70);
    }

    #[test]
    fn test_unlock_achievement_passthrough() {
        let (mut m, _) = machine();
        assert!(m.unlock_achievement(AchievementId::Legend));
        assert!(!m.unlock_achievement(AchievementId::Legend));
        assert!(m.is_achievement_unlocked(AchievementId::Legend));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        for config in [
            GameConfig {
                board_size: 0,
                ..GameConfig::default()
            },
            GameConfig {
                score_per_level: 0,
                ..GameConfig::default()
            },
        ] {
            let result = GameMachine::new(config, Persistence::in_memory());
            assert!(matches!(result, Err(ConfigError::Invalid(_))));
        }
    }

    #[test]
    fn test_paused_snapshot_is_folded_into_playing() {
        let (mut m, clock) = started();
        let mut data = m.data().clone();
        data.game_state = GameState::Paused;
        data.is_paused = false;
        m.load_snapshot(data).unwrap();

        assert_eq!(m.data().game_state, GameState::Playing);
        assert!(m.is_paused());
        assert_eq!(m.data().display_state(), GameState::Paused);

        clock.advance(1_000);
        assert!(!m.poll());
        m.resume();
        assert!(m.is_playing());
        clock.advance(150);
        assert!(m.poll());
    }

    #[test]
    fn test_pause_flag_cleared_outside_playing() {
        let (mut m, _) = machine();
        let mut data = m.data().clone();
        data.is_paused = true;
        m.load_snapshot(data).unwrap();
        assert!(!m.data().is_paused);
        m.start();
        assert!(m.is_playing());
    }

    #[test]
    fn test_snapshot_food_on_snake_is_replaced() {
        let (mut m, _) = started();
        let mut data = m.data().clone();
        data.food = data.snake.head();
        m.load_snapshot(data).unwrap();
        assert!(!m.data().snake.contains(&m.data().food));

        let mut data = m.data().clone();
        data.food = Position::new(-3, 40);
        m.load_snapshot(data).unwrap();
        assert!(in_bounds(m.data().food, 20));
    }

    #[test]
    fn test_snapshot_out_of_bounds_snake_rejected() {
        let (mut m, _) = started();
        let before = m.data().clone();
        let mut data = before.clone();
        data.snake = Snake::new([Position::new(20, 3), Position::new(19, 3)], Direction::Right);

        assert_eq!(
            m.load_snapshot(data),
            Err(SnapshotError::OutOfBounds {
                x: 20,
                y: 3,
                board_size: 20
            })
        );
        assert_eq!(m.data(), &before);

        let mut empty = before.clone();
        empty.snake.segments.clear();
        assert_eq!(m.load_snapshot(empty), Err(SnapshotError::EmptySnake));
    }
}
