//! Tick scheduling.
//!
//! The driver polls [`crate::GameMachine::poll`] at a fine fixed interval; the
//! scheduler decides whether a full `game_speed` interval has elapsed since the
//! last committed move. Changing the speed never requires re-arming a timer.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic millisecond time source.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall-clock time measured from when the clock was created.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for deterministic tests. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Start/stop state of the tick schedule plus the last-move reference.
#[derive(Debug, Clone, Default)]
pub struct TickScheduler {
    running: bool,
    last_move_ms: u64,
}

impl TickScheduler {
    /// Arm the schedule. The next tick is due a full interval after `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.running = true;
        self.last_move_ms = now_ms;
    }

    /// Disarm the schedule. No tick fires until the next `start`.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True if a tick should fire at `now_ms` for the given interval.
    pub fn is_due(&self, now_ms: u64, interval_ms: u64) -> bool {
        self.running && now_ms.saturating_sub(self.last_move_ms) >= interval_ms
    }

    /// Record that a move was committed at `now_ms`.
    pub fn mark_moved(&mut self, now_ms: u64) {
        self.last_move_ms = now_ms;
    }

    /// Milliseconds until the next tick is due, or `None` when stopped.
    pub fn time_until_due(&self, now_ms: u64, interval_ms: u64) -> Option<u64> {
        if !self.running {
            return None;
        }
        let elapsed = now_ms.saturating_sub(self.last_move_ms);
        Some(interval_ms.saturating_sub(elapsed))
    }
}
