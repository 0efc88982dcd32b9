// Board and pacing defaults
pub const DEFAULT_BOARD_SIZE: i16 = 20;
pub const DEFAULT_INITIAL_SPEED_MS: u64 = 150;
pub const DEFAULT_SPEED_DECREMENT_MS: u64 = 10;
pub const DEFAULT_MIN_SPEED_MS: u64 = 50;

// Scoring
pub const DEFAULT_POINTS_PER_FOOD: u32 = 10;
pub const DEFAULT_SCORE_PER_LEVEL: u32 = 50;

// Starting snake
pub const INITIAL_SNAKE_LENGTH: usize = 3;

// Smallest board that fits the starting snake plus a free cell for food
pub const MIN_BOARD_SIZE: i16 = 5;
// Largest board the terminal renderer lays out (two columns per cell)
pub const MAX_BOARD_SIZE: i16 = 100;

// Scheduler polling granularity (~60 polls per second)
pub const POLL_INTERVAL_MS: u64 = 16;

// Persistence keys
pub const BEST_SCORE_KEY: &str = "serpent.best_score";
pub const STATS_KEY: &str = "serpent.stats";
pub const ACHIEVEMENTS_KEY: &str = "serpent.achievements";
pub const SETTINGS_KEY: &str = "serpent.settings";

// Save directory under the home directory
pub const SAVE_DIR_NAME: &str = ".serpent";
pub const LOG_FILE_NAME: &str = "serpent.log";
