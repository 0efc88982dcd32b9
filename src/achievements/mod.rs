//! Achievement system module.
//!
//! Achievements unlock when a single game's score reaches a threshold. The
//! unlocked set is persisted through [`crate::persistence::Persistence`].

pub mod data;
pub mod evaluator;
pub mod types;

pub use data::{get_achievement_def, ALL_ACHIEVEMENTS};
pub use evaluator::AchievementEvaluator;
pub use types::{Achievement, AchievementDef, AchievementId};
