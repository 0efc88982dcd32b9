//! Achievement system types.

use serde::{Deserialize, Serialize};

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    FirstBite,   // 10 points
    SnackTime,   // 50 points
    Century,     // 100 points
    SerpentLord, // 250 points
    Legend,      // 500 points
}

impl AchievementId {
    /// Stable string id used in the persisted unlocked set.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstBite => "first_bite",
            Self::SnackTime => "snack_time",
            Self::Century => "century",
            Self::SerpentLord => "serpent_lord",
            Self::Legend => "legend",
        }
    }

    pub fn from_str_id(id: &str) -> Option<Self> {
        match id {
            "first_bite" => Some(Self::FirstBite),
            "snack_time" => Some(Self::SnackTime),
            "century" => Some(Self::Century),
            "serpent_lord" => Some(Self::SerpentLord),
            "legend" => Some(Self::Legend),
            _ => None,
        }
    }
}

/// Static definition of an achievement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    /// Score at or above which the achievement unlocks.
    pub threshold: u32,
}

/// An achievement definition joined with its persisted unlocked flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub threshold: u32,
    pub unlocked: bool,
}
