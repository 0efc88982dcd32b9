//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId};

/// All achievement definitions in display order (ascending threshold).
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FirstBite,
        name: "First Bite",
        description: "Score 10 points in a single game",
        threshold: 10,
    },
    AchievementDef {
        id: AchievementId::SnackTime,
        name: "Snack Time",
        description: "Score 50 points in a single game",
        threshold: 50,
    },
    AchievementDef {
        id: AchievementId::Century,
        name: "Century",
        description: "Score 100 points in a single game",
        threshold: 100,
    },
    AchievementDef {
        id: AchievementId::SerpentLord,
        name: "Serpent Lord",
        description: "Score 250 points in a single game",
        threshold: 250,
    },
    AchievementDef {
        id: AchievementId::Legend,
        name: "Legend",
        description: "Score 500 points in a single game",
        threshold: 500,
    },
];

/// Look up an achievement definition by id.
pub fn get_achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|def| def.id == id)
}
