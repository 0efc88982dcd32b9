//! Score-driven achievement unlocking.

use super::data::ALL_ACHIEVEMENTS;
use super::types::{Achievement, AchievementDef, AchievementId};
use crate::persistence::{Persistence, PersistenceError};
use tracing::{info, warn};

/// Unlocks achievements as the score crosses their thresholds.
///
/// Holds only the definition table; unlocked flags live in [`Persistence`].
#[derive(Debug, Clone)]
pub struct AchievementEvaluator {
    defs: Vec<AchievementDef>,
}

impl Default for AchievementEvaluator {
    fn default() -> Self {
        Self::new(ALL_ACHIEVEMENTS.to_vec())
    }
}

impl AchievementEvaluator {
    pub fn new(defs: Vec<AchievementDef>) -> Self {
        Self { defs }
    }

    pub fn defs(&self) -> &[AchievementDef] {
        &self.defs
    }

    pub fn is_unlocked(&self, id: AchievementId, persistence: &Persistence) -> bool {
        persistence.unlocked_achievements().contains(id.as_str())
    }

    /// Unlock `id`. Returns true if newly unlocked.
    pub fn unlock(
        &self,
        id: AchievementId,
        persistence: &mut Persistence,
    ) -> Result<bool, PersistenceError> {
        let newly = persistence.add_achievement(id.as_str())?;
        if newly {
            info!(achievement = id.as_str(), "achievement unlocked");
        }
        Ok(newly)
    }

    /// Unlock everything `score` has reached. Returns the newly unlocked ids,
    /// in threshold order. Already-unlocked achievements are skipped, so
    /// re-evaluating the same score returns nothing.
    pub fn evaluate(&self, score: u32, persistence: &mut Persistence) -> Vec<AchievementId> {
        let unlocked = persistence.unlocked_achievements();
        let mut newly = Vec::new();
        for def in &self.defs {
            if score < def.threshold || unlocked.contains(def.id.as_str()) {
                continue;
            }
            match self.unlock(def.id, persistence) {
                Ok(true) => newly.push(def.id),
                Ok(false) => {}
                Err(e) => {
                    warn!(achievement = def.id.as_str(), error = %e, "failed to persist unlock");
                }
            }
        }
        newly
    }

    /// All achievements with their unlocked flags.
    pub fn list(&self, persistence: &Persistence) -> Vec<Achievement> {
        let unlocked = persistence.unlocked_achievements();
        self.defs
            .iter()
            .map(|def| Achievement {
                id: def.id,
                name: def.name,
                description: def.description,
                threshold: def.threshold,
                unlocked: unlocked.contains(def.id.as_str()),
            })
            .collect()
    }

    /// (unlocked, total) counts.
    pub fn progress(&self, persistence: &Persistence) -> (usize, usize) {
        let unlocked = self
            .list(persistence)
            .iter()
            .filter(|a| a.unlocked)
            .count();
        (unlocked, self.defs.len())
    }
}
