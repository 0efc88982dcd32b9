//! Terminal presentation of the game.

pub mod snake_scene;

use ratatui::style::Color;
use serpent::{AchievementId, CollisionKind, GameEvent};
use snake_scene::Banner;

/// Turn a machine event into a side-panel banner, if it deserves one.
pub fn banner_for(event: &GameEvent) -> Option<Banner> {
    let (text, color) = match event {
        GameEvent::LevelUp { level, .. } => (format!("Level {}!", level), Color::LightCyan),
        GameEvent::NewBestScore(score) => (format!("New best: {}!", score), Color::Yellow),
        GameEvent::AchievementUnlocked(id) => (
            format!("Unlocked: {}", achievement_name(*id)),
            Color::LightMagenta,
        ),
        GameEvent::GameOver { cause, score } => {
            let how = match cause {
                CollisionKind::Wall => "Hit the wall",
                CollisionKind::SelfHit => "Bit yourself",
            };
            (format!("{} - {} points", how, score), Color::Red)
        }
        _ => return None,
    };
    Some(Banner { text, color })
}

fn achievement_name(id: AchievementId) -> &'static str {
    serpent::achievements::get_achievement_def(id)
        .map(|def| def.name)
        .unwrap_or("achievement")
}
