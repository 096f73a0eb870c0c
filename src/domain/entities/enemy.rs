//! Enemy entity - an opponent produced for a battle

use crate::domain::value_objects::{EnemyStats, EnemyTier};

/// An enemy ready to be fought
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEnemy {
    pub name: String,
    pub description: String,
    pub stats: EnemyStats,
}

impl GeneratedEnemy {
    pub const FALLBACK_DESCRIPTION: &'static str = "Um inimigo formidável da biblioteca";

    pub fn new(name: impl Into<String>, description: impl Into<String>, stats: EnemyStats) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            stats,
        }
    }

    /// Static enemy used when generation fails.
    ///
    /// Always uses the regular base stats, without jitter, even for bosses.
    pub fn fallback(enemy_type: &str) -> Self {
        Self::new(
            enemy_type,
            Self::FALLBACK_DESCRIPTION,
            EnemyTier::Regular.base_stats(),
        )
    }
}
