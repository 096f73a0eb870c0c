//! Value objects - Immutable objects defined by their attributes

mod ability_kind;
mod enemy_stats;
mod phase;

pub use ability_kind::AbilityKind;
pub use enemy_stats::{EnemyStats, EnemyTier};
pub use phase::GamePhase;
