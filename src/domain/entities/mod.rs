//! Domain entities - Generated game content

mod ability;
mod enemy;

pub use ability::GeneratedAbility;
pub use enemy::GeneratedEnemy;
