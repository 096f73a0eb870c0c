//! Content generation DTOs

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{GeneratedAbility, GeneratedEnemy};

#[derive(Debug, Clone, Deserialize)]
pub struct DialogueRequest {
    /// Free-text situation the narrator should react to
    pub context: String,
    pub character_name: String,
    pub phase: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DialogueResponse {
    pub dialogue: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnemyRequest {
    pub enemy_type: String,
    pub phase: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EnemyResponse {
    pub name: String,
    pub description: String,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
}

impl From<GeneratedEnemy> for EnemyResponse {
    fn from(enemy: GeneratedEnemy) -> Self {
        Self {
            name: enemy.name,
            description: enemy.description,
            hp: enemy.stats.hp,
            attack: enemy.stats.attack,
            defense: enemy.stats.defense,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AbilityRequest {
    /// One of "Lógica", "Inspiração" or "Cura"; other labels are accepted
    pub ability_type: String,
    /// Levels start at 1; zero and negatives are rejected on deserialization
    pub level: NonZeroU32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AbilityResponse {
    pub name: String,
    pub description: String,
    pub damage: u32,
    pub effect: String,
}

impl From<GeneratedAbility> for AbilityResponse {
    fn from(ability: GeneratedAbility) -> Self {
        Self {
            name: ability.name,
            description: ability.description,
            damage: ability.damage,
            effect: ability.effect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ability_request_rejects_level_zero() {
        let zero = serde_json::from_str::<AbilityRequest>(r#"{"ability_type":"Cura","level":0}"#);
        assert!(zero.is_err());

        let negative =
            serde_json::from_str::<AbilityRequest>(r#"{"ability_type":"Cura","level":-2}"#);
        assert!(negative.is_err());

        let ok = serde_json::from_str::<AbilityRequest>(r#"{"ability_type":"Cura","level":2}"#)
            .unwrap();
        assert_eq!(ok.level.get(), 2);
    }
}
