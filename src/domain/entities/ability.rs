//! Ability entity - a skill the player can learn

/// An ability with its narrative text and numeric magnitude
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAbility {
    pub name: String,
    pub description: String,
    /// Damage, buff amount or healed HP depending on the ability kind
    pub damage: u32,
    pub effect: String,
}

impl GeneratedAbility {
    pub const FALLBACK_DESCRIPTION: &'static str = "Uma habilidade poderosa";
    pub const FALLBACK_EFFECT: &'static str = "Causa efeito";
    pub const FALLBACK_DAMAGE: u32 = 10;

    /// Static ability used when generation fails
    pub fn fallback(ability_type: &str) -> Self {
        Self {
            name: ability_type.to_string(),
            description: Self::FALLBACK_DESCRIPTION.to_string(),
            damage: Self::FALLBACK_DAMAGE,
            effect: Self::FALLBACK_EFFECT.to_string(),
        }
    }
}
