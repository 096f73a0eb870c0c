//! Ability categories and their level scaling

/// The recognised ability categories.
///
/// The same magnitude field means raw damage for `Logic`, a buff amount for
/// `Inspiration` and healed HP for `Heal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityKind {
    /// "Lógica" - reason-based attacks
    Logic,
    /// "Inspiração" - buffs and empowerment
    Inspiration,
    /// "Cura" - HP recovery
    Heal,
}

impl AbilityKind {
    /// Match the exact label used by the game. Matching is case-sensitive.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Lógica" => Some(AbilityKind::Logic),
            "Inspiração" => Some(AbilityKind::Inspiration),
            "Cura" => Some(AbilityKind::Heal),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AbilityKind::Logic => "Lógica",
            AbilityKind::Inspiration => "Inspiração",
            AbilityKind::Heal => "Cura",
        }
    }

    /// Magnitude at the given level: `base + level * per_level`
    pub fn magnitude(&self, level: u32) -> u32 {
        let (base, per_level) = match self {
            AbilityKind::Logic => (10, 3),
            AbilityKind::Inspiration => (5, 2),
            AbilityKind::Heal => (15, 4),
        };
        level.saturating_mul(per_level).saturating_add(base)
    }

    /// Magnitude for a raw label; unknown labels have no magnitude.
    pub fn magnitude_for_label(label: &str, level: u32) -> u32 {
        Self::from_label(label).map_or(0, |kind| kind.magnitude(level))
    }
}
