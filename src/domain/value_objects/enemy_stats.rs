//! Enemy stat blocks

use rand::Rng;

/// Strength tier of an enemy, derived from its type label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyTier {
    Regular,
    /// Bosses and the "Echo do Esquecimento" guardians
    Boss,
}

impl EnemyTier {
    pub fn from_enemy_type(enemy_type: &str) -> Self {
        let lowered = enemy_type.to_lowercase();
        if lowered.contains("boss") || lowered.contains("echo") {
            EnemyTier::Boss
        } else {
            EnemyTier::Regular
        }
    }

    pub fn base_stats(&self) -> EnemyStats {
        match self {
            EnemyTier::Regular => EnemyStats::REGULAR_BASE,
            EnemyTier::Boss => EnemyStats::BOSS_BASE,
        }
    }
}

/// Combat stats of an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
}

impl EnemyStats {
    pub const REGULAR_BASE: EnemyStats = EnemyStats {
        hp: 30,
        attack: 8,
        defense: 5,
    };

    pub const BOSS_BASE: EnemyStats = EnemyStats {
        hp: 100,
        attack: 15,
        defense: 10,
    };

    /// Base stats for the tier plus independent uniform jitter on each stat.
    pub fn roll<R: Rng + ?Sized>(tier: EnemyTier, rng: &mut R) -> Self {
        let base = tier.base_stats();
        Self {
            hp: jitter(base.hp, rng.gen_range(-5..=10)),
            attack: jitter(base.attack, rng.gen_range(-2..=5)),
            defense: jitter(base.defense, rng.gen_range(-2..=3)),
        }
    }
}

/// Applies a signed offset, clamping at zero
fn jitter(base: u32, offset: i32) -> u32 {
    base.saturating_add_signed(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tier_from_enemy_type() {
        assert_eq!(EnemyTier::from_enemy_type("Vírus Simbólico"), EnemyTier::Regular);
        assert_eq!(EnemyTier::from_enemy_type("Boss of Shadows"), EnemyTier::Boss);
        assert_eq!(
            EnemyTier::from_enemy_type("Echo do Esquecimento - Doença"),
            EnemyTier::Boss
        );
        assert_eq!(EnemyTier::from_enemy_type("MEGABOSS"), EnemyTier::Boss);
    }

    #[test]
    fn test_regular_roll_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let stats = EnemyStats::roll(EnemyTier::Regular, &mut rng);
            assert!((25..=40).contains(&stats.hp), "hp {}", stats.hp);
            assert!((6..=13).contains(&stats.attack), "attack {}", stats.attack);
            assert!((3..=8).contains(&stats.defense), "defense {}", stats.defense);
        }
    }

    #[test]
    fn test_boss_roll_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let stats = EnemyStats::roll(EnemyTier::Boss, &mut rng);
            assert!((95..=110).contains(&stats.hp), "hp {}", stats.hp);
            assert!((13..=20).contains(&stats.attack), "attack {}", stats.attack);
            assert!((8..=13).contains(&stats.defense), "defense {}", stats.defense);
        }
    }

    #[test]
    fn test_jitter_clamps_at_zero() {
        assert_eq!(jitter(3, -5), 0);
        assert_eq!(jitter(3, 2), 5);
    }
}
