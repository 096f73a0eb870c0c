//! Battle action acknowledgement
//!
//! Battles are resolved entirely by the front-end. The server only
//! acknowledges actions with a fixed result.

use crate::application::dto::{BattleAction, BattleResult};

pub const ACTION_PROCESSED: &str = "Action processed";

/// Acknowledge a battle action. The result does not depend on the action.
pub fn process_battle_action(action: &BattleAction) -> BattleResult {
    tracing::debug!(
        "Battle action '{}' with '{}' on '{}'",
        action.action_type,
        action.ability_id,
        action.target
    );

    BattleResult {
        success: true,
        damage: 0,
        message: ACTION_PROCESSED.to_string(),
        player_hp: 100,
        enemy_hp: 100,
        is_battle_over: false,
        winner: None,
    }
}
