//! Battle DTOs
//!
//! Battles are resolved by the front-end; these shapes only exist so the
//! client can report an action and receive an acknowledgement.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct BattleAction {
    /// "attack", "heal" or "buff"
    pub action_type: String,
    pub ability_id: String,
    /// "enemy" or "self"
    pub target: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BattleResult {
    pub success: bool,
    pub damage: u32,
    pub message: String,
    pub player_hp: u32,
    pub enemy_hp: u32,
    pub is_battle_over: bool,
    pub winner: Option<String>,
}
