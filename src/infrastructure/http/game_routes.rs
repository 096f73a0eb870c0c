//! Game API routes

use axum::Json;
use serde::Serialize;

use crate::application::dto::{BattleAction, BattleResult};
use crate::application::services::process_battle_action;

pub const API_READY_MESSAGE: &str = "Os Fragmentos de Alexandria - API Ready";

#[derive(Debug, Serialize)]
pub struct ApiStatus {
    pub message: String,
    pub status: String,
}

/// API status; does not touch the LLM provider
pub async fn api_status() -> Json<ApiStatus> {
    Json(ApiStatus {
        message: API_READY_MESSAGE.to_string(),
        status: "active".to_string(),
    })
}

/// Acknowledge a battle action
pub async fn battle_action(Json(action): Json<BattleAction>) -> Json<BattleResult> {
    Json(process_battle_action(&action))
}
