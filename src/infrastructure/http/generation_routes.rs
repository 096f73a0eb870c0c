//! Generation API routes - LLM-powered game content

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::application::dto::{
    AbilityRequest, AbilityResponse, DialogueRequest, DialogueResponse, EnemyRequest,
    EnemyResponse,
};
use crate::infrastructure::state::AppState;

/// Error body returned when generation fails
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Generate a narrator line. Provider failures surface as 500.
pub async fn generate_dialogue(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DialogueRequest>,
) -> Result<Json<DialogueResponse>, (StatusCode, Json<ErrorDetail>)> {
    let dialogue = state
        .generation_service
        .generate_dialogue(&req)
        .await
        .map_err(|e| {
            tracing::error!("Error generating dialogue: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDetail {
                    detail: e.to_string(),
                }),
            )
        })?;

    Ok(Json(DialogueResponse { dialogue }))
}

/// Generate an enemy. Always succeeds; failures degrade to a fallback enemy.
pub async fn generate_enemy(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EnemyRequest>,
) -> Json<EnemyResponse> {
    let enemy = state.generation_service.generate_enemy(&req).await;
    Json(EnemyResponse::from(enemy))
}

/// Generate an ability. Always succeeds; failures degrade to a fallback ability.
pub async fn generate_ability(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AbilityRequest>,
) -> Json<AbilityResponse> {
    let ability = state.generation_service.generate_ability(&req).await;
    Json(AbilityResponse::from(ability))
}
