//! HTTP REST API routes

mod cors;
mod game_routes;
mod generation_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

pub use cors::cors_layer;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Status
        .route("/api", get(game_routes::api_status))
        .route("/api/", get(game_routes::api_status))
        // Generation routes
        .route(
            "/api/generate/dialogue",
            post(generation_routes::generate_dialogue),
        )
        .route("/api/generate/enemy", post(generation_routes::generate_enemy))
        .route(
            "/api/generate/ability",
            post(generation_routes::generate_ability),
        )
        // Game routes
        .route("/api/game/battle-action", post(game_routes::battle_action))
}
