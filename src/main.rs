//! Fragmentos Engine - Content generation API for Os Fragmentos de Alexandria
//!
//! The Engine is the backend server that:
//! - Generates narrator dialogue, enemies and abilities through an LLM chat provider
//! - Falls back to static content when enemy or ability generation fails
//! - Acknowledges battle actions resolved by the front-end

mod application;
mod domain;
mod infrastructure;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::http;
use crate::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fragmentos_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Fragmentos Engine");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  LLM: {} ({})", config.llm_base_url, config.llm_model);
    tracing::info!("  CORS: {:?}", config.cors_origins);
    if config.llm_api_key.is_none() {
        tracing::warn!("LLM_API_KEY is not set; generation requests will be unauthenticated");
    }

    // Initialize application state
    let state = Arc::new(AppState::new(config)?);
    tracing::info!("Application state initialized");

    let cors = http::cors_layer(&state.config.cors_origins);
    let addr = state.config.socket_addr();

    // Build the router
    let app = Router::new()
        .route("/health", get(health_check))
        .merge(http::create_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start the server
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Keep serving; the process can still be killed
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections...");
}

async fn health_check() -> &'static str {
    "OK"
}
