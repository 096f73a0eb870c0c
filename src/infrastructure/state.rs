//! Shared application state

use std::sync::Arc;

use anyhow::{Context, Result};

use crate::application::ports::outbound::LlmPort;
use crate::application::services::ContentGenerationService;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::llm_client::OpenAiChatClient;

/// Shared application state.
///
/// Built once at startup and shared read-only between requests.
pub struct AppState {
    pub config: AppConfig,
    pub generation_service: ContentGenerationService,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let llm_client = OpenAiChatClient::new(
            &config.llm_base_url,
            &config.llm_model,
            config.llm_api_key.clone(),
            config.llm_timeout,
        )
        .context("Failed to build the LLM HTTP client")?;

        Ok(Self::with_llm(config, Arc::new(llm_client)))
    }

    /// Build state around any chat provider
    pub fn with_llm(config: AppConfig, llm: Arc<dyn LlmPort>) -> Self {
        Self {
            config,
            generation_service: ContentGenerationService::new(llm),
        }
    }
}
