//! Content Generation Service - LLM-powered game content
//!
//! Turns a content request into a prompt, sends it to the chat provider once,
//! and maps the reply onto game entities. The failure policy differs per
//! content type:
//!
//! - Dialogue propagates provider errors; there is no canned dialogue.
//! - Enemies and abilities never fail. Unparseable replies degrade to the raw
//!   text, and provider errors degrade to a static fallback object.

use std::sync::Arc;

use tracing::Instrument;
use uuid::Uuid;

use crate::application::dto::{AbilityRequest, DialogueRequest, EnemyRequest};
use crate::application::ports::outbound::{ChatMessage, LlmError, LlmPort, LlmRequest};
use crate::application::services::llm::prompt_builder;
use crate::application::services::llm::{ParseOutcome, ReplyShape};
use crate::domain::entities::{GeneratedAbility, GeneratedEnemy};
use crate::domain::value_objects::{AbilityKind, EnemyStats, EnemyTier};

/// Errors surfaced by content generation
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The chat provider could not produce a reply
    #[error("{0}")]
    GenerationFailure(String),
}

impl From<LlmError> for GenerationError {
    fn from(e: LlmError) -> Self {
        GenerationError::GenerationFailure(e.to_string())
    }
}

/// Service for generating dialogue, enemies and abilities
#[derive(Clone)]
pub struct ContentGenerationService {
    llm: Arc<dyn LlmPort>,
}

impl ContentGenerationService {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    /// Generate a short narrator line. The reply is returned verbatim.
    pub async fn generate_dialogue(
        &self,
        request: &DialogueRequest,
    ) -> Result<String, GenerationError> {
        let system_prompt =
            prompt_builder::build_dialogue_system_prompt(&request.character_name, &request.phase);

        let dialogue = self
            .chat("dialogue", system_prompt, request.context.clone())
            .await?;

        Ok(dialogue)
    }

    /// Generate an enemy, falling back to a static one on provider failure
    pub async fn generate_enemy(&self, request: &EnemyRequest) -> GeneratedEnemy {
        match self.try_generate_enemy(request).await {
            Ok(enemy) => enemy,
            Err(e) => {
                tracing::error!("Error generating enemy '{}': {}", request.enemy_type, e);
                GeneratedEnemy::fallback(&request.enemy_type)
            }
        }
    }

    async fn try_generate_enemy(
        &self,
        request: &EnemyRequest,
    ) -> Result<GeneratedEnemy, GenerationError> {
        let system_prompt =
            prompt_builder::build_enemy_system_prompt(&request.enemy_type, &request.phase);
        let user_message = prompt_builder::build_enemy_user_message(&request.enemy_type);

        let reply = self.chat("enemy", system_prompt, user_message).await?;

        let outcome = ParseOutcome::parse(&reply, ReplyShape::Enemy);
        if !outcome.is_structured() {
            tracing::warn!(
                "Enemy reply for '{}' was not valid JSON, using raw text",
                request.enemy_type
            );
        }
        let (name, description) = outcome.into_enemy_text(&request.enemy_type);

        let tier = EnemyTier::from_enemy_type(&request.enemy_type);
        let stats = EnemyStats::roll(tier, &mut rand::thread_rng());

        Ok(GeneratedEnemy::new(name, description, stats))
    }

    /// Generate an ability, falling back to a static one on provider failure
    pub async fn generate_ability(&self, request: &AbilityRequest) -> GeneratedAbility {
        match self.try_generate_ability(request).await {
            Ok(ability) => ability,
            Err(e) => {
                tracing::error!("Error generating ability '{}': {}", request.ability_type, e);
                GeneratedAbility::fallback(&request.ability_type)
            }
        }
    }

    async fn try_generate_ability(
        &self,
        request: &AbilityRequest,
    ) -> Result<GeneratedAbility, GenerationError> {
        let level = request.level.get();
        let system_prompt = prompt_builder::build_ability_system_prompt(&request.ability_type, level);
        let user_message = prompt_builder::build_ability_user_message(&request.ability_type, level);

        let reply = self.chat("ability", system_prompt, user_message).await?;

        let outcome = ParseOutcome::parse(&reply, ReplyShape::Ability);
        if !outcome.is_structured() {
            tracing::warn!(
                "Ability reply for '{}' was not valid JSON, using raw text",
                request.ability_type
            );
        }
        let (name, description, effect) = outcome.into_ability_text(&request.ability_type);

        // Magnitude never depends on the model's reply
        let damage = AbilityKind::magnitude_for_label(&request.ability_type, level);

        Ok(GeneratedAbility {
            name,
            description,
            damage,
            effect,
        })
    }

    /// One chat round trip under a fresh session id
    async fn chat(
        &self,
        kind: &str,
        system_prompt: String,
        user_message: String,
    ) -> Result<String, LlmError> {
        let session_id = format!("{}_{}", kind, Uuid::new_v4());
        let span = tracing::info_span!("llm_chat", session_id = %session_id);

        let llm_request =
            LlmRequest::new(vec![ChatMessage::user(user_message)]).with_system_prompt(system_prompt);

        let response = self.llm.generate(llm_request).instrument(span).await?;
        tracing::debug!(
            "LLM session {} answered with {} chars from {}",
            session_id,
            response.content.chars().count(),
            response.model
        );

        Ok(response.content)
    }
}
