//! Application services - Use case implementations

pub mod battle_service;
pub mod generation_service;
pub mod llm;

pub use battle_service::process_battle_action;
pub use generation_service::{ContentGenerationService, GenerationError};
