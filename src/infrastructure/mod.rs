//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - HTTP: REST API routes and CORS
//! - LLM client: OpenAI-compatible chat provider
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod http;
pub mod llm_client;
pub mod state;
