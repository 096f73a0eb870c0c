//! Application layer - Use cases and the ports they depend on
//!
//! - Ports: interfaces to external systems (the LLM chat provider)
//! - DTOs: request/response shapes exchanged at the API boundary
//! - Services: content generation and the battle stub

pub mod dto;
pub mod ports;
pub mod services;
