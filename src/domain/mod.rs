//! Domain layer - Core game content rules with no external dependencies
//!
//! This layer contains:
//! - Entities: generated enemies and abilities, including their fallbacks
//! - Value Objects: game phases, ability kinds, stat blocks

pub mod entities;
pub mod value_objects;
