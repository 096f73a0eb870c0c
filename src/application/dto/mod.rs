//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so the HTTP routes can
//! serialize/deserialize without pulling serde into the domain model.

pub mod battle;
pub mod generation;

pub use battle::*;
pub use generation::*;
