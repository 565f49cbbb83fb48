//! Interaction-log models and filtering for learning platforms.
//!
//! This crate defines the read and write models for a single logged
//! learner/item interaction and a pure filtering operation over ordered
//! collections of them. Persistence, routing, and authentication are the
//! caller's concern: this layer only shapes, validates, and narrows records.

pub mod core;

pub use crate::core::errors::{LearnlogError, Result};
pub use crate::core::models::interaction::{InteractionLog, InteractionLogCreate};
pub use crate::core::services::interaction_service::InteractionService;
