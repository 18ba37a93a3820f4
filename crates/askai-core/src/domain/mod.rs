//! Core domain types.
//!
//! These types represent the pure domain model, independent of any host
//! environment (terminal, browser, window system).
//!
//! # Structure
//!
//! - `service` - Service keys and launch definitions
//! - `prompt` - Prompt sources and the selections they resolve into

mod prompt;
mod service;

pub use prompt::{PromptSource, Selection};
pub use service::{ServiceDefinition, ServiceDefinitionError, ServiceKey};
