//! Prompts domain module.
//!
//! This module handles all prompt-related functionality for the MCP server.
//! Prompts are plain `.txt` files in a configured directory; each file becomes
//! a shortcut named after its file stem with underscores replaced by spaces.
//!
//! ## Architecture
//!
//! - `store.rs` - Directory scan and shortcut mapping, rebuilt on every query
//! - `service.rs` - MCP prompts capability backed by the store
//! - `error.rs` - Prompt-specific error types

mod error;
mod service;
pub mod store;

pub use error::PromptError;
pub use service::PromptService;
pub use store::{FileOutcome, PromptMap, PromptStore, SkipReason, not_found_message};
