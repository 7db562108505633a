//! Domains module containing business logic organized by bounded contexts.
//!
//! - **prompts**: the prompt store and the MCP prompts capability
//! - **tools**: MCP tools that query the prompt store

pub mod prompts;
pub mod tools;
