//! Prompt Shortcut MCP Server Library
//!
//! This crate exposes a folder of `.txt` files as named prompts over the
//! Model Context Protocol (MCP). Each file becomes a shortcut named after its
//! file stem with underscores replaced by spaces.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **prompts**: The prompt store, rescanned on every query
//!   - **tools**: `list_prompts`, `get_prompt` and `get_prompt_file`
//!
//! # Example
//!
//! ```rust,no_run
//! use prompt_shortcut_mcp::domains::prompts::PromptStore;
//!
//! let store = PromptStore::new("./prompts");
//! for name in store.list_names() {
//!     println!("{name}: {}", store.get_one(&name));
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::prompts::{PromptMap, PromptStore};
