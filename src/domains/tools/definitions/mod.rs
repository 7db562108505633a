//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod get_prompt;
pub mod get_prompt_file;
pub mod list_prompts;

pub use get_prompt::{GetPromptParams, GetPromptTool};
pub use get_prompt_file::{GetPromptFileParams, GetPromptFileTool};
pub use list_prompts::{ListPromptsParams, ListPromptsTool};
