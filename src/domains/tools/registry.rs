//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

#[cfg(feature = "http")]
use super::error::ToolError;
use super::definitions::{GetPromptFileTool, GetPromptTool, ListPromptsTool};
use crate::domains::prompts::PromptStore;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    store: Arc<PromptStore>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by the given store.
    pub fn new(store: Arc<PromptStore>) -> Self {
        Self { store }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            ListPromptsTool::NAME,
            GetPromptTool::NAME,
            GetPromptFileTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ListPromptsTool::to_tool(),
            GetPromptTool::to_tool(),
            GetPromptFileTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let store = self.store.clone();
        let result = match name {
            ListPromptsTool::NAME => ListPromptsTool::http_handler(arguments, store),
            GetPromptTool::NAME => GetPromptTool::http_handler(arguments, store),
            GetPromptFileTool::NAME => GetPromptFileTool::http_handler(arguments, store),
            _ => {
                warn!("Unknown tool requested: {}", name);
                return Err(ToolError::not_found(name));
            }
        };
        result.map_err(ToolError::invalid_arguments)
    }
}
