//! Get prompt file tool definition.
//!
//! A tool that returns every prompt at once as a JSON object keyed by
//! shortcut name.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domains::prompts::PromptStore;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the get prompt file tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetPromptFileParams {}

// ============================================================================
// Tool Definition
// ============================================================================

/// Get prompt file tool - returns the whole shortcut mapping.
pub struct GetPromptFileTool;

impl GetPromptFileTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_prompt_file";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Return the prompt file content: every prompt name mapped to its text.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all)]
    pub fn execute(_params: &GetPromptFileParams, store: &PromptStore) -> CallToolResult {
        let prompts = store.get_all();
        info!("Returning {} prompts", prompts.len());

        match serde_json::to_string(&prompts) {
            Ok(json) => CallToolResult::success(vec![Content::text(json)]),
            Err(e) => {
                warn!("Failed to serialize prompts: {}", e);
                CallToolResult::error(vec![Content::text(format!(
                    "Failed to serialize prompts: {}",
                    e
                ))])
            }
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        _arguments: serde_json::Value,
        store: Arc<PromptStore>,
    ) -> Result<serde_json::Value, String> {
        info!("Get prompt file tool (HTTP) called");

        let result = Self::execute(&GetPromptFileParams::default(), &store);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetPromptFileParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(store: Arc<PromptStore>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let store = store.clone();
            async move {
                let params: GetPromptFileParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &store))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_get_prompt_file_execute() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("prompt1.txt"), "Content 1").unwrap();
        fs::write(temp_dir.path().join("prompt_2.txt"), "Content 2").unwrap();

        let store = PromptStore::new(temp_dir.path());
        let result = GetPromptFileTool::execute(&GetPromptFileParams::default(), &store);
        assert!(!result.is_error.unwrap_or(false));

        let prompts: BTreeMap<String, String> =
            serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts["prompt1"], "Content 1");
        assert_eq!(prompts["prompt 2"], "Content 2");
    }

    #[test]
    fn test_get_prompt_file_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let store = PromptStore::new(temp_dir.path());
        let result = GetPromptFileTool::execute(&GetPromptFileParams::default(), &store);
        assert_eq!(result_text(&result), "{}");
    }
}
