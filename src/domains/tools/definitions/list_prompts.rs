//! List prompts tool definition.
//!
//! A tool that lists the shortcut names of every available prompt.

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

/// Parameters for the list prompts tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListPromptsParams {}

// ============================================================================
// Tool Definition
// ============================================================================

/// List prompts tool - returns all prompt names as a JSON array.
pub struct ListPromptsTool;

impl ListPromptsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_prompts";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List all available prompt names.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all)]
    pub fn execute(_params: &ListPromptsParams, store: &PromptStore) -> CallToolResult {
        let names = store.list_names();
        info!("Listing {} prompts", names.len());

        match serde_json::to_string(&names) {
            Ok(json) => CallToolResult::success(vec![Content::text(json)]),
            Err(e) => {
                warn!("Failed to serialize prompt names: {}", e);
                CallToolResult::error(vec![Content::text(format!(
                    "Failed to serialize prompt names: {}",
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
        info!("List prompts tool (HTTP) called");

        let result = Self::execute(&ListPromptsParams::default(), &store);

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
            input_schema: cached_schema_for_type::<ListPromptsParams>(),
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
                let params: ListPromptsParams =
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
    use std::fs;
    use tempfile::TempDir;

    fn result_text(result: &CallToolResult) -> &str {
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_list_prompts_execute() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("hello_world.txt"), "Hi").unwrap();
        fs::write(temp_dir.path().join("notes.md"), "ignored").unwrap();

        let store = PromptStore::new(temp_dir.path());
        let result = ListPromptsTool::execute(&ListPromptsParams::default(), &store);
        assert!(!result.is_error.unwrap_or(false));

        let names: Vec<String> = serde_json::from_str(result_text(&result)).unwrap();
        assert_eq!(names, vec!["hello world".to_string()]);
    }

    #[test]
    fn test_list_prompts_missing_directory() {
        let store = PromptStore::new("/nonexistent/prompts/12345");
        let result = ListPromptsTool::execute(&ListPromptsParams::default(), &store);
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "[]");
    }

    #[test]
    fn test_to_tool() {
        let tool = ListPromptsTool::to_tool();
        assert_eq!(tool.name, "list_prompts");
        assert!(tool.description.is_some());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_list_prompts_http_handler() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "A").unwrap();

        let store = Arc::new(PromptStore::new(temp_dir.path()));
        let result = ListPromptsTool::http_handler(serde_json::json!({}), store).unwrap();
        assert_eq!(result["isError"], false);
    }
}
