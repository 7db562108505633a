//! Get prompt tool definition.
//!
//! A tool that returns the text of one prompt by shortcut name. An unknown
//! name is not a tool error: the client receives a sentence saying the prompt
//! was not found.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::domains::prompts::PromptStore;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the get prompt tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetPromptParams {
    /// Shortcut name of the prompt, as returned by list_prompts.
    pub prompt_name: String,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Get prompt tool - returns the text for a given prompt name.
pub struct GetPromptTool;

impl GetPromptTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_prompt";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Return the prompt text for a given prompt name.";

    /// Execute the tool logic (for STDIO/TCP transport via rmcp).
    #[instrument(skip_all, fields(prompt_name = %params.prompt_name))]
    pub fn execute(params: &GetPromptParams, store: &PromptStore) -> CallToolResult {
        info!("Get prompt tool called for: {}", params.prompt_name);

        let text = store.get_one(&params.prompt_name);
        CallToolResult::success(vec![Content::text(text)])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        store: Arc<PromptStore>,
    ) -> Result<serde_json::Value, String> {
        let prompt_name = arguments
            .get("prompt_name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| "Missing or invalid 'prompt_name' parameter".to_string())?
            .to_string();

        info!("Get prompt tool (HTTP) called for: {}", prompt_name);

        let result = Self::execute(&GetPromptParams { prompt_name }, &store);

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
            input_schema: cached_schema_for_type::<GetPromptParams>(),
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
                let params: GetPromptParams =
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

    fn params(name: &str) -> GetPromptParams {
        GetPromptParams {
            prompt_name: name.to_string(),
        }
    }

    #[test]
    fn test_get_prompt_execute() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("hello_world.txt"), "Hello, World!").unwrap();

        let store = PromptStore::new(temp_dir.path());
        let result = GetPromptTool::execute(&params("hello world"), &store);
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "Hello, World!");
    }

    #[test]
    fn test_get_prompt_not_found_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("notes.md"), "ignored").unwrap();

        let store = PromptStore::new(temp_dir.path());
        let result = GetPromptTool::execute(&params("notes"), &store);
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), "Prompt 'notes' not found.");
    }

    #[test]
    fn test_params_require_prompt_name() {
        let parsed: Result<GetPromptParams, _> = serde_json::from_value(serde_json::json!({}));
        assert!(parsed.is_err());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_get_prompt_http_handler_missing_param() {
        let store = Arc::new(PromptStore::new("/nonexistent/prompts/12345"));
        let result = GetPromptTool::http_handler(serde_json::json!({ "name": "x" }), store);
        assert!(result.is_err());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_get_prompt_http_handler() {
        let store = Arc::new(PromptStore::new("/nonexistent/prompts/12345"));
        let result =
            GetPromptTool::http_handler(serde_json::json!({ "prompt_name": "nope" }), store)
                .unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["content"][0]["text"], "Prompt 'nope' not found.");
    }
}
