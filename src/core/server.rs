//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the prompt store.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (core logic)
//! - `http_handler()` method (called via ToolRegistry for HTTP transport)
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    prompts::{PromptService, PromptStore},
    tools::build_tool_router,
};

#[cfg(feature = "http")]
use crate::domains::tools::ToolRegistry;

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Every request
/// is answered from a fresh scan of the prompts directory.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Prompt store shared by tools and the prompts capability.
    store: Arc<PromptStore>,

    /// Service for handling prompt-related requests.
    prompt_service: Arc<PromptService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let store = Arc::new(PromptStore::new(config.prompts.folder.clone()));

        info!("Serving prompts from {}", store.dir().display());

        let prompt_service = Arc::new(PromptService::new(store.clone()));

        Self {
            tool_router: build_tool_router::<Self>(store.clone()),
            config,
            store,
            prompt_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the instructions sent to clients.
    pub fn instructions(&self) -> &str {
        &self.config.server.instructions
    }

    /// Get the prompt store backing this server.
    pub fn store(&self) -> &Arc<PromptStore> {
        &self.store
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, String> {
        let registry = ToolRegistry::new(self.store.clone());
        registry
            .call_tool(name, arguments)
            .map_err(|e| e.to_string())
    }

    /// List all available prompts (for HTTP transport).
    pub async fn list_prompts(&self) -> Vec<serde_json::Value> {
        let prompts = self.prompt_service.list_prompts().await;

        prompts
            .into_iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "description": p.description,
                    "arguments": p.arguments
                })
            })
            .collect()
    }

    /// Get a prompt by name (for HTTP transport).
    pub async fn get_prompt(&self, name: &str) -> Result<serde_json::Value, String> {
        match self.prompt_service.get_prompt(name).await {
            Ok(result) => Ok(serde_json::json!({
                "description": result.description,
                "messages": result.messages
            })),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.config.server.instructions.clone()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_prompts(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        info!("Listing prompts");
        let prompts = self.prompt_service.list_prompts().await;
        Ok(ListPromptsResult {
            prompts,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        info!("Getting prompt: {}", request.name);
        self.prompt_service
            .get_prompt(&request.name)
            .await
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PromptsConfig;
    use std::fs;
    use tempfile::TempDir;

    fn server_for(dir: &TempDir) -> McpServer {
        let config = Config {
            prompts: PromptsConfig::new(dir.path()),
            ..Config::default()
        };
        McpServer::new(config)
    }

    #[test]
    fn test_server_info() {
        let temp_dir = TempDir::new().unwrap();
        let server = server_for(&temp_dir);

        let info = server.get_info();
        assert_eq!(info.server_info.name, "Prompt Shortcut MCP");
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.prompts.is_some());
        assert!(info.capabilities.resources.is_none());
        assert_eq!(info.instructions.as_deref(), Some(server.instructions()));
    }

    #[test]
    fn test_server_lists_three_tools() {
        let temp_dir = TempDir::new().unwrap();
        let server = server_for(&temp_dir);

        let tools = server.list_tools();
        assert_eq!(tools.len(), 3);
        assert_eq!(server.store().dir(), temp_dir.path());
    }

    #[tokio::test]
    async fn test_server_prompts_follow_disk() {
        let temp_dir = TempDir::new().unwrap();
        let server = server_for(&temp_dir);
        assert!(server.list_prompts().await.is_empty());

        fs::write(temp_dir.path().join("hello_world.txt"), "Hi").unwrap();
        let prompts = server.list_prompts().await;
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0]["name"], "hello world");

        let result = server.get_prompt("hello world").await.unwrap();
        assert_eq!(result["messages"][0]["content"]["text"], "Hi");

        let missing = server.get_prompt("nope").await;
        assert_eq!(missing, Err("Prompt 'nope' not found.".to_string()));
    }
}
