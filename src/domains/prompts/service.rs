//! Prompt service implementation.
//!
//! The PromptService exposes the prompt store through the MCP prompts
//! capability. Every request rescans the directory, so listings and
//! lookups always reflect what is currently on disk.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

use super::error::PromptError;
use super::store::{FileOutcome, PromptStore};

/// Service for listing and fetching prompts over MCP.
pub struct PromptService {
    store: Arc<PromptStore>,
}

impl PromptService {
    /// Create a new PromptService over the given store.
    pub fn new(store: Arc<PromptStore>) -> Self {
        info!("Initializing PromptService for {}", store.dir().display());
        Self { store }
    }

    /// List all available prompts.
    ///
    /// Prompts are ordered by name. When two files share a shortcut only the
    /// winning file is listed.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        let mut prompts: BTreeMap<String, Prompt> = BTreeMap::new();

        for outcome in self.store.scan() {
            let FileOutcome::Loaded {
                file_name,
                shortcut,
                ..
            } = outcome
            else {
                continue;
            };

            let prompt = Prompt {
                name: shortcut.clone(),
                title: None,
                description: Some(format!("Prompt shortcut loaded from {}", file_name)),
                arguments: None,
                icons: None,
                meta: None,
            };

            // Scan order is file-name order, so the later file wins
            prompts.insert(shortcut, prompt);
        }

        prompts.into_values().collect()
    }

    /// Get a prompt as a single user message.
    pub async fn get_prompt(&self, name: &str) -> Result<GetPromptResult, PromptError> {
        let text = self
            .store
            .load()
            .remove(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        Ok(GetPromptResult {
            description: Some(format!("Prompt shortcut '{}'", name)),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, text)],
        })
    }
}
