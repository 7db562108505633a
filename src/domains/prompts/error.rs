//! Prompt-specific error types.

use thiserror::Error;

/// Errors that can occur during prompt operations.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The requested prompt was not found.
    #[error("Prompt '{0}' not found.")]
    NotFound(String),
}

impl PromptError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::prompts::store::not_found_message;

    #[test]
    fn test_not_found_matches_tool_message() {
        let err = PromptError::not_found("nope");
        assert_eq!(err.to_string(), not_found_message("nope"));
    }
}
