//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and an optional `.env` file) on top of defaults.
//! Configuration is read once at startup and injected into the components
//! that need it.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Environment variable selecting the prompts directory.
pub const PROMPTS_FOLDER_ENV: &str = "PROMPTS_FOLDER";

/// Name of the default prompts directory, next to the installed binary.
pub const DEFAULT_PROMPTS_DIR_NAME: &str = "prompts";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Prompts domain configuration.
    pub prompts: PromptsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,

    /// Instructions sent to clients on initialization.
    pub instructions: String,
}

/// Configuration for the prompts domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptsConfig {
    /// Directory holding the `.txt` prompt files.
    pub folder: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "error", "info", "debug").
    pub level: String,
}

/// Resolve the default prompts directory: `prompts/` beside the executable.
pub fn default_prompts_folder() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let install_dir = exe
        .parent()
        .ok_or_else(|| Error::config(format!("executable {:?} has no parent directory", exe)))?;
    Ok(install_dir.join(DEFAULT_PROMPTS_DIR_NAME))
}

impl Default for PromptsConfig {
    fn default() -> Self {
        let folder = default_prompts_folder().unwrap_or_else(|e| {
            warn!(
                "Cannot locate installation directory ({}), using ./{}",
                e, DEFAULT_PROMPTS_DIR_NAME
            );
            PathBuf::from(DEFAULT_PROMPTS_DIR_NAME)
        });
        Self { folder }
    }
}

impl PromptsConfig {
    /// Create a prompts configuration for an explicit directory.
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    /// Load the prompts configuration from `PROMPTS_FOLDER`.
    ///
    /// An unset or empty variable falls back to the default directory.
    pub fn from_env() -> Self {
        match std::env::var(PROMPTS_FOLDER_ENV) {
            Ok(folder) if !folder.is_empty() => {
                info!("Prompts folder set from {}: {}", PROMPTS_FOLDER_ENV, folder);
                Self::new(folder)
            }
            _ => {
                let config = Self::default();
                debug!("Using default prompts folder: {}", config.folder.display());
                config
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "Prompt Shortcut MCP".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                instructions: "You are a software developer assistant. You are able to remember \
                               prompts templates and execute them when asked."
                    .to_string(),
            },
            prompts: PromptsConfig::default(),
            logging: LoggingConfig {
                level: "error".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...). The prompts directory comes
    /// from `PROMPTS_FOLDER`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.prompts = PromptsConfig::from_env();

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}
