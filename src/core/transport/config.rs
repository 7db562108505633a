//! Transport configuration types.
//!
//! `MCP_TRANSPORT` selects how the server talks to clients. A transport whose
//! cargo feature is not compiled in, or a value that names no transport at
//! all, falls back to the build's default with a warning. Malformed ports and
//! flags fall back to their defaults the same way.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable naming the transport.
pub const TRANSPORT_ENV: &str = "MCP_TRANSPORT";

/// Every transport name this server understands, compiled in or not.
const KNOWN_TRANSPORTS: &[(&str, bool)] = &[
    ("stdio", cfg!(feature = "stdio")),
    ("tcp", cfg!(feature = "tcp")),
    ("http", cfg!(feature = "http")),
];

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// One client over stdin/stdout, as spawned by an MCP host.
    #[cfg(feature = "stdio")]
    Stdio,

    /// Line-delimited JSON-RPC over raw TCP, one session per connection.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// JSON-RPC over HTTP POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// TCP transport configuration.
#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for the JSON-RPC endpoint, always starting with `/`.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

#[cfg(feature = "stdio")]
fn default_transport() -> TransportConfig {
    TransportConfig::Stdio
}

#[cfg(all(not(feature = "stdio"), feature = "tcp"))]
fn default_transport() -> TransportConfig {
    TransportConfig::Tcp(TcpConfig::default())
}

#[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
fn default_transport() -> TransportConfig {
    TransportConfig::Http(HttpConfig::default())
}

#[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");

/// Read a port, keeping `default` when the value is missing or malformed.
#[cfg(any(feature = "tcp", feature = "http"))]
fn port_from(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u16) -> u16 {
    let Some(raw) = lookup(key) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        warn!("Ignoring {}={:?}: not a port number, using {}", key, raw, default);
        default
    })
}

/// Read an on/off flag, keeping `default` when the value is missing or malformed.
#[cfg(feature = "http")]
fn flag_from(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: bool) -> bool {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            warn!("Ignoring {}={:?}: expected true or false", key, raw);
            default
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        default_transport()
    }
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: default_host(),
        }
    }
}

#[cfg(feature = "tcp")]
impl TcpConfig {
    /// Build a TCP config from `MCP_TCP_HOST` and `MCP_TCP_PORT`.
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: port_from(lookup, "MCP_TCP_PORT", defaults.port),
            host: lookup("MCP_TCP_HOST").unwrap_or(defaults.host),
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// Build an HTTP config from the `MCP_HTTP_*` variables.
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let rpc_path = match lookup("MCP_HTTP_PATH") {
            Some(path) if path.starts_with('/') => path,
            Some(path) => {
                warn!("MCP_HTTP_PATH={:?} lacks a leading '/', serving /{}", path, path);
                format!("/{}", path)
            }
            None => defaults.rpc_path,
        };

        Self {
            port: port_from(lookup, "MCP_HTTP_PORT", defaults.port),
            host: lookup("MCP_HTTP_HOST").unwrap_or(defaults.host),
            rpc_path,
            enable_cors: flag_from(lookup, "MCP_HTTP_CORS", defaults.enable_cors),
        }
    }
}

impl TransportConfig {
    /// Create a STDIO transport config.
    #[cfg(feature = "stdio")]
    pub fn stdio() -> Self {
        Self::Stdio
    }

    /// Create a TCP transport config.
    #[cfg(feature = "tcp")]
    pub fn tcp(port: u16, host: impl Into<String>) -> Self {
        Self::Tcp(TcpConfig {
            port,
            host: host.into(),
        })
    }

    /// Create an HTTP transport config.
    #[cfg(feature = "http")]
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load transport config from an arbitrary key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let requested = lookup(TRANSPORT_ENV)
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match requested.as_str() {
            "" => Self::default(),
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig::from_lookup(&lookup)),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_lookup(&lookup)),
            other => {
                let fallback = Self::default();
                if KNOWN_TRANSPORTS.iter().any(|(name, _)| *name == other) {
                    warn!(
                        "{}={} needs the '{}' cargo feature, which this build lacks; using {}",
                        TRANSPORT_ENV,
                        other,
                        other,
                        fallback.description()
                    );
                } else {
                    warn!(
                        "{}={} is not a known transport (available: {}); using {}",
                        TRANSPORT_ENV,
                        other,
                        Self::available().join(", "),
                        fallback.description()
                    );
                }
                fallback
            }
        }
    }

    /// Names of the transports compiled into this build.
    pub fn available() -> Vec<&'static str> {
        KNOWN_TRANSPORTS
            .iter()
            .filter(|(_, compiled)| *compiled)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("TCP on {}:{}", cfg.host, cfg.port),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }

    /// Check if this transport is the standard STDIO mode.
    pub fn is_stdio(&self) -> bool {
        #[cfg(feature = "stdio")]
        {
            matches!(self, Self::Stdio)
        }
        #[cfg(not(feature = "stdio"))]
        {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_available_lists_compiled_transports() {
        let available = TransportConfig::available();
        assert_eq!(available.contains(&"stdio"), cfg!(feature = "stdio"));
        assert_eq!(available.contains(&"tcp"), cfg!(feature = "tcp"));
        assert_eq!(available.contains(&"http"), cfg!(feature = "http"));
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_default_is_stdio() {
        let config = TransportConfig::from_lookup(lookup_from(&[]));
        assert!(config.is_stdio());
        assert_eq!(config.description(), "STDIO (standard MCP mode)");
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_unknown_transport_falls_back() {
        let config = TransportConfig::from_lookup(lookup_from(&[(TRANSPORT_ENV, "websocket")]));
        assert!(config.is_stdio());
    }

    #[cfg(all(feature = "stdio", not(feature = "tcp")))]
    #[test]
    fn test_uncompiled_transport_falls_back() {
        let config = TransportConfig::from_lookup(lookup_from(&[(TRANSPORT_ENV, "tcp")]));
        assert!(config.is_stdio());
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_from_lookup() {
        let config = TransportConfig::from_lookup(lookup_from(&[
            (TRANSPORT_ENV, " TCP "),
            ("MCP_TCP_PORT", "3001"),
            ("MCP_TCP_HOST", "0.0.0.0"),
        ]));
        assert!(!config.is_stdio());
        assert_eq!(config.description(), "TCP on 0.0.0.0:3001");
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_invalid_port_uses_default() {
        let config = TransportConfig::from_lookup(lookup_from(&[
            (TRANSPORT_ENV, "tcp"),
            ("MCP_TCP_PORT", "not-a-port"),
        ]));
        assert_eq!(config.description(), "TCP on 127.0.0.1:3000");

        let config = TransportConfig::from_lookup(lookup_from(&[
            (TRANSPORT_ENV, "tcp"),
            ("MCP_TCP_PORT", "70000"),
        ]));
        assert_eq!(config.description(), "TCP on 127.0.0.1:3000");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_from_lookup() {
        let config = TransportConfig::from_lookup(lookup_from(&[
            (TRANSPORT_ENV, "http"),
            ("MCP_HTTP_PORT", "bogus"),
            ("MCP_HTTP_PATH", "rpc"),
            ("MCP_HTTP_CORS", "off"),
        ]));
        match config {
            TransportConfig::Http(cfg) => {
                assert_eq!(cfg.port, 8080);
                assert_eq!(cfg.rpc_path, "/rpc");
                assert!(!cfg.enable_cors);
            }
            other => panic!("Expected HTTP transport, got {:?}", other),
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_invalid_cors_flag_uses_default() {
        let config = TransportConfig::from_lookup(lookup_from(&[
            (TRANSPORT_ENV, "http"),
            ("MCP_HTTP_CORS", "maybe"),
        ]));
        match config {
            TransportConfig::Http(cfg) => assert!(cfg.enable_cors),
            other => panic!("Expected HTTP transport, got {:?}", other),
        }
    }
}
