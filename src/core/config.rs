//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (optionally via a `.env` file) or
//! defaults.

use super::transport::TransportConfig;
use crate::domains::tools::EnumPolicy;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Tools domain configuration.
    pub tools: ToolsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Problems found while loading, to be logged once logging is up.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the tools domain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Reject argument values that are not in the schema's `enum`.
    /// When false, such values are passed through to the handler.
    pub strict_enums: bool,
}

impl ToolsConfig {
    pub fn enum_policy(&self) -> EnumPolicy {
        if self.strict_enums {
            EnumPolicy::Enforced
        } else {
            EnumPolicy::Advisory
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "Hello World Server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            tools: ToolsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            warnings: Vec::new(),
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
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    ///
    /// Runs before the subscriber is installed, so nothing is logged here.
    /// Unusable values are skipped and recorded in [`Config::warnings`].
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            match parse_flag(&timestamps) {
                Some(value) => config.logging.with_timestamps = value,
                None => config.warn_invalid_flag("MCP_LOG_TIMESTAMPS", &timestamps),
            }
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(strict) = std::env::var("MCP_STRICT_ENUMS") {
            match parse_flag(&strict) {
                Some(value) => config.tools.strict_enums = value,
                None => config.warn_invalid_flag("MCP_STRICT_ENUMS", &strict),
            }
        }

        config
    }

    fn warn_invalid_flag(&mut self, var: &str, value: &str) {
        self.warnings
            .push(format!("Ignoring {}={:?}: expected true/false", var, value));
    }
}

/// Parse a boolean environment flag (`true`/`false`/`1`/`0`/`yes`/`no`).
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_server_identity() {
        let config = Config::default();
        assert_eq!(config.server.name, "Hello World Server");
        assert_eq!(config.server.version, env!("CARGO_PKG_VERSION"));
        assert!(!config.tools.strict_enums);
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "greeter");
        }
        let config = Config::from_env();
        assert_eq!(config.server.name, "greeter");
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_strict_enums_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_STRICT_ENUMS", "true");
        }
        let config = Config::from_env();
        assert!(config.tools.strict_enums);
        assert_eq!(config.tools.enum_policy(), EnumPolicy::Enforced);
        unsafe {
            std::env::remove_var("MCP_STRICT_ENUMS");
        }
    }

    #[test]
    fn test_strict_enums_invalid_value_ignored() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_STRICT_ENUMS", "sometimes");
        }
        let config = Config::from_env();
        assert!(!config.tools.strict_enums);
        assert_eq!(
            config.warnings,
            vec!["Ignoring MCP_STRICT_ENUMS=\"sometimes\": expected true/false".to_string()]
        );
        unsafe {
            std::env::remove_var("MCP_STRICT_ENUMS");
        }
    }

    #[test]
    fn test_valid_env_has_no_warnings() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_STRICT_ENUMS", "off");
            std::env::set_var("MCP_LOG_TIMESTAMPS", "no");
        }
        let config = Config::from_env();
        assert!(config.warnings.is_empty());
        assert!(!config.logging.with_timestamps);
        unsafe {
            std::env::remove_var("MCP_STRICT_ENUMS");
            std::env::remove_var("MCP_LOG_TIMESTAMPS");
        }
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
