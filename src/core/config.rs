//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Default AnkiConnect endpoint (the add-on's built-in listener).
pub const DEFAULT_ANKI_URL: &str = "http://127.0.0.1:8765";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// AnkiConnect backend configuration.
    pub anki: AnkiConfig,

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
}

/// Where to reach AnkiConnect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnkiConfig {
    /// Full URL of the AnkiConnect endpoint.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ANKI_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "anki-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            anki: AnkiConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_ANKI_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        match std::env::var("MCP_ANKI_URL") {
            Ok(url) if !url.trim().is_empty() => config.anki.url = url.trim().to_string(),
            _ => {}
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }

    /// Check that the configuration can be used to start the server.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.anki.url).map_err(|e| {
            Error::config(format!("invalid AnkiConnect URL '{}': {}", self.anki.url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "AnkiConnect URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.server.name.trim().is_empty() {
            return Err(Error::config("server name must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_anki_url_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_ANKI_URL", "http://10.0.0.5:8765");
        }
        let config = Config::from_env();
        assert_eq!(config.anki.url, "http://10.0.0.5:8765");
        unsafe {
            std::env::remove_var("MCP_ANKI_URL");
        }
    }

    #[test]
    fn test_anki_url_blank_is_ignored_and_value_trimmed() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_ANKI_URL", "   ");
        }
        assert_eq!(Config::from_env().anki.url, DEFAULT_ANKI_URL);
        unsafe {
            std::env::set_var("MCP_ANKI_URL", " http://localhost:8765 ");
        }
        assert_eq!(Config::from_env().anki.url, "http://localhost:8765");
        unsafe {
            std::env::remove_var("MCP_ANKI_URL");
        }
    }

    #[test]
    fn test_anki_url_default_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_ANKI_URL");
        }
        let config = Config::from_env();
        assert_eq!(config.anki.url, DEFAULT_ANKI_URL);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = Config::default();
        config.anki.url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.anki.url = "ftp://127.0.0.1:8765".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ftp"));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut config = Config::default();
        config.server.name = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
