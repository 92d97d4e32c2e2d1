//! Configuration management for the MCP server.
//!
//! Configuration is assembled once at startup from defaults, environment
//! variables (optionally loaded from a `.env` file) and the `BASE_URL` /
//! `API_TOKEN` keyword arguments, then shared read-only as `Arc<Config>`.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Keyword introducing the backend base URL on the command line.
pub const BASE_URL_ARG: &str = "BASE_URL";

/// Keyword introducing the API token on the command line.
pub const API_TOKEN_ARG: &str = "API_TOKEN";

/// Usage line printed when the server refuses to start.
pub const USAGE: &str = "Usage: tiptap-collaboration-mcp API_TOKEN <token> BASE_URL <url>";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Collaboration backend location and credentials.
    pub backend: BackendConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Location of the collaboration backend and the token sent to it.
///
/// Both values are set during startup and only read afterwards. The base URL
/// is mandatory for every tool call; the token is optional.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    base_url: Option<String>,
    #[serde(skip_serializing)]
    api_token: Option<String>,
}

/// Custom Debug implementation to redact the token from logs.
impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl BackendConfig {
    /// Create a backend configuration with both values set.
    pub fn new(base_url: impl Into<String>, api_token: Option<String>) -> Self {
        Self {
            base_url: Some(base_url.into()),
            api_token,
        }
    }

    /// Store the base URL exactly as given. Trailing slashes are kept and
    /// end up in every request URL.
    pub fn set_base_url(&mut self, url: impl Into<String>) {
        self.base_url = Some(url.into());
    }

    /// Store the API token exactly as given.
    pub fn set_api_token(&mut self, token: impl Into<String>) {
        self.api_token = Some(token.into());
    }

    /// The configured base URL.
    ///
    /// An empty URL counts as missing. Fails only if a tool runs before
    /// startup configured the backend.
    pub fn base_url(&self) -> Result<&str> {
        self.base_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                Error::config(
                    "BASE_URL is required but not configured. Please provide BASE_URL argument.",
                )
            })
    }

    /// The configured token, if any. An empty string is returned as-is.
    pub fn token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    /// Whether a base URL has been configured.
    pub fn has_base_url(&self) -> bool {
        self.base_url().is_ok()
    }

    /// Whether a usable (non-empty) token has been configured.
    pub fn has_token(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "tiptap-collaboration-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            backend: BackendConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration pointing at the given backend.
    pub fn with_backend(base_url: impl Into<String>, api_token: Option<String>) -> Self {
        Self {
            backend: BackendConfig::new(base_url, api_token),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_BASE_URL`, `MCP_API_TOKEN`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(url) = std::env::var("MCP_BASE_URL") {
            config.backend.set_base_url(url);
        }

        if let Ok(token) = std::env::var("MCP_API_TOKEN") {
            config.backend.set_api_token(token);
        }

        config.transport = TransportConfig::from_env();

        config
    }

    /// Apply `API_TOKEN <token>` and `BASE_URL <url>` keyword pairs.
    ///
    /// Arguments win over environment variables. A keyword without a
    /// following value is ignored.
    pub fn with_args<I, T>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        if let Some(token) = keyword_value(&args, API_TOKEN_ARG) {
            self.backend.set_api_token(token);
        }

        if let Some(url) = keyword_value(&args, BASE_URL_ARG) {
            self.backend.set_base_url(url);
        }

        self
    }

    /// Check the startup preconditions.
    ///
    /// A missing base URL is fatal; a missing token only produces a warning.
    pub fn validate(&self) -> Result<()> {
        let base_url = self.backend.base_url()?;
        info!("Collaboration backend: {}", base_url);

        if !self.backend.has_token() {
            warn!("No API_TOKEN provided. Some operations may fail.");
        }

        Ok(())
    }
}

/// Value following the first occurrence of `keyword`, if any.
fn keyword_value(args: &[String], keyword: &str) -> Option<String> {
    let index = args.iter().position(|arg| arg == keyword)?;
    args.get(index + 1).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_args_set_backend() {
        let config = Config::default().with_args([
            "API_TOKEN",
            "secret",
            "BASE_URL",
            "http://localhost:8080",
        ]);
        assert_eq!(config.backend.base_url().unwrap(), "http://localhost:8080");
        assert_eq!(config.backend.token(), Some("secret"));
    }

    #[test]
    fn test_args_order_independent() {
        let config = Config::default().with_args([
            "BASE_URL",
            "https://collab.example.com",
            "API_TOKEN",
            "t",
        ]);
        assert_eq!(
            config.backend.base_url().unwrap(),
            "https://collab.example.com"
        );
        assert_eq!(config.backend.token(), Some("t"));
    }

    #[test]
    fn test_keyword_without_value_is_ignored() {
        let config = Config::default().with_args(["BASE_URL"]);
        assert!(!config.backend.has_base_url());
    }

    #[test]
    fn test_trailing_slash_preserved() {
        let config = Config::default().with_args(["BASE_URL", "http://localhost:8080/"]);
        assert_eq!(config.backend.base_url().unwrap(), "http://localhost:8080/");
    }

    #[test]
    fn test_missing_base_url_is_config_error() {
        let config = Config::default();
        let err = config.backend.base_url().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("BASE_URL is required"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_token_is_not_fatal() {
        let config = Config::with_backend("http://localhost:8080", None);
        assert!(config.backend.token().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_token_is_not_usable() {
        let config = Config::with_backend("http://localhost:8080", Some(String::new()));
        assert_eq!(config.backend.token(), Some(""));
        assert!(!config.backend.has_token());
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let backend = BackendConfig::new("http://localhost", Some("super_secret_key".to_string()));
        let debug_str = format!("{:?}", backend);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_empty_base_url_arg_is_missing() {
        let config = Config::default().with_args(["API_TOKEN", "t", "BASE_URL", ""]);
        assert!(!config.backend.has_base_url());
        assert!(matches!(config.backend.base_url(), Err(Error::Config(_))));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_base_url_env_is_missing() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_BASE_URL", "");
        }
        let config = Config::from_env();
        unsafe {
            std::env::remove_var("MCP_BASE_URL");
        }
        assert!(config.backend.base_url().is_err());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_token_not_serialized() {
        let config = Config::with_backend("http://localhost:8080", Some("super_secret_key".into()));
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("http://localhost:8080"));
        assert!(!json.contains("super_secret_key"));
    }

    #[test]
    fn test_backend_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_BASE_URL", "http://env-host:9000");
            std::env::set_var("MCP_API_TOKEN", "env_token");
        }
        let config = Config::from_env();
        assert_eq!(config.backend.base_url().unwrap(), "http://env-host:9000");
        assert_eq!(config.backend.token(), Some("env_token"));

        let config = config.with_args(["BASE_URL", "http://arg-host:9001"]);
        assert_eq!(config.backend.base_url().unwrap(), "http://arg-host:9001");
        unsafe {
            std::env::remove_var("MCP_BASE_URL");
            std::env::remove_var("MCP_API_TOKEN");
        }
    }
}
