//! Configuration management for the tool servers.
//!
//! All configuration comes from the process environment (with `.env` support
//! via dotenvy). One `Config` carries the sections for every service; the
//! `MCP_SERVICE` variable decides which service a process actually serves.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Default Merriam-Webster collegiate dictionary endpoint prefix.
const DEFAULT_DICTIONARY_BASE_URL: &str =
    "https://www.dictionaryapi.com/api/v3/references/collegiate/json/";

/// Default NewsAPI.org base URL.
const DEFAULT_NEWS_BASE_URL: &str = "https://newsapi.org/v2";

/// Which tool service this process serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Dictionary,
    News,
    Todo,
}

impl ServiceKind {
    /// Parse a service name as given in `MCP_SERVICE`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "dictionary" => Some(Self::Dictionary),
            "news" => Some(Self::News),
            "todo" => Some(Self::Todo),
            _ => None,
        }
    }

    /// Service name used in logs and default server names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dictionary => "dictionary",
            Self::News => "news",
            Self::Todo => "todo",
        }
    }

    /// Default server name reported to MCP clients.
    pub fn default_server_name(&self) -> String {
        format!("{}-mcp", self.as_str())
    }
}

/// Main configuration structure for the tool servers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Which service this process serves.
    pub service: ServiceKind,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Dictionary service configuration.
    pub dictionary: DictionaryConfig,

    /// News service configuration.
    pub news: NewsConfig,

    /// Todo service configuration.
    pub todo: TodoConfig,
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

/// Configuration for the dictionary service.
#[derive(Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Merriam-Webster API key. Lookups fail with an `Error:` sentinel
    /// value when unset.
    pub api_key: Option<String>,

    /// Lookup URL prefix; the word is appended directly.
    pub base_url: String,

    /// Timeout for outbound lookups, in seconds.
    pub timeout_secs: u64,
}

/// Custom Debug implementation to redact the API key from logs.
impl std::fmt::Debug for DictionaryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Configuration for the news service.
#[derive(Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    /// NewsAPI.org API key. Requests fail with a propagated error when
    /// unset (the service does not translate failures into data).
    pub api_key: Option<String>,

    /// NewsAPI base URL.
    pub base_url: String,
}

/// Custom Debug implementation to redact the API key from logs.
impl std::fmt::Debug for NewsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Configuration for the todo service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoConfig {
    /// Path of the CSV task table. Created header-only at startup if absent.
    pub tasks_file: PathBuf,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_DICTIONARY_BASE_URL.to_string(),
            timeout_secs: 5,
        }
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_NEWS_BASE_URL.to_string(),
        }
    }
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            tasks_file: PathBuf::from("tasks.csv"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let service = ServiceKind::Dictionary;
        Self {
            server: ServerConfig {
                name: service.default_server_name(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            service,
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            dictionary: DictionaryConfig::default(),
            news: NewsConfig::default(),
            todo: TodoConfig::default(),
        }
    }
}

impl Config {
    /// Create a default configuration for the given service.
    pub fn for_service(service: ServiceKind) -> Self {
        let mut config = Self::default();
        config.service = service;
        config.server.name = service.default_server_name();
        config
    }

    /// Load configuration from environment variables.
    ///
    /// `MCP_SERVICE` selects the service; per-service settings use their own
    /// variables (`DICTIONARY_API_KEY`, `NEWS_API_KEY`, `TASKS_FILE`, ...).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let service = match std::env::var("MCP_SERVICE") {
            Ok(value) => match ServiceKind::parse(&value) {
                Some(service) => service,
                None => {
                    warn!(
                        "Unknown MCP_SERVICE '{}', expected dictionary, news, or todo; \
                         defaulting to dictionary",
                        value
                    );
                    ServiceKind::Dictionary
                }
            },
            Err(_) => {
                warn!("MCP_SERVICE not set, defaulting to the dictionary service");
                ServiceKind::Dictionary
            }
        };

        let mut config = Self::for_service(service);

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(api_key) = std::env::var("DICTIONARY_API_KEY") {
            config.dictionary.api_key = Some(api_key);
            info!("Dictionary API key loaded from environment");
        } else if service == ServiceKind::Dictionary {
            warn!("DICTIONARY_API_KEY not set - dictionary lookups will fail");
        }

        if let Ok(base_url) = std::env::var("DICTIONARY_BASE_URL") {
            config.dictionary.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("DICTIONARY_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => config.dictionary.timeout_secs = secs,
                Err(_) => warn!("Invalid DICTIONARY_TIMEOUT_SECS '{}', keeping default", timeout),
            }
        }

        if let Ok(api_key) = std::env::var("NEWS_API_KEY") {
            config.news.api_key = Some(api_key);
            info!("News API key loaded from environment");
        } else if service == ServiceKind::News {
            warn!("NEWS_API_KEY not set - news queries will fail");
        }

        if let Ok(base_url) = std::env::var("NEWS_BASE_URL") {
            config.news.base_url = base_url;
        }

        if let Ok(path) = std::env::var("TASKS_FILE") {
            config.todo.tasks_file = PathBuf::from(path);
        } else if service == ServiceKind::Todo {
            warn!(
                "TASKS_FILE not set - using {:?} in the working directory",
                config.todo.tasks_file
            );
        }

        config
    }
}

impl Default for ServiceKind {
    fn default() -> Self {
        Self::Dictionary
    }
}
