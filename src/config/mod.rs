//! Configuration loading and management
//!
//! Configuration comes from an optional YAML file, then environment
//! overrides. Every section and field has a default:
//!
//! ```yaml
//! server:
//!   host: 127.0.0.1
//!   port: 3000
//! database:
//!   url: postgres://localhost/biztime
//!   max_connections: 5
//! log:
//!   filter: info
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding `server.host`
pub const ENV_HOST: &str = "BIZTIME_HOST";
/// Environment variable overriding `server.port`
pub const ENV_PORT: &str = "BIZTIME_PORT";
/// Environment variable overriding `database.url`
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// `host:port` suitable for binding
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Relational store settings
///
/// Without a `url` the server runs on the in-memory store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 5,
        }
    }
}

/// Logging settings; `RUST_LOG` takes precedence over `filter`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("Invalid config file {}", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load the optional file, then apply process environment overrides
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup` (the process environment in production)
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = port
                .parse()
                .with_context(|| format!("{} must be a port number, got '{}'", ENV_PORT, port))?;
        }
        if let Some(url) = lookup(ENV_DATABASE_URL).filter(|url| !url.is_empty()) {
            self.database.url = Some(url);
        }
        Ok(self)
    }
}
