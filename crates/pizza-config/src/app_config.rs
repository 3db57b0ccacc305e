//! Application configuration structures.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Server configuration. The listening port has no default.
    pub server: ServerConfig,

    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Creates a configuration with the given server section and defaults elsewhere.
    #[must_use]
    pub fn new(server: ServerConfig) -> Self {
        Self {
            app: AppMetadata::default(),
            server,
            database: DatabaseConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "pizza".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listening host.
    #[serde(default = "default_host")]
    pub host: String,
    /// Listening port.
    pub port: u16,
    /// Enable permissive CORS.
    #[serde(default)]
    pub cors_enabled: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

impl ServerConfig {
    /// Creates a server configuration listening on all interfaces.
    #[must_use]
    pub fn new(port: u16) -> Self {
        Self {
            host: default_host(),
            port,
            cors_enabled: false,
        }
    }

    /// Returns the listening address.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration.
///
/// Mirrors the libpq keyword set the deployment provides: host, user,
/// database name, password and SSL mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// Database user.
    pub user: String,
    /// Database name.
    pub name: String,
    /// Database password.
    pub password: String,
    /// libpq SSL mode (disable, allow, prefer, require, verify-ca, verify-full).
    pub ssl_mode: String,
    /// Minimum connection pool size.
    pub min_connections: u32,
    /// Maximum connection pool size.
    pub max_connections: u32,
    /// Pool acquire timeout in seconds.
    pub acquire_timeout_secs: u64,
    /// Idle timeout in seconds.
    pub idle_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            name: "postgres".to_string(),
            password: String::new(),
            ssl_mode: "require".to_string(),
            min_connections: 1,
            max_connections: 10,
            acquire_timeout_secs: 30,
            idle_timeout_secs: 600,
        }
    }
}

impl DatabaseConfig {
    /// Returns the acquire timeout as a Duration.
    #[must_use]
    pub const fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Returns the idle timeout as a Duration.
    #[must_use]
    pub const fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log format (json, pretty).
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl ObservabilityConfig {
    /// Returns true if logs should be emitted as JSON lines.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
