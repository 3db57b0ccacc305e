//! Configuration validation module.
//!
//! Fails fast on invalid configuration rather than at first use.

use crate::AppConfig;
use std::fmt;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { name: String, value: u16 },
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// Pool size exceeds maximum allowed.
    PoolSizeTooLarge { value: u32, maximum: u32 },
    /// Database host is empty.
    MissingDatabaseHost,
    /// SSL mode is not a libpq mode name.
    InvalidSslMode { value: String },
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String, value: u64 },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// Log format is invalid.
    InvalidLogFormat { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { name, value } => {
                write!(f, "Invalid port for {name}: {value} (must be 1-65535)")
            }
            Self::InvalidPoolSize { min, max } => {
                write!(
                    f,
                    "Invalid pool size: min ({min}) cannot be greater than max ({max})"
                )
            }
            Self::PoolSizeTooLarge { value, maximum } => {
                write!(f, "Pool size {value} exceeds maximum allowed ({maximum})")
            }
            Self::MissingDatabaseHost => write!(f, "Database host cannot be empty"),
            Self::InvalidSslMode { value } => {
                write!(
                    f,
                    "Invalid SSL mode: '{value}' (valid: disable, allow, prefer, require, verify-ca, verify-full)"
                )
            }
            Self::NonPositiveTimeout { name, value } => {
                write!(f, "Timeout '{name}' must be positive, got {value}")
            }
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{value}' (valid: trace, debug, info, warn, error)"
                )
            }
            Self::InvalidLogFormat { value } => {
                write!(f, "Invalid log format: '{value}' (valid: pretty, json)")
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Maximum connection pool size.
    const MAX_POOL_SIZE: u32 = 1000;
    /// libpq SSL mode names.
    const VALID_SSL_MODES: &'static [&'static str] =
        &["disable", "allow", "prefer", "require", "verify-ca", "verify-full"];
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];
    /// Valid log formats.
    const VALID_LOG_FORMATS: &'static [&'static str] = &["pretty", "json"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_server(&config.server, &mut errors);
        Self::validate_database(&config.database, &mut errors);
        Self::validate_observability(&config.observability, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(config: &crate::ServerConfig, errors: &mut Vec<ConfigValidationError>) {
        // 0 would bind an ephemeral port nobody knows about
        if config.port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                name: "server.port".to_string(),
                value: config.port,
            });
        }
    }

    fn validate_database(config: &crate::DatabaseConfig, errors: &mut Vec<ConfigValidationError>) {
        if config.host.trim().is_empty() {
            errors.push(ConfigValidationError::MissingDatabaseHost);
        }

        if config.port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                name: "database.port".to_string(),
                value: config.port,
            });
        }

        if !Self::VALID_SSL_MODES.contains(&config.ssl_mode.to_lowercase().as_str()) {
            errors.push(ConfigValidationError::InvalidSslMode {
                value: config.ssl_mode.clone(),
            });
        }

        if config.min_connections > config.max_connections {
            errors.push(ConfigValidationError::InvalidPoolSize {
                min: config.min_connections,
                max: config.max_connections,
            });
        }
        if config.max_connections > Self::MAX_POOL_SIZE {
            errors.push(ConfigValidationError::PoolSizeTooLarge {
                value: config.max_connections,
                maximum: Self::MAX_POOL_SIZE,
            });
        }

        if config.acquire_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.acquire_timeout_secs".to_string(),
                value: 0,
            });
        }
    }

    fn validate_observability(
        config: &crate::ObservabilityConfig,
        errors: &mut Vec<ConfigValidationError>,
    ) {
        if !Self::VALID_LOG_LEVELS.contains(&config.log_level.to_lowercase().as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.log_level.clone(),
            });
        }
        if !Self::VALID_LOG_FORMATS.contains(&config.log_format.to_lowercase().as_str()) {
            errors.push(ConfigValidationError::InvalidLogFormat {
                value: config.log_format.clone(),
            });
        }
    }
}
