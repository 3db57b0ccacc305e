//! Unified error types for all layers of the application.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the pizza backend.
///
/// Every request-level failure is terminal for its request: the first error a
/// handler meets is mapped straight to an HTTP status and a plain-text body
/// carrying the message below.
#[derive(Error, Debug)]
pub enum PizzaError {
    // ============ Request Errors ============
    /// The request body could not be decoded into the expected shape.
    #[error("{0}")]
    Decode(String),

    /// Login/password pair did not match a stored user.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// A looked-up record does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    // ============ Infrastructure Errors ============
    /// A storage call failed (constraint violation, network drop, ...).
    #[error("{0}")]
    Storage(String),

    /// A stored value could not be decoded into its domain type.
    #[error("{0}")]
    Codec(String),

    /// The connection pool could not be established or failed its liveness check.
    #[error("Database connection error: {0}")]
    Connection(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PizzaError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Decode(_) => 400,
            Self::InvalidCredentials => 401,
            Self::NotFound(_) => 404,
            Self::Storage(_)
            | Self::Codec(_)
            | Self::Connection(_)
            | Self::Configuration(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Decode(_) => "DECODE_ERROR",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Storage(_) => "STORAGE_ERROR",
            Self::Codec(_) => "CODEC_ERROR",
            Self::Connection(_) => "CONNECTION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode<T: Into<String>>(message: T) -> Self {
        Self::Decode(message.into())
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub const fn not_found(resource_type: &'static str) -> Self {
        Self::NotFound(resource_type)
    }

    /// Creates a storage error.
    #[must_use]
    pub fn storage<T: Into<String>>(message: T) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a codec error.
    #[must_use]
    pub fn codec<T: Into<String>>(message: T) -> Self {
        Self::Codec(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for PizzaError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => Self::Storage(db_err.message().to_string()),
            _ => Self::Storage(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for PizzaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Codec(err.to_string())
    }
}
