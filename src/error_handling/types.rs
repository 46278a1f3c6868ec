//! Error type definitions.
//!
//! This module defines all error types used throughout the application, plus
//! the `ErrorType` categories the handler counts and logs.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for configuration loading.
///
/// Raised at cold start, before any connection attempt is made.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),

    /// `INSTANCE_CONNECTION_NAME` is not of the form `project:region:instance`.
    #[error("Invalid INSTANCE_CONNECTION_NAME '{0}': expected project:region:instance")]
    InvalidInstanceConnectionName(String),

    /// An optional variable is set but cannot be parsed.
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error binding the invocation server.
    #[error("Server bind error: {0}")]
    ServerBindError(String),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQL execution or connection error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// An insert reported a row count other than one.
    #[error("Insert affected {0} rows, expected 1")]
    UnexpectedRowCount(u64),
}

/// Error types for a single handler invocation.
#[derive(Error, Debug)]
pub enum HandlerError {
    /// The event payload carries a recognized field with the wrong JSON type.
    #[error("invalid event field `{field}`: {reason}")]
    InvalidEvent { field: &'static str, reason: String },

    /// Connecting, checking the schema, or inserting failed.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Categories of invocation failures.
///
/// Connection-side failures (socket unreachable, authentication, pool
/// exhaustion) are kept apart from SQL execution failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Event payload rejected before touching the database
    InvalidEvent,
    /// Socket unreachable, TLS/protocol failure, or rejected credentials
    ConnectionError,
    /// No pooled connection became available within the acquire timeout
    PoolTimeout,
    /// Statement failed (syntax, constraint violation, missing table)
    SqlError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidEvent => "Invalid event",
            ErrorType::ConnectionError => "Database connection error",
            ErrorType::PoolTimeout => "Connection pool timeout",
            ErrorType::SqlError => "SQL execution error",
        }
    }
}
