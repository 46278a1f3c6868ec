//! Error handling and invocation statistics.
//!
//! This module provides:
//! - Error type definitions (configuration, initialization, database, handler)
//! - Error categorization (connection vs. SQL vs. pool timeout)
//! - Invocation statistics tracking

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_handler_error, categorize_sqlx_error, update_error_stats};
pub use stats::InvocationStats;
pub use types::{ConfigError, DatabaseError, ErrorType, HandlerError, InitializationError};
