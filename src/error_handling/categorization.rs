//! Error categorization.
//!
//! Maps handler and `sqlx` errors onto `ErrorType` so logs and counters can tell
//! connection problems apart from statement failures.

use sqlx::mysql::MySqlDatabaseError;

use super::stats::InvocationStats;
use super::types::{DatabaseError, ErrorType, HandlerError};

/// MySQL server error numbers raised while establishing a session.
const ER_DBACCESS_DENIED_ERROR: u16 = 1044;
const ER_ACCESS_DENIED_ERROR: u16 = 1045;
const ER_BAD_DB_ERROR: u16 = 1049;

/// Categorizes a `sqlx::Error` into an `ErrorType`.
///
/// Authentication and unknown-database errors come back from the server as
/// database errors, but they happen during connection setup, so they are
/// reported as connection errors.
pub fn categorize_sqlx_error(error: &sqlx::Error) -> ErrorType {
    match error {
        sqlx::Error::PoolTimedOut => ErrorType::PoolTimeout,
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Protocol(_)
        | sqlx::Error::Configuration(_)
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => ErrorType::ConnectionError,
        sqlx::Error::Database(db_err) => {
            match db_err
                .try_downcast_ref::<MySqlDatabaseError>()
                .map(MySqlDatabaseError::number)
            {
                Some(ER_DBACCESS_DENIED_ERROR | ER_ACCESS_DENIED_ERROR | ER_BAD_DB_ERROR) => {
                    ErrorType::ConnectionError
                }
                _ => ErrorType::SqlError,
            }
        }
        _ => ErrorType::SqlError,
    }
}

/// Categorizes a handler error into an `ErrorType`.
pub fn categorize_handler_error(error: &HandlerError) -> ErrorType {
    match error {
        HandlerError::InvalidEvent { .. } => ErrorType::InvalidEvent,
        HandlerError::Database(DatabaseError::SqlError(e)) => categorize_sqlx_error(e),
        HandlerError::Database(DatabaseError::UnexpectedRowCount(_)) => ErrorType::SqlError,
    }
}

/// Categorizes the error and records it in `stats`.
///
/// Returns the category so callers can include it in log output.
pub fn update_error_stats(stats: &InvocationStats, error: &HandlerError) -> ErrorType {
    let error_type = categorize_handler_error(error);
    stats.increment_error(error_type);
    error_type
}
