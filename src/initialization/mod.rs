//! Application initialization.
//!
//! Cold-start setup that is not tied to a request: currently the logger. The
//! connection pool is built by `storage::init_db_pool`.
//!
//! All initialization functions return proper error types for error handling.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
