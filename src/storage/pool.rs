//! Database connection pool management.
//!
//! This module builds the process-wide MySQL pool that reaches the Cloud SQL
//! instance through its Unix socket, with:
//! - A size cap of `pool_size + max_overflow` connections
//! - An acquisition timeout
//! - Connection recycling after a maximum lifetime

use log::{info, warn};
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use crate::config::Config;
use crate::error_handling::DatabaseError;

/// Builds the connection descriptor: credentials, database, and socket path.
pub fn connect_options(config: &Config) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .socket(config.socket_path())
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name)
}

/// Initializes the process-wide connection pool.
///
/// The pool connects lazily: no connection is opened until the first
/// invocation acquires one, so a cold start never blocks on the database and
/// connection failures surface as handler errors.
pub fn init_db_pool(config: &Config) -> MySqlPool {
    let settings = &config.pool;
    info!(
        "Database pool configured for {} via {} (size {}, overflow {}, timeout {}s, recycle {}s)",
        config.db_name,
        config.socket_path().display(),
        settings.pool_size,
        settings.max_overflow,
        settings.acquire_timeout.as_secs(),
        settings.recycle.as_secs()
    );

    MySqlPoolOptions::new()
        .min_connections(0)
        .max_connections(settings.max_connections())
        .acquire_timeout(settings.acquire_timeout)
        .max_lifetime(settings.recycle)
        .connect_lazy_with(connect_options(config))
}

/// Opens one connection and runs `SELECT 1` against it.
///
/// Used at cold start to warm the pool. A failure is logged and returned but is
/// not fatal to the caller: the proxy socket may appear after startup.
pub async fn verify_connection(pool: &MySqlPool) -> Result<(), DatabaseError> {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => {
            info!("Database connection verified");
            Ok(())
        }
        Err(e) => {
            warn!("Database connection check failed: {e}");
            Err(DatabaseError::SqlError(e))
        }
    }
}
