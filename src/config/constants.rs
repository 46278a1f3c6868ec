//! Configuration constants.
//!
//! This module defines the fixed values used by the handler: the target table,
//! connection pool limits, and defaults for the optional environment settings.

use std::time::Duration;

/// Table every invocation inserts into.
pub const TABLE_NAME: &str = "InventoryImages";

// Connection pool limits
/// Connections the pool keeps available under normal load
pub const POOL_SIZE: u32 = 5;
/// Extra connections the pool may open beyond `POOL_SIZE` during bursts
pub const POOL_MAX_OVERFLOW: u32 = 2;
/// How long an invocation waits for a pooled connection before failing
pub const POOL_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);
/// Connections older than this are closed and replaced on next checkout
pub const POOL_RECYCLE: Duration = Duration::from_secs(1800);

/// Directory the Cloud SQL proxy exposes instance sockets under.
pub const DEFAULT_SOCKET_DIR: &str = "/cloudsql";
/// HTTP port used when `PORT` is unset (Cloud Run convention).
pub const DEFAULT_PORT: u16 = 8080;

/// `inventoryId` written when the event does not carry one.
pub const DEFAULT_INVENTORY_ID: &str = "1";

pub const SUCCESS_MESSAGE: &str = "Record inserted successfully.";
pub const ERROR_PREFIX: &str = "Error: ";

// Environment variable names
pub const ENV_INSTANCE_CONNECTION_NAME: &str = "INSTANCE_CONNECTION_NAME";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_NAME: &str = "DB_NAME";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
pub const ENV_SOCKET_DIR: &str = "CLOUDSQL_SOCKET_DIR";
pub const ENV_PORT: &str = "PORT";
pub const ENV_ENSURE_SCHEMA: &str = "ENSURE_SCHEMA";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
