//! Invocation server data structures.

use serde::Serialize;

/// JSON response for `/status` endpoint
#[derive(Serialize)]
pub struct StatusResponse {
    pub invocations: usize,
    pub inserted: usize,
    pub uptime_seconds: f64,
    pub errors: ErrorCounts,
    pub pool: PoolCounts,
}

#[derive(Serialize)]
pub struct ErrorCounts {
    pub total: usize,
    pub invalid_event: usize,
    pub connection_error: usize,
    pub pool_timeout: usize,
    pub sql_error: usize,
}

#[derive(Serialize)]
pub struct PoolCounts {
    /// Open connections, idle or checked out
    pub open: u32,
    pub idle: usize,
    pub max: u32,
}
