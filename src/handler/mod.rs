//! The insert handler.
//!
//! One invocation acquires one pooled connection, optionally makes sure the
//! target table exists, inserts one row, and releases the connection. The
//! connection guard is dropped on every exit path, which returns it to the
//! pool (or closes it if it broke mid-use).

mod event;
mod types;

use std::sync::Arc;

use chrono::{SubsecRound, Utc};
use log::{debug, error, info};
use serde_json::Value;
use sqlx::MySqlPool;

use crate::config::{Config, TABLE_NAME};
use crate::error_handling::{update_error_stats, DatabaseError, HandlerError, InvocationStats};
use crate::storage::{ensure_table, insert_inventory_image};

pub use event::EventFields;
pub use types::{HandlerResponse, InvocationContext};

/// Records inventory image references, one row per invocation.
///
/// Cheap to clone: the pool and the statistics are shared handles, so one
/// instance built at cold start serves every invocation.
#[derive(Clone)]
pub struct InsertHandler {
    pool: MySqlPool,
    ensure_schema: bool,
    stats: Arc<InvocationStats>,
}

impl InsertHandler {
    pub fn new(pool: MySqlPool, config: &Config) -> Self {
        Self {
            pool,
            ensure_schema: config.ensure_schema,
            stats: Arc::new(InvocationStats::new()),
        }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    pub fn stats(&self) -> &InvocationStats {
        &self.stats
    }

    /// Handles one invocation.
    ///
    /// Never fails: errors are logged and turned into an `"Error: ..."`
    /// response with status 500.
    pub async fn handle(&self, event: &Value, context: &InvocationContext) -> HandlerResponse {
        self.stats.record_invocation();
        info!("Event: {}", event);
        info!("Context: {}", context);

        match self.insert(event).await {
            Ok(id) => {
                self.stats.record_insert();
                info!("Inserted {} row id={}", TABLE_NAME, id);
                HandlerResponse::success()
            }
            Err(e) => {
                let error_type = update_error_stats(&self.stats, &e);
                error!("{}: {}", error_type, e);
                HandlerResponse::error(&e)
            }
        }
    }

    /// Inserts the row for `event` and returns its id.
    pub async fn insert(&self, event: &Value) -> Result<u64, HandlerError> {
        let fields = EventFields::from_event(event)?;
        // DATETIME columns hold whole seconds; truncate rather than let the server round
        let record = fields.into_record(Utc::now().trunc_subsecs(0));

        let mut conn = self.pool.acquire().await.map_err(DatabaseError::from)?;
        debug!(
            "Acquired connection ({} open, {} idle)",
            self.pool.size(),
            self.pool.num_idle()
        );

        if self.ensure_schema && ensure_table(&mut conn).await? {
            info!("Created missing table {}", TABLE_NAME);
        }

        let id = insert_inventory_image(&mut conn, &record).await?;
        Ok(id)
    }
}
