//! inventory_images library: record inventory image references in Cloud SQL
//!
//! This library provides a serverless handler that inserts one row into the
//! `InventoryImages` table of a MySQL instance reached through the Cloud SQL
//! proxy's Unix socket, plus the HTTP server that invokes it.
//!
//! # Example
//!
//! ```no_run
//! use inventory_images::{init_db_pool, Config, InsertHandler, InvocationContext};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let handler = InsertHandler::new(init_db_pool(&config), &config);
//!
//! let response = handler
//!     .handle(&json!({ "inventoryId": "sku-1" }), &InvocationContext::default())
//!     .await;
//! println!("{} ({})", response.message, response.status_code);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
pub mod error_handling;
pub mod handler;
pub mod initialization;
pub mod server;
pub mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, PoolSettings};
pub use error_handling::{ConfigError, DatabaseError, HandlerError, InitializationError};
pub use handler::{EventFields, HandlerResponse, InsertHandler, InvocationContext};
pub use server::{create_router, start_server};
pub use storage::{init_db_pool, verify_connection};
