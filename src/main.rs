//! Main application entry point (server binary).
//!
//! This is a thin wrapper around the `inventory_images` library that handles:
//! - Environment variable loading (.env file)
//! - Configuration and logger initialization
//! - Building the shared pool and handler, then serving invocations
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use std::process;

use inventory_images::initialization::init_logger_with;
use inventory_images::{init_db_pool, start_server, verify_connection, Config, InsertHandler};

#[tokio::main]
async fn main() -> Result<()> {
    // A local .env is optional; deployed instances get real environment variables
    let _ = dotenvy::dotenv();

    // Missing or malformed settings stop the process before any connection attempt
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("inventory_images configuration error: {}", e);
            process::exit(1);
        }
    };

    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;
    log::debug!("Loaded configuration: {:?}", config);

    let pool = init_db_pool(&config);
    verify_connection(&pool).await.ok();

    let handler = InsertHandler::new(pool.clone(), &config);
    let served = start_server(config.port, handler)
        .await
        .context("Invocation server failed");

    pool.close().await;
    served
}
