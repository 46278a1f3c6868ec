// Shared test helpers for handler and database tests.
//
// Database-backed tests are ignored by default. Run them with
// `cargo test -- --ignored` once TEST_MYSQL_SOCKET_DIR points at a directory
// holding the Cloud SQL proxy socket for INSTANCE_CONNECTION_NAME, with DB_USER,
// DB_NAME and DB_PASSWORD set for a disposable test database.

use std::collections::HashMap;
use std::time::Duration;

use inventory_images::{init_db_pool, Config, InsertHandler};

/// Configuration whose socket path cannot exist, with a short acquire timeout.
#[allow(dead_code)] // Used by other test files
pub fn unreachable_config() -> Config {
    let env = HashMap::from([
        ("INSTANCE_CONNECTION_NAME", "test-project:us-central1:missing".to_string()),
        ("DB_USER", "app".to_string()),
        ("DB_NAME", "inventory".to_string()),
        ("DB_PASSWORD", "wrong-password".to_string()),
        ("CLOUDSQL_SOCKET_DIR", "/nonexistent-cloudsql".to_string()),
    ]);
    let mut config =
        Config::from_lookup(|key| env.get(key).cloned()).expect("static test config is valid");
    config.pool.acquire_timeout = Duration::from_secs(2);
    config
}

/// Handler over a pool that can never connect.
#[allow(dead_code)] // Used by other test files
pub fn unreachable_handler() -> InsertHandler {
    let config = unreachable_config();
    InsertHandler::new(init_db_pool(&config), &config)
}

/// Configuration for the real test database.
///
/// Database tests are `#[ignore]`d by default and run with
/// `cargo test -- --ignored`; running one without the database configured is
/// a setup error, not a pass.
#[allow(dead_code)] // Used by other test files
pub fn require_mysql_config() -> Config {
    let socket_dir = std::env::var("TEST_MYSQL_SOCKET_DIR")
        .expect("TEST_MYSQL_SOCKET_DIR must point at the test database socket directory");
    Config::from_lookup(|key| {
        if key == "CLOUDSQL_SOCKET_DIR" {
            Some(socket_dir.clone())
        } else {
            std::env::var(key).ok()
        }
    })
    .expect("INSTANCE_CONNECTION_NAME, DB_USER, DB_NAME and DB_PASSWORD must be set for the test database")
}
