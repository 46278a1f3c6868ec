// storage/mod.rs
// Database operations module

pub mod insert;
pub mod models;
pub mod pool;
pub mod schema;

// Re-export commonly used items
pub use insert::{build_insert, fetch_inventory_image, insert_inventory_image};
pub use models::{InventoryImageRecord, NewInventoryImage};
pub use pool::{connect_options, init_db_pool, verify_connection};
pub use schema::{ensure_table, table_exists, CREATE_TABLE_SQL};
