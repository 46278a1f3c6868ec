// storage/schema.rs
// Target table existence check and creation

use log::info;
use sqlx::MySqlConnection;

use crate::config::TABLE_NAME;
use crate::error_handling::DatabaseError;

/// DDL for the target table.
///
/// `path`, `type` and `description` are nullable because an event may omit them.
pub const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS `InventoryImages` (
    `id` INT AUTO_INCREMENT PRIMARY KEY,
    `inventoryId` VARCHAR(255) NOT NULL,
    `path` VARCHAR(255) NULL,
    `type` VARCHAR(255) NULL,
    `description` VARCHAR(255) NULL,
    `createdAt` DATETIME NOT NULL,
    `updatedAt` DATETIME NOT NULL
)";

/// Returns true if `table` exists in the connection's current database.
pub async fn table_exists(conn: &mut MySqlConnection, table: &str) -> Result<bool, DatabaseError> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*)
         FROM information_schema.tables
         WHERE table_schema = DATABASE()
         AND table_name = ?",
    )
    .bind(table)
    .fetch_one(conn)
    .await
    .map_err(DatabaseError::SqlError)?;

    Ok(count > 0)
}

/// Creates the target table if it is missing.
///
/// Returns `true` when the table was created by this call.
pub async fn ensure_table(conn: &mut MySqlConnection) -> Result<bool, DatabaseError> {
    if table_exists(&mut *conn, TABLE_NAME).await? {
        return Ok(false);
    }

    sqlx::query(CREATE_TABLE_SQL)
        .execute(&mut *conn)
        .await
        .map_err(DatabaseError::SqlError)?;

    info!("Created table {}", TABLE_NAME);
    Ok(true)
}
