//! Inventory image insertion and lookup.
//!
//! Every value goes through a bound parameter; only the fixed table and column
//! names appear in the SQL text.

use sqlx::{MySql, MySqlConnection, QueryBuilder, Row};

use crate::error_handling::DatabaseError;

use super::models::{InventoryImageRecord, NewInventoryImage};

/// Builds the insert statement for `record`.
///
/// Only the optional columns the record carries are named, so omitted ones
/// take the table's default instead of an explicit NULL (which a `NOT NULL`
/// column rejects even when it has a default).
pub fn build_insert(record: &NewInventoryImage) -> QueryBuilder<'static, MySql> {
    let optional = [
        ("`path`", record.path.clone()),
        ("`type`", record.image_type.clone()),
        ("`description`", record.description.clone()),
    ];

    let mut builder = QueryBuilder::new("INSERT INTO `InventoryImages` (");

    let mut columns = builder.separated(", ");
    columns.push("`inventoryId`");
    for (column, value) in &optional {
        if value.is_some() {
            columns.push(*column);
        }
    }
    columns.push("`createdAt`");
    columns.push("`updatedAt`");
    columns.push_unseparated(") VALUES (");

    let mut values = builder.separated(", ");
    values.push_bind(record.inventory_id.clone());
    for value in optional.into_iter().filter_map(|(_, value)| value) {
        values.push_bind(value);
    }
    values.push_bind(record.created_at);
    values.push_bind(record.updated_at);
    values.push_unseparated(")");

    builder
}

/// Inserts one row into `InventoryImages`.
///
/// No retry and no duplicate detection: two calls with the same record
/// produce two rows.
///
/// # Returns
///
/// The auto-assigned `id` of the new row.
///
/// # Errors
///
/// Returns a `DatabaseError` if the statement fails or does not affect
/// exactly one row.
pub async fn insert_inventory_image(
    conn: &mut MySqlConnection,
    record: &NewInventoryImage,
) -> Result<u64, DatabaseError> {
    let mut builder = build_insert(record);
    let result = builder
        .build()
        .execute(conn)
        .await
        .map_err(DatabaseError::SqlError)?;

    if result.rows_affected() != 1 {
        return Err(DatabaseError::UnexpectedRowCount(result.rows_affected()));
    }

    Ok(result.last_insert_id())
}

/// Fetches a row by id, or `None` if it does not exist.
pub async fn fetch_inventory_image(
    conn: &mut MySqlConnection,
    id: u64,
) -> Result<Option<InventoryImageRecord>, DatabaseError> {
    let row = sqlx::query(
        "SELECT `id`, `inventoryId`, `path`, `type`, `description`, `createdAt`, `updatedAt`
         FROM `InventoryImages`
         WHERE `id` = ?",
    )
    .bind(id)
    .fetch_optional(conn)
    .await
    .map_err(DatabaseError::SqlError)?;

    row.map(|row| {
        Ok::<_, sqlx::Error>(InventoryImageRecord {
            id: row.try_get("id")?,
            inventory_id: row.try_get("inventoryId")?,
            path: row.try_get("path")?,
            image_type: row.try_get("type")?,
            description: row.try_get("description")?,
            created_at: row.try_get("createdAt")?,
            updated_at: row.try_get("updatedAt")?,
        })
    })
    .transpose()
    .map_err(DatabaseError::SqlError)
}
