// storage/models.rs
// Row types for the InventoryImages table

use chrono::{DateTime, NaiveDateTime, Utc};

/// A row about to be inserted.
///
/// `created_at` and `updated_at` carry the same invocation timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInventoryImage {
    pub inventory_id: String,
    pub path: Option<String>,
    pub image_type: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A row as stored in `InventoryImages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryImageRecord {
    pub id: i32,
    pub inventory_id: String,
    pub path: Option<String>,
    pub image_type: Option<String>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
