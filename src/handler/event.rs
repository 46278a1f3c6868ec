//! Event payload interpretation.
//!
//! The event is opaque apart from four optional keys. Anything that is not a
//! JSON object, and any key not listed here, is ignored.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::config::DEFAULT_INVENTORY_ID;
use crate::error_handling::HandlerError;
use crate::storage::NewInventoryImage;

/// Width of the text columns in `InventoryImages`.
const MAX_FIELD_CHARS: usize = 255;

/// Record fields taken from an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFields {
    pub inventory_id: String,
    pub path: Option<String>,
    pub image_type: Option<String>,
    pub description: Option<String>,
}

impl Default for EventFields {
    fn default() -> Self {
        Self {
            inventory_id: DEFAULT_INVENTORY_ID.to_string(),
            path: None,
            image_type: None,
            description: None,
        }
    }
}

impl EventFields {
    /// Extracts `inventoryId`, `path`, `type` and `description` from `event`.
    ///
    /// `inventoryId` accepts a string or an integer and falls back to `"1"`.
    /// The text fields accept a string or null.
    ///
    /// # Errors
    ///
    /// Returns `HandlerError::InvalidEvent` when a recognized key holds the
    /// wrong JSON type, is empty (`inventoryId` only), or is wider than the
    /// column.
    pub fn from_event(event: &Value) -> Result<Self, HandlerError> {
        let Some(object) = event.as_object() else {
            return Ok(Self::default());
        };

        let inventory_id = match object.get("inventoryId") {
            None | Some(Value::Null) => DEFAULT_INVENTORY_ID.to_string(),
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(invalid("inventoryId", "must not be empty"));
                }
                trimmed.to_string()
            }
            Some(Value::Number(n)) if n.is_i64() || n.is_u64() => n.to_string(),
            Some(_) => return Err(invalid("inventoryId", "expected a string or integer")),
        };
        check_width("inventoryId", &inventory_id)?;

        Ok(Self {
            inventory_id,
            path: optional_text(object.get("path"), "path")?,
            image_type: optional_text(object.get("type"), "type")?,
            description: optional_text(object.get("description"), "description")?,
        })
    }

    /// Builds the row to insert, stamping both timestamps with `now`.
    pub fn into_record(self, now: DateTime<Utc>) -> NewInventoryImage {
        NewInventoryImage {
            inventory_id: self.inventory_id,
            path: self.path,
            image_type: self.image_type,
            description: self.description,
            created_at: now,
            updated_at: now,
        }
    }
}

fn optional_text(value: Option<&Value>, field: &'static str) -> Result<Option<String>, HandlerError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            check_width(field, s)?;
            Ok(Some(s.clone()))
        }
        Some(_) => Err(invalid(field, "expected a string")),
    }
}

fn check_width(field: &'static str, value: &str) -> Result<(), HandlerError> {
    if value.chars().count() > MAX_FIELD_CHARS {
        return Err(invalid(
            field,
            &format!("longer than {MAX_FIELD_CHARS} characters"),
        ));
    }
    Ok(())
}

fn invalid(field: &'static str, reason: &str) -> HandlerError {
    HandlerError::InvalidEvent {
        field,
        reason: reason.to_string(),
    }
}
