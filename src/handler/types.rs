//! Handler input and output types.

use serde::Serialize;

use crate::config::{ERROR_PREFIX, SUCCESS_MESSAGE};

/// Invocation metadata supplied by the runtime.
///
/// Populated from CloudEvents binary-mode headers when present. Logged only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvocationContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl std::fmt::Display for InvocationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => write!(f, "{:?}", self),
        }
    }
}

/// Message and HTTP-style status code returned by every invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    pub message: String,
    pub status_code: u16,
}

impl HandlerResponse {
    pub fn success() -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            status_code: 200,
        }
    }

    /// `"Error: {details}"` with status 500.
    pub fn error(details: impl std::fmt::Display) -> Self {
        Self {
            message: format!("{ERROR_PREFIX}{details}"),
            status_code: 500,
        }
    }
}
