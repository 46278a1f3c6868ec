//! Invocation server HTTP handlers.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use super::types::{ErrorCounts, PoolCounts, StatusResponse};
use crate::error_handling::ErrorType;
use crate::handler::{HandlerResponse, InsertHandler, InvocationContext};

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [("content-type", "text/plain; charset=utf-8")], self.message).into_response()
    }
}

/// Runs the insert handler for one request.
///
/// The body is the event: parsed as JSON when possible, otherwise passed
/// through as a string. An empty body is a null event.
pub async fn invoke_handler(
    State(handler): State<InsertHandler>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let event = parse_event(&body);
    let context = context_from_request(&method, &uri, &headers);
    handler.handle(&event, &context).await.into_response()
}

/// JSON status endpoint with invocation counters and pool occupancy
pub async fn status_handler(State(handler): State<InsertHandler>) -> Response {
    let stats = handler.stats();
    let pool = handler.pool();

    let response = StatusResponse {
        invocations: stats.invocations(),
        inserted: stats.inserted(),
        uptime_seconds: stats.uptime_seconds(),
        errors: ErrorCounts {
            total: stats.total_errors(),
            invalid_event: stats.get_error_count(ErrorType::InvalidEvent),
            connection_error: stats.get_error_count(ErrorType::ConnectionError),
            pool_timeout: stats.get_error_count(ErrorType::PoolTimeout),
            sql_error: stats.get_error_count(ErrorType::SqlError),
        },
        pool: PoolCounts {
            open: pool.size(),
            idle: pool.num_idle(),
            max: pool.options().get_max_connections(),
        },
    };

    let json = match serde_json::to_string_pretty(&response) {
        Ok(json) => json,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize status: {}", e),
            )
                .into_response();
        }
    };

    (StatusCode::OK, [("content-type", "application/json")], json).into_response()
}

pub(crate) fn parse_event(body: &[u8]) -> Value {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

pub(crate) fn context_from_request(
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
) -> InvocationContext {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    InvocationContext {
        event_id: header("ce-id"),
        event_type: header("ce-type"),
        source: header("ce-source"),
        time: header("ce-time"),
        method: Some(method.to_string()),
        path: Some(uri.path().to_string()),
    }
}
