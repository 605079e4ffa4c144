pub(crate) mod assistant;
pub(crate) mod chat;
pub(crate) mod site;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// `{"error": message}` with the given status.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}
