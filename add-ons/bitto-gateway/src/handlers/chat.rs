//! `POST /api/chat`: forwards a client-built conversation to the upstream model through
//! the rotating credential pool.

use super::error_response;
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

/// JavaScript-style truthiness for a JSON value.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Upstream payload from a request body: `{contents, systemInstruction?}`, or `None`
/// when `contents` is missing or falsy.
pub(crate) fn build_payload(body: &Value) -> Option<Value> {
    let contents = body.get("contents").filter(|c| is_present(c))?;
    let mut payload = json!({ "contents": contents });
    if let Some(instruction) = body.get("systemInstruction").filter(|i| !i.is_null()) {
        payload["systemInstruction"] = instruction.clone();
    }
    Some(payload)
}

pub(crate) async fn chat(State(state): State<AppState>, body: Bytes) -> Response {
    let body: Value = serde_json::from_slice(&body).unwrap_or_else(|_| json!({}));
    let Some(payload) = build_payload(&body) else {
        tracing::debug!(target: "bitto::chat", "Rejected chat request without contents");
        return error_response(StatusCode::BAD_REQUEST, "Missing 'contents' in request body");
    };

    match state.upstream.call(&payload).await {
        Ok(data) => Json(data).into_response(),
        Err(e) => error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falsy_contents_count_as_missing() {
        for body in [
            json!({}),
            json!({ "contents": null }),
            json!({ "contents": false }),
            json!({ "contents": 0 }),
            json!({ "contents": "" }),
            json!([1, 2]),
        ] {
            assert!(build_payload(&body).is_none(), "{}", body);
        }
    }

    #[test]
    fn payload_keeps_only_contents_and_instruction() {
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": "hi" }] }],
            "systemInstruction": { "parts": [{ "text": "be brief" }] },
            "apiKey": "client-supplied",
        });
        let payload = build_payload(&body).unwrap();
        assert_eq!(payload.as_object().unwrap().len(), 2);
        assert_eq!(payload["systemInstruction"]["parts"][0]["text"], "be brief");

        let bare = build_payload(&json!({ "contents": "hello" })).unwrap();
        assert_eq!(bare, json!({ "contents": "hello" }));
    }
}
