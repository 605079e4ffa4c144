//! `POST /api/assistant` and `DELETE /api/assistant/:session_id`: the server-side
//! two-tier assistant with per-visitor sessions.

use super::error_response;
use crate::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bitto_skills::AssistantOutcome;
use serde::{Deserialize, Serialize};

const MAX_SESSION_ID_LEN: usize = 128;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AssistantRequest {
    #[serde(default)]
    session_id: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AssistantResponse {
    session_id: String,
    #[serde(flatten)]
    outcome: AssistantOutcome,
}

fn session_id_or_new(requested: Option<String>) -> String {
    requested
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty() && id.len() <= MAX_SESSION_ID_LEN)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

pub(crate) async fn assistant(State(state): State<AppState>, body: Bytes) -> Response {
    let request: AssistantRequest = serde_json::from_slice(&body).unwrap_or_default();
    let message = request.message.unwrap_or_default();
    if message.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Missing 'message' in request body");
    }

    let session_id = session_id_or_new(request.session_id);
    let session = state.sessions.open(&session_id);
    let mut session = session.lock().await;
    match state.assistant.handle(&mut session, &message).await {
        Some(outcome) => Json(AssistantResponse { session_id, outcome }).into_response(),
        None => error_response(StatusCode::BAD_REQUEST, "Missing 'message' in request body"),
    }
}

pub(crate) async fn end_session(State(state): State<AppState>, Path(session_id): Path<String>) -> StatusCode {
    if state.sessions.remove(&session_id) {
        tracing::debug!(target: "bitto::chat", "Session cleared");
    }
    StatusCode::NO_CONTENT
}
