//! Liveness and blog endpoints.

use super::error_response;
use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;

/// GET /status
pub(crate) async fn status() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/blog
pub(crate) async fn blog_index(State(state): State<AppState>) -> Json<Value> {
    Json(Value::Array(state.blog.as_ref().clone()))
}

/// GET /api/blog/:slug
pub(crate) async fn blog_post(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    match state
        .blog
        .iter()
        .find(|post| post.get("slug").and_then(Value::as_str) == Some(slug.as_str()))
    {
        Some(post) => Json(post.clone()).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "Blog post not found."),
    }
}

/// Reads the blog post list once at start-up. A missing or malformed file yields no posts.
pub(crate) fn load_blog_posts(path: &str) -> Vec<Value> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(target: "bitto::gateway", path, error = %e, "Blog posts not loaded");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(posts)) => posts,
        Ok(_) => {
            tracing::warn!(target: "bitto::gateway", path, "Blog posts file is not a JSON array");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(target: "bitto::gateway", path, error = %e, "Blog posts file is not valid JSON");
            Vec::new()
        }
    }
}
