//! Fixed-window request limiter keyed by client IP, applied to the API routes.

use crate::AppState;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use bitto_core::RateLimitSettings;
use dashmap::DashMap;
use std::net::SocketAddr;
use std::time::{Duration, Instant};

pub(crate) const LIMITED_MESSAGE: &str = "Too many requests from this IP, please try again after 15 minutes";

struct Window {
    started: Instant,
    count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Decision {
    pub(crate) allowed: bool,
    pub(crate) limit: u32,
    pub(crate) remaining: u32,
    /// Seconds until the client's window resets.
    pub(crate) reset_secs: u64,
    pub(crate) window_secs: u64,
}

pub(crate) struct RateLimiter {
    window: Duration,
    max_requests: u32,
    windows: DashMap<String, Window>,
}

impl RateLimiter {
    pub(crate) fn new(settings: RateLimitSettings) -> Self {
        Self {
            window: Duration::from_secs(settings.window_secs.max(1)),
            max_requests: settings.max_requests,
            windows: DashMap::new(),
        }
    }

    /// Counts one request for `client` at `now`.
    pub(crate) fn check_at(&self, client: &str, now: Instant) -> Decision {
        let mut entry = self
            .windows
            .entry(client.to_string())
            .or_insert_with(|| Window { started: now, count: 0 });
        if now.saturating_duration_since(entry.started) >= self.window {
            entry.started = now;
            entry.count = 0;
        }
        entry.count = entry.count.saturating_add(1);

        let elapsed = now.saturating_duration_since(entry.started);
        let left = self.window.saturating_sub(elapsed);
        Decision {
            allowed: entry.count <= self.max_requests,
            limit: self.max_requests,
            remaining: self.max_requests.saturating_sub(entry.count),
            reset_secs: left.as_secs() + u64::from(left.subsec_nanos() > 0),
            window_secs: self.window.as_secs(),
        }
    }

    pub(crate) fn check(&self, client: &str) -> Decision {
        self.check_at(client, Instant::now())
    }

    /// Drops windows that have fully elapsed.
    pub(crate) fn prune_at(&self, now: Instant) {
        let window = self.window;
        self.windows
            .retain(|_, w| now.saturating_duration_since(w.started) < window);
    }

    pub(crate) fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}

/// First `X-Forwarded-For` entry, else the peer address.
pub(crate) fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}

fn set_headers(headers: &mut HeaderMap, decision: &Decision) {
    headers.insert("ratelimit-limit", HeaderValue::from(decision.limit));
    headers.insert("ratelimit-remaining", HeaderValue::from(decision.remaining));
    headers.insert("ratelimit-reset", HeaderValue::from(decision.reset_secs));
    if let Ok(policy) = HeaderValue::from_str(&format!("{};w={}", decision.limit, decision.window_secs)) {
        headers.insert("ratelimit-policy", policy);
    }
}

pub(crate) async fn limit(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let client = client_ip(req.headers(), peer);
    let decision = state.limiter.check(&client);

    let mut response = if decision.allowed {
        next.run(req).await
    } else {
        tracing::warn!(target: "bitto::rate_limit", client = %client, "Rate limit exceeded");
        (StatusCode::TOO_MANY_REQUESTS, LIMITED_MESSAGE).into_response()
    };
    set_headers(response.headers_mut(), &decision);
    response
}
