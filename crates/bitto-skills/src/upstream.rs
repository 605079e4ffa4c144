//! Resilient upstream caller: delivers one logical request through a rotating
//! pool of API credentials, moving to the next credential whenever an attempt fails.
//!
//! Rotation is stateful. The caller owns a cursor shared by all requests; every
//! call takes the current position as its starting offset and advances it by one
//! (atomically, wrapping at the pool size), then walks the whole pool once.
//! Dropping the returned future abandons the in-flight attempt and tries nothing further.

use bitto_core::UpstreamSettings;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// One failed attempt with one credential. Never shown to clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttemptError {
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("upstream request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("unparseable upstream body: {0}")]
    InvalidBody(String),
}

/// Fatal outcomes of [`UpstreamCaller::call`]. `Display` is safe to return to clients.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// No credentials configured; nothing was attempted.
    #[error("The AI service is not configured on the server.")]
    Configuration,
    /// Every credential failed. `last` is for server-side logs only.
    #[error("The AI service is currently unavailable. All API keys failed.")]
    Unavailable { attempts: usize, last: AttemptError },
}

/// A single request/response exchange with the upstream service using one credential.
#[async_trait::async_trait]
pub trait UpstreamTransport: Send + Sync {
    async fn send(&self, credential: &str, payload: &Value) -> Result<Value, AttemptError>;
}

/// Opaque identifier for logs: first four characters and an ellipsis.
pub fn redact(credential: &str) -> String {
    let head: String = credential.chars().take(4).collect();
    format!("{}...", head)
}

/// Ordered set of interchangeable credentials, fixed at start-up.
#[derive(Clone, Default)]
pub struct CredentialPool {
    keys: Vec<String>,
}

impl CredentialPool {
    pub fn new(keys: Vec<String>) -> Self {
        Self { keys }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn get(&self, index: usize) -> &str {
        &self.keys[index % self.keys.len()]
    }
}

impl std::fmt::Debug for CredentialPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.keys.iter().map(|k| redact(k)))
            .finish()
    }
}

pub struct UpstreamCaller {
    pool: CredentialPool,
    transport: Arc<dyn UpstreamTransport>,
    /// Starting offset for the next call. Always `< pool.len()` (or 0 for an empty pool).
    cursor: AtomicUsize,
}

impl UpstreamCaller {
    pub fn new(pool: CredentialPool, transport: Arc<dyn UpstreamTransport>) -> Self {
        Self {
            pool,
            transport,
            cursor: AtomicUsize::new(0),
        }
    }

    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor.load(Ordering::Acquire)
    }

    /// Claims the current cursor position and advances it by one, wrapping at the pool size.
    fn claim_start(&self) -> usize {
        let n = self.pool.len();
        self.cursor
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |c| Some((c + 1) % n))
            .unwrap_or_else(|current| current)
    }

    /// Tries every credential once, starting at the claimed offset, and returns the first
    /// successful body.
    pub async fn call(&self, payload: &Value) -> Result<Value, UpstreamError> {
        let n = self.pool.len();
        if n == 0 {
            tracing::error!(target: "bitto::upstream", "No API credentials configured");
            return Err(UpstreamError::Configuration);
        }

        let start = self.claim_start();
        let mut last = None;
        for offset in 0..n {
            let credential = self.pool.get(start + offset);
            match self.transport.send(credential, payload).await {
                Ok(body) => {
                    tracing::info!(
                        target: "bitto::upstream",
                        credential = %redact(credential),
                        attempts = offset + 1,
                        "Upstream call succeeded"
                    );
                    return Ok(body);
                }
                Err(e) => {
                    tracing::warn!(
                        target: "bitto::upstream",
                        credential = %redact(credential),
                        error = %e,
                        "API key failed, retrying with next key"
                    );
                    last = Some(e);
                }
            }
        }

        match last {
            Some(last) => {
                tracing::error!(
                    target: "bitto::upstream",
                    attempts = n,
                    last_error = %last,
                    "All API keys failed"
                );
                Err(UpstreamError::Unavailable { attempts: n, last })
            }
            None => Err(UpstreamError::Configuration),
        }
    }
}

/// Gemini `generateContent` over HTTPS. The credential travels in the
/// `x-goog-api-key` header so it never appears in URLs or error messages.
pub struct GeminiTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl GeminiTransport {
    pub fn new(settings: &UpstreamSettings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs.max(1)))
            .build()?;
        Ok(Self {
            client,
            endpoint: Self::endpoint_for(&settings.base_url, &settings.model),
        })
    }

    pub fn endpoint_for(base_url: &str, model: &str) -> String {
        format!("{}/models/{}:generateContent", base_url.trim_end_matches('/'), model)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl UpstreamTransport for GeminiTransport {
    async fn send(&self, credential: &str, payload: &Value) -> Result<Value, AttemptError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", credential)
            .json(payload)
            .send()
            .await
            .map_err(attempt_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AttemptError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AttemptError::InvalidBody(e.without_url().to_string()))
    }
}

fn attempt_error(e: reqwest::Error) -> AttemptError {
    if e.is_timeout() {
        AttemptError::Timeout
    } else {
        AttemptError::Network(e.without_url().to_string())
    }
}
