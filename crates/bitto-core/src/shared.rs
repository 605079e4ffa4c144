//! Shared configuration used across the Bitto crates.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the comma-separated upstream credential pool.
pub const ENV_API_KEYS: &str = "GEMINI_API_KEYS";

/// Upstream generative-AI endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamSettings {
    /// API root, e.g. `https://generativelanguage.googleapis.com/v1beta`.
    pub base_url: String,
    /// Model name appended as `models/{model}:generateContent`.
    pub model: String,
    /// Per-attempt timeout in seconds.
    pub timeout_secs: u64,
    /// Credential pool. Falls back to [`ENV_API_KEYS`] when empty.
    #[serde(default)]
    pub api_keys: Vec<String>,
}

/// Fixed-window limiter settings for the chat routes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateLimitSettings {
    pub window_secs: u64,
    pub max_requests: u32,
}

/// Tunable weights for the keyword relevance matcher.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatcherSettings {
    pub phrase_weight: usize,
    pub min_score: usize,
    pub max_suggestions: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AssistantSettings {
    /// Number of most recent turns forwarded upstream.
    pub history_window: usize,
    /// Idle seconds after which a conversation is forgotten.
    pub session_ttl_secs: u64,
}

/// Global application configuration. Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    pub app_name: String,
    pub host: String,
    pub port: u16,
    /// Enables the HTTPS redirect and HSTS.
    #[serde(default)]
    pub production: bool,
    /// Directory the static site is served from.
    pub public_dir: String,
    /// JSON array of blog posts served under `/api/blog`.
    pub blog_posts_path: String,
    pub upstream: UpstreamSettings,
    pub rate_limit: RateLimitSettings,
    pub matcher: MatcherSettings,
    pub assistant: AssistantSettings,
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: env `BITTO__*` > `BITTO_CONFIG` path
    /// (default `config/gateway`) > defaults. An empty key pool is filled from `GEMINI_API_KEYS`.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path = std::env::var("BITTO_CONFIG").unwrap_or_else(|_| "config/gateway".to_string());
        let builder = Self::defaults()?;

        let path = Path::new(&config_path);
        let with_toml = path.with_extension("toml");
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else if with_toml.exists() {
            builder.add_source(config::File::from(with_toml.as_path()))
        } else {
            builder
        };

        let built = builder
            .add_source(
                config::Environment::with_prefix("BITTO")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("upstream.api_keys")
                    .try_parsing(true),
            )
            .build()?;

        let mut loaded: Self = built.try_deserialize()?;
        if loaded.upstream.api_keys.is_empty() {
            if let Ok(raw) = std::env::var(ENV_API_KEYS) {
                loaded.upstream.api_keys = parse_key_list(&raw);
            }
        } else {
            loaded.upstream.api_keys = loaded
                .upstream
                .api_keys
                .iter()
                .map(|k| k.trim().to_string())
                .filter(|k| !k.is_empty())
                .collect();
        }
        Ok(loaded)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("app_name", "Reinmax Creative")?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000_i64)?
            .set_default("production", false)?
            .set_default("public_dir", "public")?
            .set_default("blog_posts_path", "data/blog-posts.json")?
            .set_default("upstream.base_url", "https://generativelanguage.googleapis.com/v1beta")?
            .set_default("upstream.model", "gemini-2.5-pro")?
            .set_default("upstream.timeout_secs", 20_i64)?
            .set_default("rate_limit.window_secs", 900_i64)?
            .set_default("rate_limit.max_requests", 50_i64)?
            .set_default("matcher.phrase_weight", 3_i64)?
            .set_default("matcher.min_score", 10_i64)?
            .set_default("matcher.max_suggestions", 4_i64)?
            .set_default("assistant.history_window", 15_i64)?
            .set_default("assistant.session_ttl_secs", 1800_i64)
    }

    /// Built-in defaults only; no file or environment lookups.
    pub fn from_defaults() -> Result<Self, config::ConfigError> {
        Self::defaults()?.build()?.try_deserialize()
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Splits a comma-separated credential list, trimming entries and dropping empty ones.
pub fn parse_key_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}
