//! Axum-based gateway for the Reinmax Creative site: static pages, blog API, the
//! upstream chat proxy and the server-side assistant. Config-driven via CoreConfig.

mod handlers;
mod layers;
mod rate_limit;
mod sessions;

use axum::middleware;
use axum::routing::{delete, get, post};
use axum::Router;
use bitto_core::{CoreConfig, MatcherConfig, RelevanceMatcher};
use bitto_skills::{ChatAssistant, CredentialPool, GeminiTransport, UpstreamCaller, UpstreamTransport};
use handlers::{assistant, chat, site};
use rate_limit::RateLimiter;
use sessions::SessionStore;
use serde_json::Value;
use std::net::SocketAddr;
use std::path::Path as StdPath;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Clean URLs for standalone pages under the public dir.
const PAGE_ROUTES: [(&str, &str); 4] = [
    ("/booking", "booking.html"),
    ("/contacts", "contacts.html"),
    ("/offline", "offline.html"),
    ("/sitemap", "sitemap.html"),
];

const HOUSEKEEPING_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) upstream: Arc<UpstreamCaller>,
    pub(crate) assistant: Arc<ChatAssistant>,
    pub(crate) sessions: Arc<SessionStore>,
    pub(crate) blog: Arc<Vec<Value>>,
    pub(crate) limiter: Arc<RateLimiter>,
}

impl AppState {
    pub(crate) fn new(config: CoreConfig, transport: Arc<dyn UpstreamTransport>) -> Self {
        let pool = CredentialPool::new(config.upstream.api_keys.clone());
        let upstream = Arc::new(UpstreamCaller::new(pool, transport));
        let matcher = Arc::new(RelevanceMatcher::with_config(MatcherConfig::from(config.matcher)));
        let assistant = Arc::new(ChatAssistant::new(
            Arc::clone(&upstream),
            matcher,
            config.assistant.history_window,
        ));
        let blog = Arc::new(site::load_blog_posts(&config.blog_posts_path));
        let limiter = Arc::new(RateLimiter::new(config.rate_limit));
        let sessions = Arc::new(SessionStore::new(Duration::from_secs(config.assistant.session_ttl_secs)));
        Self {
            config: Arc::new(config),
            upstream,
            assistant,
            sessions,
            blog,
            limiter,
        }
    }
}

/// Pre-flight check: config loads, credentials present, public dir exists, port is free.
fn run_verify() -> Result<(), String> {
    let config = CoreConfig::load().map_err(|e| format!("Config load failed: {}", e))?;
    println!("Config loaded for {}", config.app_name);

    print!("Checking API credentials... ");
    match config.upstream.api_keys.len() {
        0 => println!("NONE (upstream chat disabled, local assistant only)"),
        n => println!("OK ({} configured)", n),
    }

    print!("Checking public dir {}... ", config.public_dir);
    if !StdPath::new(&config.public_dir).is_dir() {
        return Err(format!("Public dir {} is missing", config.public_dir));
    }
    println!("OK");

    let addr = config.bind_addr();
    print!("Checking {}... ", addr);
    match std::net::TcpListener::bind(&addr) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => {
            return Err(format!("{} BLOCKED: {}", addr, e));
        }
    }

    println!("\n✅ SUCCESS: All systems GO. Ready to start gateway.");
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[bitto-gateway] .env not loaded: {} (using system environment)", e);
    }

    if std::env::args().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("❌ PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(target: "bitto::gateway", error = %e, "Gateway stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = CoreConfig::load()?;
    let transport = GeminiTransport::new(&config.upstream)?;
    if config.upstream.api_keys.is_empty() {
        tracing::warn!(target: "bitto::gateway", "No API keys configured; /api/chat will return 500");
    }

    let state = AppState::new(config, Arc::new(transport));
    tokio::spawn(housekeeping_loop(state.clone()));

    let addr = state.config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        target: "bitto::gateway",
        credentials = state.upstream.pool_size(),
        production = state.config.production,
        "{} listening on {}",
        state.config.app_name,
        addr
    );

    axum::serve(
        listener,
        build_app(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}

/// Periodically forgets expired rate-limit windows and idle conversations.
async fn housekeeping_loop(state: AppState) {
    let mut interval = tokio::time::interval(HOUSEKEEPING_INTERVAL);
    loop {
        interval.tick().await;
        let now = Instant::now();
        state.limiter.prune_at(now);
        let dropped = state.sessions.prune_idle_at(now);
        tracing::debug!(
            target: "bitto::gateway",
            clients = state.limiter.tracked_clients(),
            sessions = state.sessions.len(),
            dropped,
            "Housekeeping pass"
        );
    }
}

fn build_app(state: AppState) -> Router {
    let public = StdPath::new(&state.config.public_dir).to_path_buf();
    let production = state.config.production;

    let api = Router::new()
        .route("/api/chat", post(chat::chat))
        .route("/api/assistant", post(assistant::assistant))
        .route("/api/assistant/:session_id", delete(assistant::end_session))
        .route_layer(middleware::from_fn_with_state(state.clone(), rate_limit::limit));

    let mut app = Router::new()
        .route("/status", get(site::status))
        .route("/api/blog", get(site::blog_index))
        .route("/api/blog/:slug", get(site::blog_post))
        .merge(api);

    for (route, file) in PAGE_ROUTES {
        app = app.route_service(route, ServeFile::new(public.join(file)));
    }
    app = app
        .route_service("/blog/:slug", ServeFile::new(public.join("post.html")))
        .nest_service("/fonts", ServeDir::new(public.join("assets").join("fonts")));

    let static_files = ServeDir::new(&public)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(ServeFile::new(public.join("404.html")));

    let app = app
        .fallback_service(static_files)
        .with_state(state.clone())
        .layer(middleware::from_fn(layers::html_no_cache))
        .layer(CompressionLayer::new());

    layers::security_headers(app, production)
        .layer(middleware::from_fn_with_state(state, layers::require_https))
}
