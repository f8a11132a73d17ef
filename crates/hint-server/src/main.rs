//! Hint Server
//!
//! Axum-based HTTP API over the hint registry: stateless lookups, per-learner
//! disclosure sessions, and the agent tool endpoints.

mod config;
mod handlers;
mod state;

use std::sync::Arc;

use axum::{routing::{get, post}, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hint_core::{HintRegistry, MemorySessionStore, SessionStore};

use crate::config::ServerConfig;
use crate::handlers::{
    end_session, execute_tool, get_hint, get_session, get_summary, get_topic, health_check,
    list_categories, list_sessions, list_tools, list_topics, next_hint, open_session,
    reset_session, reveal_session, reveal_topic,
};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    // Build the registry once; it is never mutated afterwards
    let registry = match &config.hints_file {
        Some(path) => {
            tracing::info!("Loading hint catalog from {}", path.display());
            HintRegistry::from_json_file(path)?
        }
        None => HintRegistry::builtin()?,
    };
    tracing::info!(
        "✓ {} topics across {} exercises",
        registry.len(),
        registry.categories().len()
    );

    let sessions: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
    spawn_session_sweeper(sessions.clone(), &config);

    let state = AppState::new(Arc::new(registry), sessions);

    tracing::info!("Registered {} tools:", state.tools.len());
    for name in state.tools.names() {
        tracing::info!("  • {}", name);
    }

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("hint-server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /api/topics                 - List topics (?category=)");
    tracing::info!("  GET  /api/topics/{{id}}/hint       - Get hint (?level=)");
    tracing::info!("  GET  /api/topics/{{id}}/reveal     - All hints + approach");
    tracing::info!("  POST /api/sessions               - Open disclosure session");
    tracing::info!("  POST /api/sessions/{{id}}/next     - Next hint");
    tracing::info!("  POST /api/tools/execute          - Run a hint tool");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Application routes
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))

        // Registry (stateless)
        .route("/api/topics", get(list_topics))
        .route("/api/categories", get(list_categories))
        .route("/api/topics/{id}", get(get_topic))
        .route("/api/topics/{id}/hint", get(get_hint))
        .route("/api/topics/{id}/reveal", get(reveal_topic))
        .route("/api/topics/{id}/summary", get(get_summary))

        // Disclosure sessions
        .route("/api/sessions", post(open_session).get(list_sessions))
        .route("/api/sessions/{id}", get(get_session).delete(end_session))
        .route("/api/sessions/{id}/next", post(next_hint))
        .route("/api/sessions/{id}/reset", post(reset_session))
        .route("/api/sessions/{id}/reveal", get(reveal_session))

        // Agent tools
        .route("/api/tools", get(list_tools))
        .route("/api/tools/execute", post(execute_tool))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Drop idle sessions on a fixed interval
fn spawn_session_sweeper(sessions: Arc<dyn SessionStore>, config: &ServerConfig) {
    let max_idle = config.session_ttl;
    let period = config.sweep_interval;

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            match sessions.purge_idle(max_idle) {
                Ok(0) => {}
                Ok(n) => tracing::info!("Purged {} idle hint sessions", n),
                Err(e) => tracing::warn!("Session sweep failed: {}", e),
            }
        }
    });
}
