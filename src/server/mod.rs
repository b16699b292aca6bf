//! HTTP server for the studio frontend
//!
//! Endpoints:
//! - GET  /api/status    - Health check and configuration summary
//! - POST /api/chat      - Tool-enabled single-stage chat
//! - POST /api/chat/cod  - Two-stage Chain of Draft flow (SSE)
//! - POST /api/render    - Section renderer as a service

mod chat;
pub mod error;
mod handlers;
pub mod types;

use anyhow::Result;
use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::CONFIG;
use crate::llm::{FireworksProvider, Provider, ProviderError};
use crate::tools::{InMemoryStore, ToolExecutor};
use crate::tools::web_search::TavilyClient;

// ============================================================================
// Server State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    /// None when the model credential is missing; handlers surface that as
    /// a configuration error per request instead of crashing at startup.
    pub provider: Option<Arc<dyn Provider>>,
    pub executor: Arc<ToolExecutor>,
}

impl AppState {
    pub fn from_config() -> Result<Self> {
        let provider: Option<Arc<dyn Provider>> = match FireworksProvider::from_config() {
            Ok(p) => Some(Arc::new(p)),
            Err(ProviderError::MissingCredential) => {
                warn!("FIREWORKS_API_KEY not set - chat endpoints will return a configuration error");
                None
            }
            Err(e) => return Err(e.into()),
        };

        let search = TavilyClient::new(
            CONFIG.tavily_api_key.clone(),
            Duration::from_secs(CONFIG.search_timeout),
        )?;

        let executor = Arc::new(ToolExecutor::new(Arc::new(InMemoryStore::new()), search));

        Ok(Self { provider, executor })
    }
}

// ============================================================================
// Routes
// ============================================================================

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/api/status", get(handlers::status_handler))
        .route("/api/chat", post(handlers::chat_handler))
        .route("/api/chat/cod", post(handlers::cod_chat_handler))
        .route("/api/render", post(handlers::render_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server
pub async fn run(state: AppState, bind_address: &str) -> Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(bind_address).await?;

    info!("server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
