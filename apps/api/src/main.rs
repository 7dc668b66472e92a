mod catalog;
mod config;
mod errors;
mod llm_client;
mod recommendation;
mod render;
mod routes;
mod session;
mod state;
#[cfg(test)]
mod testing;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::session::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Compass v{}", env!("CARGO_PKG_VERSION"));

    if config.google_api_key.is_none() {
        warn!("GOOGLE_API_KEY is not set: submissions will be refused until it is configured");
    }

    // Initialize LLM client
    let llm = GeminiClient::new(&config.gemini_api_base, config.request_timeout)?;
    info!("Gemini client initialized (base: {})", config.gemini_api_base);

    let sessions = SessionStore::new(config.session_ttl);

    // Build app state
    let state = AppState {
        llm: Arc::new(llm),
        config: config.clone(),
        sessions,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
