mod config;
mod errors;
mod llm_client;
mod roadmap;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::OpenRouterClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging once, before accepting requests
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting AI Career Planner API v{}",
        env!("CARGO_PKG_VERSION")
    );

    if config.openrouter_api_key.is_none() {
        // The service still boots; /api/career-plan will answer with a
        // configuration error until the key is provided.
        warn!("OPENROUTER_API_KEY is not set");
    }

    // Initialize LLM client
    let provider = Arc::new(OpenRouterClient::new(
        config.openrouter_api_key.clone().unwrap_or_default(),
        config.openrouter_model.clone(),
        config.openrouter_base_url.clone(),
    ));
    info!("LLM client initialized (model: {})", provider.model());

    // Build app state
    let state = AppState {
        provider,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
