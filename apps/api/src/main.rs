mod config;
mod errors;
mod export;
mod generation;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;
mod suggestion;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::pdf::CommandPdfRenderer;
use crate::export::Exporter;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::suggestion::{SuggestionBackend, SuggestionClient, UnavailableBackend};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume API v{}", env!("CARGO_PKG_VERSION"));

    // Suggestion backend: Anthropic when a key is configured, otherwise always unavailable
    let backend: Arc<dyn SuggestionBackend> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), &config.anthropic_api_url)?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(llm)
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; exports will use the user's own bullets");
            Arc::new(UnavailableBackend)
        }
    };
    let suggestions = Arc::new(SuggestionClient::new(backend, config.suggestion_timeout));

    // PDF engine (wkhtmltopdf-compatible CLI)
    let pdf = CommandPdfRenderer::new(
        &config.pdf_engine,
        config.pdf_page_size,
        config.pdf_timeout,
    );
    info!(
        "PDF engine: {} ({}, {}s timeout)",
        config.pdf_engine,
        config.pdf_page_size.as_str(),
        config.pdf_timeout.as_secs()
    );

    let state = AppState {
        suggestions,
        exporter: Exporter::new(Arc::new(pdf)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the UI shell has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
