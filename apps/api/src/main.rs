mod config;
mod cv;
mod errors;
mod routes;
mod skills;
mod state;
mod templates;
mod upstream;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::routes::build_router;
use crate::skills::KeywordCategorizer;
use crate::state::AppState;
use crate::upstream::HttpRecordSource;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize upstream record source
    let records = HttpRecordSource::new(
        config.upstream_api_url.clone(),
        config.upstream_api_token.clone(),
    )
    .context("Failed to build upstream HTTP client")?;
    info!("Upstream record source: {}", records.base_url());

    // Initialize skill categorizer (built-in vocabulary plus EXTRA_TECHNICAL_KEYWORDS)
    let categorizer = KeywordCategorizer::with_extra_keywords(&config.extra_technical_keywords);
    if !config.extra_technical_keywords.is_empty() {
        info!(
            "Extra technical keywords: {}",
            config.extra_technical_keywords.join(", ")
        );
    }

    // Build app state
    let state = AppState {
        records: Arc::new(records),
        categorizer: Arc::new(categorizer),
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
