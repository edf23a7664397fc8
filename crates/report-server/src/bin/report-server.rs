//! Currency report server
//!
//! # Usage
//!
//! ```bash
//! # Set up environment variables (a .env file works too)
//! export GROQ_API_KEY="gsk-..."
//! export PORT=5000
//!
//! cargo run --bin report-server -p report-server
//! ```

use report_llm::{GroqConfig, GroqProvider};
use report_server::{AppConfig, AppState, create_router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    let default_filter = if config.is_development() {
        "report_server=debug,tower_http=debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Absence of the credential is not fatal: the flag is re-checked on
    // every report request.
    if !config.groq_configured() {
        warn!("GROQ_API_KEY environment variable is not set; report generation will fail until it is provided");
    }

    let provider_config = GroqConfig::new(config.groq_api_key.clone().unwrap_or_default());
    let provider = Arc::new(GroqProvider::with_config(provider_config)?);

    let addr = format!("0.0.0.0:{}", config.port);
    let state = AppState {
        config: Arc::new(config),
        provider,
    };
    let app = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("server listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
