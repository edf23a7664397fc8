//! HTTP surface for currency-report-rs
//!
//! This crate wires the domain crates into an axum application:
//!
//! - `GET /` renders the input form
//! - `POST /generate_report` validates input and calls the completion
//!   provider
//! - `POST /download_pdf` renders the report into a downloadable PDF
//! - `GET /health` reports service and credential status

pub mod config;
pub mod error;
pub mod routes;
pub mod templates;

use axum::Router;
use report_llm::CompletionProvider;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use config::AppConfig;
pub use error::AppError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Environment-provided configuration.
    pub config: Arc<AppConfig>,
    /// Completion provider for report generation.
    pub provider: Arc<dyn CompletionProvider>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
