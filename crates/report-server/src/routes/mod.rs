//! API route definitions

use crate::AppState;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::json;

pub mod health;
pub mod home;
pub mod pdf;
pub mod report;


/// Creates the router with all application routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(home::routes())
        .merge(report::routes())
        .merge(pdf::routes())
        .merge(health::routes())
}

/// Fallback for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
