//! Input form page

use crate::{AppError, AppState, templates};
use axum::Router;
use axum::response::Html;
use axum::routing::get;

/// Creates the home route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

async fn home() -> Result<Html<String>, AppError> {
    templates::render_index()
        .map(Html)
        .map_err(|e| AppError::Template(e.to_string()))
}
