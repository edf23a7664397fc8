//! PDF download route

use crate::{AppError, AppState};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use report_pdf::{DocumentContent, RenderedDocument, attachment_filename, render_report};
use serde::Deserialize;
use tracing::info;

/// Creates the PDF download route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/download_pdf", post(download_pdf))
}

/// JSON body for a PDF download.
///
/// Only `report` is required; the metadata fields default to empty strings
/// and are passed through verbatim into the document header and filename.
#[derive(Debug, Deserialize)]
pub struct DownloadPdfRequest {
    /// Report text to render.
    #[serde(default)]
    pub report: String,
    /// Currency pair code.
    #[serde(default)]
    pub currency: String,
    /// Period start.
    #[serde(default)]
    pub start_date: String,
    /// Period end.
    #[serde(default)]
    pub end_date: String,
}

async fn download_pdf(Json(request): Json<DownloadPdfRequest>) -> Result<Response, AppError> {
    info!("PDF download request received");

    if request.report.trim().is_empty() {
        return Err(AppError::MissingReportText);
    }

    let bytes = render_report(&DocumentContent {
        currency: &request.currency,
        start_date: &request.start_date,
        end_date: &request.end_date,
        body: &request.report,
    })?;

    // Park the bytes in a scoped temp file; any early return below drops
    // (and thereby deletes) it.
    let document = RenderedDocument::write(
        &bytes,
        attachment_filename(&request.currency, &request.start_date, &request.end_date),
    )?;
    let payload = document.read()?;
    info!(filename = document.filename(), "PDF generated");

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={}", document.filename()),
        ),
    ];
    document.cleanup();

    Ok((headers, payload).into_response())
}
