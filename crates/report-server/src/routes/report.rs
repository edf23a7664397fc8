//! Report generation route

use crate::{AppError, AppState};
use axum::extract::State;
use axum::routing::post;
use axum::{Form, Json, Router};
use chrono::NaiveDate;
use report_core::{Currency, RawReportRequest, ReportRequest, ReportResult};
use report_llm::{CompletionRequest, Message};
use report_prompt::{analyst_persona, build_report_prompt};
use serde::Serialize;
use tracing::{error, info};

/// Model used for report generation.
pub const REPORT_MODEL: &str = "llama-3.1-70b-versatile";
/// Generation cap for a single report.
pub const REPORT_MAX_TOKENS: usize = 4000;
/// Sampling temperature for report generation.
pub const REPORT_TEMPERATURE: f32 = 0.7;

/// Creates the report generation route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/generate_report", post(generate_report))
}

/// Successful response envelope.
#[derive(Debug, Serialize)]
pub struct GenerateReportResponse {
    /// Always true on the success path.
    pub success: bool,
    /// Generated report text.
    pub report: String,
    /// Currency pair the report covers.
    pub currency: Currency,
    /// First day of the analysis period.
    pub start_date: NaiveDate,
    /// Last day of the analysis period.
    pub end_date: NaiveDate,
}

async fn generate_report(
    State(state): State<AppState>,
    Form(raw): Form<RawReportRequest>,
) -> Result<Json<GenerateReportResponse>, AppError> {
    info!("report generation request received");

    // The credential is re-checked per request; startup only warns.
    if !state.config.groq_configured() {
        error!("GROQ_API_KEY not configured");
        return Err(AppError::MissingApiKey);
    }

    let request = ReportRequest::validate(raw)?;
    info!(
        currency = request.currency.code(),
        start_date = %request.start_date,
        end_date = %request.end_date,
        "generating report"
    );

    let prompt = build_report_prompt(&request)?;
    let completion = state
        .provider
        .complete(
            CompletionRequest::builder(REPORT_MODEL)
                .add_message(Message::system(analyst_persona()))
                .add_message(Message::user(prompt))
                .max_tokens(REPORT_MAX_TOKENS)
                .temperature(REPORT_TEMPERATURE)
                .build(),
        )
        .await?;
    info!(provider = state.provider.name(), "completion call successful");

    let result = ReportResult::new(&request, completion.text);
    Ok(Json(GenerateReportResponse {
        success: true,
        report: result.body,
        currency: result.currency,
        start_date: result.start_date,
        end_date: result.end_date,
    }))
}
