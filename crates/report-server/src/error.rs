//! HTTP error mapping
//!
//! Client-input problems surface with their verbatim validation message and
//! status 400. Provider and renderer failures are logged in full on the
//! server and reach the caller only as a generic message with status 500.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use report_core::ValidationError;
use report_llm::CompletionError;
use report_pdf::RenderError;
use report_prompt::PromptError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client input failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The completion credential is absent at request time
    #[error("Groq API key is not configured")]
    MissingApiKey,

    /// The download request carried no report text
    #[error("No report text provided")]
    MissingReportText,

    /// The completion provider failed
    #[error(transparent)]
    Completion(#[from] CompletionError),

    /// Building the prompt failed
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Rendering or storing the PDF failed
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Rendering the HTML form failed
    #[error("template error: {0}")]
    Template(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::MissingReportText => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the caller. Validation messages pass through
    /// verbatim; everything else gets a fixed user-facing string.
    fn user_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::MissingReportText => "No report text provided".to_string(),
            AppError::MissingApiKey => "Groq API key is not configured".to_string(),
            AppError::Completion(CompletionError::AuthenticationFailed) => {
                "Groq API key is invalid or missing".to_string()
            }
            AppError::Completion(CompletionError::RateLimitExceeded(_)) => {
                "API quota exceeded. Please try again later.".to_string()
            }
            AppError::Completion(CompletionError::EmptyCompletion) => {
                "Empty response from AI service".to_string()
            }
            AppError::Completion(_) | AppError::Prompt(_) => {
                "Unable to generate report. Please try again later.".to_string()
            }
            AppError::Render(_) => "Error generating PDF".to_string(),
            AppError::Template(_) => "Error loading page".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            // Full detail stays in the server log; the caller sees only the
            // generic message below.
            error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_400_with_verbatim_message() {
        let err = AppError::from(ValidationError::InvalidDateRange);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.user_message(), "End date must be after start date");
    }

    #[test]
    fn test_provider_errors_are_500_with_generic_message() {
        let err = AppError::from(CompletionError::RequestFailed(
            "HTTP 503: backend exploded with secret details".to_string(),
        ));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.user_message(),
            "Unable to generate report. Please try again later."
        );
    }

    #[test]
    fn test_auth_and_quota_get_specific_messages() {
        assert_eq!(
            AppError::from(CompletionError::AuthenticationFailed).user_message(),
            "Groq API key is invalid or missing"
        );
        assert_eq!(
            AppError::from(CompletionError::RateLimitExceeded("429".to_string())).user_message(),
            "API quota exceeded. Please try again later."
        );
    }

    #[test]
    fn test_missing_report_text_is_400() {
        assert_eq!(AppError::MissingReportText.status_code(), StatusCode::BAD_REQUEST);
    }
}
