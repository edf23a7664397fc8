//! Error types for PDF rendering

use thiserror::Error;

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while building or storing a PDF document
#[derive(Debug, Error)]
pub enum RenderError {
    /// The PDF library failed to assemble the document
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    /// Writing or reading the temporary artifact failed
    #[error("temporary PDF file error: {0}")]
    TempFile(#[source] std::io::Error),
}
