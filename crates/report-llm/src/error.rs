//! Error types for completion operations

use thiserror::Error;

/// Result type for completion operations
pub type Result<T> = std::result::Result<T, CompletionError>;

/// Errors that can occur while calling a completion provider
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Invalid API key or authentication failed
    #[error("Invalid API key or authentication failed")]
    AuthenticationFailed,

    /// Rate or quota limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// The call succeeded but the completion text was blank
    #[error("Provider returned an empty completion")]
    EmptyCompletion,

    /// API request failed with a non-success status
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Unexpected response format
    #[error("Unexpected response format: {0}")]
    UnexpectedResponse(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CompletionError::AuthenticationFailed.to_string(),
            "Invalid API key or authentication failed"
        );
        assert_eq!(
            CompletionError::RateLimitExceeded("429".to_string()).to_string(),
            "Rate limit exceeded: 429"
        );
        assert_eq!(
            CompletionError::EmptyCompletion.to_string(),
            "Provider returned an empty completion"
        );
    }
}
