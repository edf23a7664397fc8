//! Error types for prompt rendering

use thiserror::Error;

/// Result type for prompt operations
pub type Result<T> = std::result::Result<T, PromptError>;

/// Errors that can occur while compiling or rendering a prompt template
#[derive(Debug, Error)]
pub enum PromptError {
    /// The template source failed to compile
    #[error("template '{name}' failed to compile: {detail}")]
    Compile {
        /// Template name
        name: String,
        /// Engine error detail
        detail: String,
    },

    /// Rendering with the given context failed
    #[error("template '{name}' failed to render: {detail}")]
    Render {
        /// Template name
        name: String,
        /// Engine error detail
        detail: String,
    },
}
