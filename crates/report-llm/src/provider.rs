//! Completion provider trait definition

use crate::{CompletionRequest, CompletionResponse, Result};
use async_trait::async_trait;

/// Trait for text-completion providers
///
/// The one seam between this system and the outside LLM service: a prompt
/// goes in, classified text-or-error comes out. Implementations make exactly
/// one call attempt per request; retry policy is deliberately not part of
/// this contract.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Generate a completion for the request
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;

    /// Provider name (e.g. "groq")
    fn name(&self) -> &str;
}
