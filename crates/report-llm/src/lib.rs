//! Completion-provider abstraction for currency-report-rs
//!
//! This crate provides a narrow, provider-agnostic seam for text
//! completions:
//!
//! - Role-tagged message types
//! - Completion request/response types
//! - The [`CompletionProvider`] trait
//! - A Groq client speaking the OpenAI-compatible chat-completions format
//!
//! One prompt in, one classified-text-or-error out; callers never see wire
//! details, and tests swap the provider for a stub.

pub mod completion;
pub mod error;
pub mod messages;
pub mod provider;
pub mod providers;

// Re-export main types
pub use completion::{CompletionRequest, CompletionResponse, TokenUsage};
pub use error::{CompletionError, Result};
pub use messages::{Message, Role};
pub use provider::CompletionProvider;
pub use providers::{GroqConfig, GroqProvider};
