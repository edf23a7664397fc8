//! Groq provider implementation
//!
//! Groq exposes an OpenAI-compatible chat-completions endpoint.
//! See: https://console.groq.com/docs/api-reference#chat
//!
//! # Examples
//!
//! ```no_run
//! use report_llm::{CompletionProvider, CompletionRequest, Message};
//! use report_llm::providers::GroqProvider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create provider from GROQ_API_KEY environment variable
//!     let provider = GroqProvider::from_env()?;
//!
//!     let request = CompletionRequest::builder("llama-3.1-70b-versatile")
//!         .add_message(Message::user("Hello!"))
//!         .max_tokens(100)
//!         .build();
//!
//!     let response = provider.complete(request).await?;
//!     println!("{}", response.text);
//!
//!     Ok(())
//! }
//! ```

use crate::{
    CompletionError, CompletionProvider, CompletionRequest, CompletionResponse, Message, Result,
    Role, TokenUsage,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_GROQ_API_BASE: &str = "https://api.groq.com/openai/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the Groq provider
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key for authentication
    pub api_key: String,

    /// Base URL for the API (default: "https://api.groq.com/openai/v1").
    /// Can be pointed at any OpenAI-compatible endpoint, which is how tests
    /// and local deployments swap the backend.
    pub api_base: String,

    /// Request timeout in seconds (default: 120)
    pub timeout_secs: u64,
}

impl GroqConfig {
    /// Create a new config with the given API key and default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_GROQ_API_BASE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create config from environment variables
    ///
    /// Reads the API key from `GROQ_API_KEY`; optionally reads the base URL
    /// from `GROQ_API_BASE` if set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GROQ_API_KEY").map_err(|_| {
            CompletionError::Configuration("GROQ_API_KEY environment variable not set".to_string())
        })?;

        let api_base =
            std::env::var("GROQ_API_BASE").unwrap_or_else(|_| DEFAULT_GROQ_API_BASE.to_string());

        Ok(Self {
            api_key,
            api_base,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Set a custom API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Groq completion provider
///
/// Speaks the OpenAI chat-completions wire format over reqwest. Makes a
/// single call attempt per request.
pub struct GroqProvider {
    client: Client,
    config: GroqConfig,
}

impl GroqProvider {
    /// Create a new provider with custom configuration
    pub fn with_config(config: GroqConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a new provider with an API key and default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(GroqConfig::new(api_key))
    }

    /// Create a provider from the `GROQ_API_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        let config = GroqConfig::from_env()?;
        Self::with_config(config)
    }

    /// Get the current configuration
    pub fn config(&self) -> &GroqConfig {
        &self.config
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        debug!("Sending request to Groq API at {}", self.config.api_base);

        let groq_request = GroqRequest {
            model: request.model,
            messages: request.messages.iter().map(convert_message).collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.api_base))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&groq_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;

            return Err(match status.as_u16() {
                401 | 403 => CompletionError::AuthenticationFailed,
                429 => CompletionError::RateLimitExceeded(error_text),
                _ => CompletionError::RequestFailed(format!("HTTP {status}: {error_text}")),
            });
        }

        let groq_response: GroqResponse = response.json().await.map_err(|e| {
            CompletionError::UnexpectedResponse(format!("Failed to parse response: {e}"))
        })?;

        let choice = groq_response.choices.into_iter().next().ok_or_else(|| {
            CompletionError::UnexpectedResponse("No choices in response".to_string())
        })?;

        let text = choice.message.content.unwrap_or_default().trim().to_string();
        if text.is_empty() {
            return Err(CompletionError::EmptyCompletion);
        }

        let usage = groq_response.usage.unwrap_or_default();
        debug!(
            "Received completion - tokens: {}/{}",
            usage.prompt_tokens, usage.completion_tokens
        );

        Ok(CompletionResponse {
            text,
            usage: TokenUsage {
                input_tokens: usage.prompt_tokens,
                output_tokens: usage.completion_tokens,
            },
        })
    }

    fn name(&self) -> &'static str {
        "groq"
    }
}

// ============================================================================
// Wire types (OpenAI-compatible)
// ============================================================================

#[derive(Debug, Serialize)]
struct GroqRequest {
    model: String,
    messages: Vec<GroqMessage>,
    max_tokens: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct GroqMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct GroqResponse {
    choices: Vec<GroqChoice>,
    usage: Option<GroqUsage>,
}

#[derive(Debug, Deserialize)]
struct GroqChoice {
    message: GroqChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct GroqChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GroqUsage {
    #[serde(default)]
    prompt_tokens: usize,
    #[serde(default)]
    completion_tokens: usize,
}

fn convert_message(message: &Message) -> GroqMessage {
    let role = match message.role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
    };
    GroqMessage {
        role,
        content: message.content.clone(),
    }
}

// ============================================================================
// Tests
// ============================================================================
