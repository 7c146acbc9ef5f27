//! LLM provider abstraction for recipe generation.
//!
//! A trait-based seam over the text-generation service, with a fake
//! implementation so tests never touch the network.

mod fake;
mod gemini;

pub use fake::FakeProvider;
pub use gemini::GeminiProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for LLM providers.
///
/// Implementations should be stateless and thread-safe. The provider is
/// responsible for making the API call and returning the model's text
/// response; prompt construction and response parsing live with callers.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt to the LLM and get a text response.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "gemini", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gemini-1.5-flash").
    fn model_name(&self) -> &str;
}

/// Build a provider from environment variables.
///
/// - RECIPE_PROVIDER: "gemini" | "fake"; unset picks gemini when
///   GEMINI_API_KEY is present, fake otherwise
/// - GEMINI_API_KEY: API key for Gemini
/// - RECIPE_MODEL: model name (default "gemini-1.5-flash")
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let provider = std::env::var("RECIPE_PROVIDER").unwrap_or_else(|_| {
        if std::env::var("GEMINI_API_KEY").is_ok() {
            "gemini".to_string()
        } else {
            "fake".to_string()
        }
    });

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeProvider::with_recipe_responses())),
        "gemini" => {
            let api_key = std::env::var("GEMINI_API_KEY")
                .map_err(|_| LlmError::NotConfigured("GEMINI_API_KEY not set".to_string()))?;
            let model = std::env::var("RECIPE_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string());
            Ok(Box::new(GeminiProvider::new(api_key, model)))
        }
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
