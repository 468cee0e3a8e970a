//! Chat-model abstraction over LLM providers.

use async_trait::async_trait;
use thiserror::Error;

#[cfg(feature = "openai")]
mod openai;
#[cfg(feature = "openai")]
pub use openai::OpenAiModel;

/// Errors from a chat-model call. The orchestrator absorbs these into a
/// textual result; they never escape as control flow.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model not configured: {0}")]
    NotConfigured(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("API error: {0}")]
    Api(String),
}

/// A chat-completion capable model.
///
/// Implementations wrap a specific provider and handle its transport
/// details; the pipeline only ever sends one system and one user message
/// and reads back raw text.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ModelError>;
}

/// Stand-in used when no API key is configured. Every call fails with
/// [`ModelError::NotConfigured`], which the orchestrator turns into a
/// readable error result.
pub struct UnconfiguredModel;

#[async_trait]
impl ChatModel for UnconfiguredModel {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, ModelError> {
        Err(ModelError::NotConfigured("OPENAI_API_KEY is not set".into()))
    }
}
