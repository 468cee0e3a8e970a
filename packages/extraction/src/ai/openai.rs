//! OpenAI-backed [`ChatModel`] implementation.

use async_trait::async_trait;
use openai_client::{ChatRequest, Message, OpenAIClient, OpenAIError, ResponseFormat};

use super::{ChatModel, ModelError};

/// Chat model speaking to the OpenAI chat-completions API.
///
/// Requests JSON-object mode so the provider rejects non-JSON output, and
/// picks the token-ceiling parameter the model family expects.
pub struct OpenAiModel {
    client: OpenAIClient,
    model: String,
    max_tokens: u32,
}

impl OpenAiModel {
    pub fn new(client: OpenAIClient, model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            client,
            model: model.into(),
            max_tokens,
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiModel {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ModelError> {
        let mut request = ChatRequest::new(&self.model)
            .message(Message::system(system))
            .message(Message::user(user))
            .response_format(ResponseFormat::json_object());

        request = if ChatRequest::uses_max_completion_tokens(&self.model) {
            request.max_completion_tokens(self.max_tokens)
        } else {
            request.max_tokens(self.max_tokens)
        };

        let response = self
            .client
            .chat_completion(request)
            .await
            .map_err(|e| match e {
                OpenAIError::Config(msg) => ModelError::NotConfigured(msg),
                OpenAIError::Network(msg) => ModelError::Network(msg),
                OpenAIError::Api(msg) | OpenAIError::Parse(msg) => ModelError::Api(msg),
            })?;

        Ok(response.content)
    }
}
