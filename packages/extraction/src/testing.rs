//! Mock implementations for testing without network or LLM access.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::ai::{ChatModel, ModelError};
use crate::fetch::ContentFetcher;
use crate::sources::SourceKind;

/// Fetcher returning canned text per URL; everything else is "no text".
#[derive(Default)]
pub struct MockFetcher {
    pages: HashMap<String, String>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register extracted text for a URL.
    pub fn with_page(mut self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.pages.insert(url.into(), text.into());
        self
    }
}

#[async_trait]
impl ContentFetcher for MockFetcher {
    async fn fetch(&self, _kind: SourceKind, url: &str) -> Option<String> {
        self.pages.get(url).cloned()
    }
}

/// Record of one call made to the mock model.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub system: String,
    pub user: String,
}

/// Chat model returning a fixed response and recording calls for
/// assertions.
pub struct MockModel {
    response: Result<String, String>,
    calls: Arc<RwLock<Vec<MockCall>>>,
}

impl MockModel {
    /// Succeed every call with `response`.
    pub fn returning(response: impl Into<String>) -> Self {
        Self {
            response: Ok(response.into()),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Fail every call with an API error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: Err(message.into()),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Calls made so far.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl ChatModel for MockModel {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ModelError> {
        self.calls.write().unwrap().push(MockCall {
            system: system.to_string(),
            user: user.to_string(),
        });
        match &self.response {
            Ok(content) => Ok(content.clone()),
            Err(message) => Err(ModelError::Api(message.clone())),
        }
    }
}
