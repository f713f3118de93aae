//! Chat completion service trait for kernelkit-core
//!
//! A kernel holds any number of chat completion services. Each service owns its
//! own transport and credentials; the kernel only routes conversations to them.

use crate::{ChatHistory, ChatMessage, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for anything that can answer a chat conversation
#[async_trait]
pub trait ChatCompletionService: Send + Sync {
    /// Model identifier this service sends requests for
    fn model_id(&self) -> &str;

    /// Produce the next assistant message for the given history
    async fn complete(&self, history: &ChatHistory) -> Result<ChatMessage>;

    /// Optional method to get service metadata
    fn metadata(&self) -> ServiceMetadata {
        ServiceMetadata {
            model_id: Some(self.model_id().to_string()),
            ..Default::default()
        }
    }
}

/// Metadata about a registered service. Never carries credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceMetadata {
    /// Human-readable name of the service implementation
    pub name: Option<String>,
    /// Provider family (e.g. "local", "azure-openai")
    pub provider: Option<String>,
    /// Model identifier requests are sent for
    pub model_id: Option<String>,
    /// Base address of the endpoint
    pub endpoint: Option<String>,
    /// Organization id sent with requests, if any
    pub organization: Option<String>,
}

/// Arc-wrapped service for thread-safe sharing
pub type SharedChatService = Arc<dyn ChatCompletionService>;

/// Extension trait for chat completion services
pub trait ChatCompletionServiceExt: ChatCompletionService {
    /// Convert to a shared service
    fn shared(self) -> SharedChatService
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

impl<T: ChatCompletionService> ChatCompletionServiceExt for T {}
