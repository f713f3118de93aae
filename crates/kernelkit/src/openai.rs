//! OpenAI-compatible chat completion service
//!
//! Speaks the `/chat/completions` API exposed by Ollama, LM Studio and OpenAI
//! itself, plus the deployment-scoped variant used by Azure OpenAI.

use crate::provider::{ProviderConfig, ProviderKind};
use crate::transport::Transport;
use async_trait::async_trait;
use kernelkit_core::{
    ChatCompletionService, ChatHistory, ChatMessage, CoreError, Result, ServiceMetadata,
};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Azure OpenAI REST API version sent with every request
pub const AZURE_API_VERSION: &str = "2024-02-01";

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Chat completion service for OpenAI-compatible endpoints
pub struct OpenAiChatCompletion {
    config: ProviderConfig,
    transport: Transport,
}

impl OpenAiChatCompletion {
    pub fn new(config: ProviderConfig, transport: Transport) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    fn request_url(&self) -> Result<Url> {
        let path = match self.config.kind {
            ProviderKind::Local => "chat/completions".to_string(),
            ProviderKind::AzureOpenAi => format!(
                "openai/deployments/{}/chat/completions",
                self.config.model_id
            ),
        };

        let mut url = self
            .transport
            .endpoint(&path)
            .map_err(|e| CoreError::Configuration(e.to_string()))?;
        if self.config.kind == ProviderKind::AzureOpenAi {
            url.query_pairs_mut()
                .append_pair("api-version", AZURE_API_VERSION);
        }
        Ok(url)
    }
}

#[async_trait]
impl ChatCompletionService for OpenAiChatCompletion {
    fn model_id(&self) -> &str {
        &self.config.model_id
    }

    async fn complete(&self, history: &ChatHistory) -> Result<ChatMessage> {
        let url = self.request_url()?;
        debug!(
            model = %self.config.model_id,
            provider = %self.config.kind,
            url = %url,
            messages = history.len(),
            "Sending chat completion request"
        );

        let body = ChatCompletionRequest {
            model: &self.config.model_id,
            messages: history.messages(),
        };
        let mut request = self.transport.client().post(url).json(&body);

        request = match (self.config.kind, self.config.api_key()) {
            (ProviderKind::Local, Some(key)) => request.bearer_auth(key),
            (ProviderKind::AzureOpenAi, Some(key)) => request.header("api-key", key),
            (_, None) => request,
        };
        if let Some(org) = self.config.organization() {
            request = request.header("OpenAI-Organization", org);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CoreError::Service(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(CoreError::Service(format!(
                "Endpoint returned {}: {}",
                status, text
            )));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| CoreError::InvalidResponse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CoreError::InvalidResponse("response has no choices".to_string()))?
            .message
            .content
            .unwrap_or_default();

        Ok(ChatMessage::assistant(content))
    }

    fn metadata(&self) -> ServiceMetadata {
        ServiceMetadata {
            name: Some("OpenAiChatCompletion".to_string()),
            provider: Some(self.config.kind.to_string()),
            model_id: Some(self.config.model_id.clone()),
            endpoint: Some(self.transport.base_url().to_string()),
            organization: self.config.organization().map(str::to_string),
        }
    }
}
