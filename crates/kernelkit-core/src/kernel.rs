//! Kernel and its builder

use crate::error::CoreError;
use crate::{
    ChatCompletionService, ChatHistory, ChatMessage, KernelId, Result, ServiceId, ServiceMetadata,
    SharedChatService,
};
use std::sync::Arc;

/// Orchestration context holding the registered chat completion services
pub struct Kernel {
    id: KernelId,
    /// Registration order is kept; the first service is the default one
    services: Vec<(ServiceId, SharedChatService)>,
}

impl Kernel {
    /// Create a new builder
    pub fn builder() -> KernelBuilder {
        KernelBuilder::new()
    }

    /// Unique id of this kernel instance
    pub fn id(&self) -> &KernelId {
        &self.id
    }

    /// Default chat completion service
    pub fn chat_completion(&self) -> Result<&SharedChatService> {
        self.services
            .first()
            .map(|(_, service)| service)
            .ok_or_else(|| CoreError::ServiceNotFound("kernel has no services".to_string()))
    }

    /// Chat completion service registered under `id`
    pub fn chat_completion_by_id(&self, id: &str) -> Result<&SharedChatService> {
        self.services
            .iter()
            .find(|(service_id, _)| service_id.as_str() == id)
            .map(|(_, service)| service)
            .ok_or_else(|| CoreError::ServiceNotFound(id.to_string()))
    }

    /// Registered service ids with their metadata, in registration order
    pub fn services(&self) -> Vec<(ServiceId, ServiceMetadata)> {
        self.services
            .iter()
            .map(|(id, service)| (id.clone(), service.metadata()))
            .collect()
    }

    /// Send a full conversation to the default service
    pub async fn complete(&self, history: &ChatHistory) -> Result<ChatMessage> {
        self.chat_completion()?.complete(history).await
    }

    /// Send a single user prompt to the default service and return the reply text
    pub async fn invoke_prompt(&self, prompt: impl Into<String>) -> Result<String> {
        let mut history = ChatHistory::new();
        history.add_user(prompt);
        let reply = self.complete(&history).await?;
        Ok(reply.content)
    }
}

impl std::fmt::Debug for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kernel")
            .field("id", &self.id)
            .field(
                "services",
                &self.services.iter().map(|(id, _)| id).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builder for creating kernels
#[derive(Default)]
pub struct KernelBuilder {
    services: Vec<(ServiceId, SharedChatService)>,
}

impl KernelBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service under its model id
    pub fn add_chat_completion(self, service: impl ChatCompletionService + 'static) -> Self {
        let id = ServiceId::from_string(service.model_id());
        self.add_chat_completion_with_id(id, service)
    }

    /// Register a service under an explicit id. A later registration with the
    /// same id replaces the earlier one in place.
    pub fn add_chat_completion_with_id(
        self,
        id: impl Into<ServiceId>,
        service: impl ChatCompletionService + 'static,
    ) -> Self {
        self.add_shared_chat_completion(id, Arc::new(service))
    }

    /// Register an already shared service
    pub fn add_shared_chat_completion(
        mut self,
        id: impl Into<ServiceId>,
        service: SharedChatService,
    ) -> Self {
        let id = id.into();
        match self.services.iter_mut().find(|(existing, _)| *existing == id) {
            Some(slot) => slot.1 = service,
            None => self.services.push((id, service)),
        }
        self
    }

    /// Build the kernel
    pub fn build(self) -> Result<Kernel> {
        Ok(Kernel {
            id: KernelId::new(),
            services: self.services,
        })
    }
}
