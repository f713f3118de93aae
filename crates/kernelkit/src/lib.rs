//! Kernel construction for locally hosted, OpenAI-compatible inference
//! endpoints.
//!
//! ```no_run
//! # async fn run() -> kernelkit::KernelKitResult<()> {
//! let kernel = kernelkit::build_local_kernel()?;
//! let reply = kernel.invoke_prompt("Why is the sky blue?").await?;
//! println!("{}", reply);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod factory;
pub mod openai;
pub mod provider;
pub mod settings;
pub mod transport;

// Re-export core types
pub use kernelkit_core::{
    ChatCompletionService, ChatHistory, ChatMessage, ChatRole, CoreError, Kernel, KernelBuilder,
    KernelId, Result, ServiceId, ServiceMetadata,
};

pub use error::{KernelKitError, Result as KernelKitResult};
pub use factory::{KernelFactory, build_local_kernel};
pub use openai::OpenAiChatCompletion;
pub use provider::{ProviderConfig, ProviderKind, ProviderPolicy};
pub use settings::{FileSettings, InMemorySettings, Settings, SettingsError, SettingsSource};
pub use transport::{LOCAL_ENDPOINT, ReqwestTransportFactory, Transport, TransportFactory};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::factory::{KernelFactory, build_local_kernel};
    pub use crate::settings::{FileSettings, SettingsSource};
    pub use kernelkit_core::{ChatHistory, ChatMessage, Kernel};
}
