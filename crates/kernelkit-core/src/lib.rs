//! # kernelkit core
//!
//! Kernel, kernel builder and chat completion abstractions shared by the
//! kernelkit crates.

pub mod chat;
pub mod error;
pub mod kernel;
pub mod service;
pub mod types;

pub use chat::{ChatHistory, ChatMessage, ChatRole};
pub use error::{CoreError, Result};
pub use kernel::{Kernel, KernelBuilder};
pub use service::{
    ChatCompletionService, ChatCompletionServiceExt, ServiceMetadata, SharedChatService,
};
pub use types::{KernelId, ServiceId};
