//! Kernel factory
//!
//! Loads settings, binds a transport to the provider's base address and
//! registers an OpenAI-compatible chat completion service with a fresh kernel.
//! Every call builds everything anew; nothing is cached between calls.

use crate::error::Result;
use crate::openai::OpenAiChatCompletion;
use crate::provider::{ProviderConfig, ProviderPolicy};
use crate::settings::{FileSettings, SettingsSource};
use crate::transport::{ReqwestTransportFactory, TransportFactory};
use kernelkit_core::Kernel;
use tracing::{debug, info};

/// Builds kernels from injected settings and transport collaborators
pub struct KernelFactory<S, T> {
    settings: S,
    transports: T,
    policy: ProviderPolicy,
}

impl<S: SettingsSource, T: TransportFactory> KernelFactory<S, T> {
    /// Create a factory using [`ProviderPolicy::LocalOnly`]
    pub fn new(settings: S, transports: T) -> Self {
        Self {
            settings,
            transports,
            policy: ProviderPolicy::default(),
        }
    }

    /// Set the provider policy
    pub fn with_policy(mut self, policy: ProviderPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ProviderPolicy {
        self.policy
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn transports(&self) -> &T {
        &self.transports
    }

    /// Build a kernel with one chat completion service registered.
    ///
    /// Errors from the settings source, the transport factory and the kernel
    /// builder are returned as they are.
    pub fn build_kernel(&self) -> Result<Kernel> {
        let builder = Kernel::builder();

        let settings = self.settings.load()?;
        let kind = self.policy.select(&settings);
        info!(
            model = %settings.model,
            org_id = %settings.org_id,
            api_key_set = settings.has_api_key(),
            provider = %kind,
            "Building kernel"
        );

        let transport = self.transports.create(kind.base_url(&settings))?;
        let config = ProviderConfig::from_settings(kind, settings);

        let kernel = builder
            .add_chat_completion(OpenAiChatCompletion::new(config, transport))
            .build()?;

        debug!(kernel_id = %kernel.id(), "Kernel ready");
        Ok(kernel)
    }
}

impl Default for KernelFactory<FileSettings, ReqwestTransportFactory> {
    fn default() -> Self {
        Self::new(FileSettings::default(), ReqwestTransportFactory::default())
    }
}

/// Build a kernel for the local endpoint from `config/settings.json`
pub fn build_local_kernel() -> Result<Kernel> {
    KernelFactory::default().build_kernel()
}
