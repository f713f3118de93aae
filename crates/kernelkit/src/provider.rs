//! Provider selection and the configuration registered with a kernel

use crate::settings::Settings;
use crate::transport::LOCAL_ENDPOINT;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use strum_macros::{Display, EnumString};

/// Which chat completion backend a kernel talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum ProviderKind {
    /// OpenAI-compatible endpoint on the local machine
    #[strum(serialize = "local")]
    Local,
    /// Azure OpenAI deployment at the endpoint from settings
    #[strum(serialize = "azure-openai")]
    AzureOpenAi,
}

impl ProviderKind {
    /// Base address the transport for this provider is bound to
    pub fn base_url<'a>(&self, settings: &'a Settings) -> &'a str {
        match self {
            ProviderKind::Local => LOCAL_ENDPOINT,
            ProviderKind::AzureOpenAi => settings.endpoint.as_str(),
        }
    }
}

/// How the alternate-provider flag in settings is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum ProviderPolicy {
    /// Always use the local endpoint and ignore `use_azure_openai`
    #[default]
    LocalOnly,
    /// Use Azure OpenAI when settings ask for it
    HonorSettings,
}

impl ProviderPolicy {
    pub fn select(&self, settings: &Settings) -> ProviderKind {
        match self {
            ProviderPolicy::LocalOnly => ProviderKind::Local,
            ProviderPolicy::HonorSettings if settings.use_azure_openai => ProviderKind::AzureOpenAi,
            ProviderPolicy::HonorSettings => ProviderKind::Local,
        }
    }
}

/// Model and credentials registered for one chat completion service
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub model_id: String,
    pub api_key: SecretString,
    pub org_id: String,
}

impl ProviderConfig {
    /// Take model and credentials from settings as they are
    pub fn from_settings(kind: ProviderKind, settings: Settings) -> Self {
        Self {
            kind,
            model_id: settings.model,
            api_key: settings.api_key,
            org_id: settings.org_id,
        }
    }

    pub fn organization(&self) -> Option<&str> {
        Some(self.org_id.as_str()).filter(|org| !org.is_empty())
    }

    pub(crate) fn api_key(&self) -> Option<&str> {
        Some(self.api_key.expose_secret().as_str()).filter(|key| !key.is_empty())
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("kind", &self.kind)
            .field("model_id", &self.model_id)
            .field("api_key", &"[REDACTED]")
            .field("org_id", &self.org_id)
            .finish()
    }
}
