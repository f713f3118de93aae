//! kernelkit CLI library

pub mod commands;
pub mod error;

use kernelkit::ProviderPolicy;

/// Provider policy for CLI
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ProviderArg {
    /// Always use the local endpoint (http://localhost:11434/v1/)
    #[default]
    Local,
    /// Use Azure OpenAI when the settings file says `"type": "azure"`
    Settings,
}

impl From<ProviderArg> for ProviderPolicy {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Local => ProviderPolicy::LocalOnly,
            ProviderArg::Settings => ProviderPolicy::HonorSettings,
        }
    }
}

impl std::fmt::Display for ProviderArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderArg::Local => write!(f, "local"),
            ProviderArg::Settings => write!(f, "settings"),
        }
    }
}
