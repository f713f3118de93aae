//! Connection settings and the sources they are loaded from
//!
//! The settings file is the JSON document used by the notebooks this crate
//! serves:
//!
//! ```json
//! { "type": "openai", "model": "llama3", "endpoint": "", "apikey": "sk-...", "org": "" }
//! ```
//!
//! `"type": "azure"` marks the alternate (Azure OpenAI) provider.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the settings file, relative to the working directory
pub const DEFAULT_SETTINGS_PATH: &str = "config/settings.json";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Settings file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("Failed to write settings file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Connection settings for one kernel build
pub struct Settings {
    /// Route to the Azure OpenAI provider instead of the local endpoint
    pub use_azure_openai: bool,
    /// Model (or Azure deployment) identifier
    pub model: String,
    /// Azure endpoint; unused by the local provider
    pub endpoint: String,
    pub api_key: SecretString,
    pub org_id: String,
}

impl Settings {
    pub fn new(
        use_azure_openai: bool,
        model: impl Into<String>,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        org_id: impl Into<String>,
    ) -> Self {
        Self {
            use_azure_openai,
            model: model.into(),
            endpoint: endpoint.into(),
            api_key: SecretString::new(api_key.into()),
            org_id: org_id.into(),
        }
    }

    /// Whether a non-empty API key is configured
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }
}

impl Clone for Settings {
    fn clone(&self) -> Self {
        Self {
            use_azure_openai: self.use_azure_openai,
            model: self.model.clone(),
            endpoint: self.endpoint.clone(),
            api_key: SecretString::new(self.api_key.expose_secret().clone()),
            org_id: self.org_id.clone(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("use_azure_openai", &self.use_azure_openai)
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .field("org_id", &self.org_id)
            .finish()
    }
}

/// On-disk representation of [`Settings`]
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct SettingsFile {
    #[serde(rename = "type")]
    kind: String,
    model: String,
    endpoint: String,
    apikey: String,
    org: String,
}

impl From<SettingsFile> for Settings {
    fn from(file: SettingsFile) -> Self {
        Settings::new(
            file.kind.eq_ignore_ascii_case("azure"),
            file.model,
            file.endpoint,
            file.apikey,
            file.org,
        )
    }
}

/// Source of connection settings
pub trait SettingsSource: Send + Sync {
    /// Load settings. Called once per kernel build; results are never cached.
    fn load(&self) -> Result<Settings, SettingsError>;
}

/// Loads settings from a JSON file on every call
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a template for a local Ollama setup
    pub fn write_template(&self, force: bool) -> Result<(), SettingsError> {
        if self.path.exists() && !force {
            return Err(SettingsError::AlreadyExists(self.path.clone()));
        }

        let template = SettingsFile {
            kind: "openai".to_string(),
            model: "llama3".to_string(),
            endpoint: String::new(),
            apikey: "ollama".to_string(),
            org: String::new(),
        };
        let content =
            serde_json::to_string_pretty(&template).map_err(|source| SettingsError::Parse {
                path: self.path.clone(),
                source,
            })?;

        let write_err = |source: std::io::Error| SettingsError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }
        std::fs::write(&self.path, content).map_err(write_err)
    }
}

impl Default for FileSettings {
    fn default() -> Self {
        Self::new(DEFAULT_SETTINGS_PATH)
    }
}

impl SettingsSource for FileSettings {
    fn load(&self) -> Result<Settings, SettingsError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| SettingsError::Read {
            path: self.path.clone(),
            source,
        })?;

        let file: SettingsFile =
            serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
                path: self.path.clone(),
                source,
            })?;

        Ok(file.into())
    }
}

/// Settings source that always returns the same values
#[derive(Debug, Clone)]
pub struct InMemorySettings {
    settings: Settings,
}

impl InMemorySettings {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

impl SettingsSource for InMemorySettings {
    fn load(&self) -> Result<Settings, SettingsError> {
        Ok(self.settings.clone())
    }
}
