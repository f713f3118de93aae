//! Show command handler

use crate::error::CliError;
use kernelkit::{FileSettings, KernelKitError, ProviderPolicy, Settings, SettingsSource};
use std::path::Path;

/// Render settings for display. The API key is never printed.
pub fn render_settings(settings: &Settings, policy: ProviderPolicy) -> String {
    let kind = policy.select(settings);
    let api_key = if settings.has_api_key() {
        "[REDACTED]"
    } else {
        "(not set)"
    };
    let org = if settings.org_id.is_empty() {
        "(not set)"
    } else {
        settings.org_id.as_str()
    };

    let mut lines = vec![
        format!("model:            {}", settings.model),
        format!("api key:          {}", api_key),
        format!("organization:     {}", org),
        format!("use azure openai: {}", settings.use_azure_openai),
    ];
    if !settings.endpoint.is_empty() {
        lines.push(format!("azure endpoint:   {}", settings.endpoint));
    }
    lines.push(format!("provider:         {} ({})", kind, policy));
    lines.push(format!("base address:     {}", kind.base_url(settings)));
    lines.join("\n")
}

pub async fn run_show(settings_path: &Path, policy: ProviderPolicy) -> Result<(), CliError> {
    let settings = FileSettings::new(settings_path)
        .load()
        .map_err(KernelKitError::from)?;

    println!("📄 {}", settings_path.display());
    println!("{}", render_settings(&settings, policy));
    Ok(())
}
