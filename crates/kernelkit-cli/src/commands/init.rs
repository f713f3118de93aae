//! Init command handler

use crate::error::CliError;
use kernelkit::{FileSettings, SettingsError};
use std::path::Path;

pub async fn run_init(settings_path: &Path, force: bool) -> Result<(), CliError> {
    println!("🚀 Initializing kernelkit settings...");

    let source = FileSettings::new(settings_path);
    match source.write_template(force) {
        Ok(()) => {
            println!("📝 Wrote {}", settings_path.display());
        }
        Err(SettingsError::AlreadyExists(path)) => {
            println!(
                "✅ {} already exists (use --force to overwrite)",
                path.display()
            );
            return Ok(());
        }
        Err(e) => return Err(kernelkit::KernelKitError::from(e).into()),
    }

    println!("\nNext steps:");
    println!("  1. Start Ollama and pull a model: 'ollama pull llama3'");
    println!("  2. Edit 'model' in {} if needed", settings_path.display());
    println!("  3. Run 'kernelkit chat' to start chatting");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernelkit::SettingsSource;

    #[tokio::test]
    async fn test_init_writes_loadable_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("settings.json");

        run_init(&path, false).await.unwrap();
        let settings = FileSettings::new(&path).load().unwrap();
        assert_eq!(settings.model, "llama3");

        // second run keeps the existing file
        std::fs::write(&path, r#"{"type":"openai","model":"mistral"}"#).unwrap();
        run_init(&path, false).await.unwrap();
        let settings = FileSettings::new(&path).load().unwrap();
        assert_eq!(settings.model, "mistral");
    }
}
