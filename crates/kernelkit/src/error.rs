//! Error types for kernelkit crate

use crate::settings::SettingsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KernelKitError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Core(#[from] kernelkit_core::CoreError),

    #[error("Invalid base address '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, KernelKitError>;
