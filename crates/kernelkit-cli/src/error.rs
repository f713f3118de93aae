//! Error types for kernelkit-cli

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    KernelKit(#[from] kernelkit::KernelKitError),

    #[error("Chat error: {0}")]
    Core(#[from] kernelkit::CoreError),

    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
