//! CLI for kernelkit

use clap::Parser;
use kernelkit::settings::DEFAULT_SETTINGS_PATH;
use kernelkit_cli::{ProviderArg, commands, error::CliError};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "kernelkit")]
#[command(about = "Build kernels for a local OpenAI-compatible endpoint", long_about = None)]
struct Cli {
    /// Settings file path
    #[arg(
        short,
        long,
        global = true,
        env = "KERNELKIT_SETTINGS",
        default_value = DEFAULT_SETTINGS_PATH
    )]
    settings: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(
        short,
        long,
        global = true,
        env = "KERNELKIT_LOG_LEVEL",
        default_value = "info"
    )]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Write a settings template for a local Ollama setup
    Init {
        /// Overwrite an existing settings file
        #[arg(long, short)]
        force: bool,
    },
    /// Show the loaded settings (API key redacted)
    Show {
        /// Provider selection
        #[arg(long, value_enum, default_value_t = ProviderArg::Local)]
        provider: ProviderArg,
    },
    /// Chat through a freshly built kernel
    Chat {
        /// Optional initial message
        #[arg(long, short)]
        message: Option<String>,
        /// Run once and exit (non-interactive mode)
        #[arg(long)]
        once: bool,
        /// System prompt for the conversation
        #[arg(long)]
        system: Option<String>,
        /// Provider selection
        #[arg(long, value_enum, default_value_t = ProviderArg::Local)]
        provider: ProviderArg,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let filter = format!(
        "kernelkit={level},kernelkit_cli={level}",
        level = cli.log_level
    );
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Some(Commands::Init { force }) => {
            commands::run_init(&cli.settings, force).await?;
        }
        Some(Commands::Show { provider }) => {
            commands::run_show(&cli.settings, provider.into()).await?;
        }
        Some(Commands::Chat {
            message,
            once,
            system,
            provider,
        }) => {
            commands::run_chat(&cli.settings, provider.into(), message, once, system).await?;
        }
        None => {
            println!("kernelkit");
            println!("Use --help for more information");
        }
    }

    Ok(())
}
