//! notegen - Personalized business notes written by an LLM
//!
//! Entry point for the notegen CLI and HTTP server.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use notegen::cli::{Cli, Commands};
use notegen::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        notegen::cli::completions::print(shell);
        return Ok(());
    }

    // Load configuration only for runtime commands.
    let config_path = match cli.config {
        Some(path) => path,
        None => Settings::config_path()?,
    };
    let settings = Settings::load_or_default(&config_path)?;

    // Initialize logging; RUST_LOG wins over general.log_level
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.general.log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if !config_path.exists() {
        tracing::debug!(
            "No config file found at {}, using defaults",
            config_path.display()
        );
    }

    match cli.command {
        Commands::Serve { bind, mock } => {
            notegen::cli::commands::serve(&settings, bind, mock).await?;
        }
        Commands::Generate { note, mock, json } => {
            notegen::cli::commands::generate_note(&settings, note, mock, json).await?;
        }
        Commands::Prompt { note } => {
            notegen::cli::commands::show_prompt(note)?;
        }
        Commands::Config(config_cmd) => {
            notegen::cli::commands::config_command(&settings, &config_path, config_cmd)?;
        }
        Commands::Completions { .. } => unreachable!(),
    }

    Ok(())
}
