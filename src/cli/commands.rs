//! CLI command implementations

use anyhow::{Context, Result};
use std::path::Path;

use crate::cli::args::{ConfigCommand, NoteArgs};
use crate::config::Settings;
use crate::llm::build_prompt;
use crate::note::{NoteRequest, NoteService, NoteSource};

impl From<NoteArgs> for NoteRequest {
    fn from(args: NoteArgs) -> Self {
        NoteRequest::new(args.name, args.subject).with_category(args.category)
    }
}

/// Run the HTTP server
pub async fn serve(settings: &Settings, bind: Option<String>, mock: bool) -> Result<()> {
    let mut settings = settings.clone();
    if let Some(bind) = bind {
        settings.server.bind = bind;
    }
    settings.llm.mock |= mock;

    let service = NoteService::from_settings(&settings)?;
    crate::server::serve(&settings, service).await
}

/// Generate a single note and print it
pub async fn generate_note(settings: &Settings, note: NoteArgs, mock: bool, json: bool) -> Result<()> {
    let mut settings = settings.clone();
    settings.llm.mock |= mock;
    settings.validate()?;

    let service = NoteService::from_settings(&settings)?;
    let response = service.generate(&NoteRequest::from(note)).await?;

    if response.source == NoteSource::Fallback {
        tracing::warn!("Provider gave no usable text; printed note is the fallback template");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", response.note);
    }

    Ok(())
}

/// Print the prompt for a note without calling the provider
pub fn show_prompt(note: NoteArgs) -> Result<()> {
    let valid = NoteRequest::from(note).validate()?;
    println!("{}", build_prompt(valid.category, &valid.name, &valid.subject));
    Ok(())
}

/// Handle config subcommands
pub fn config_command(settings: &Settings, config_path: &Path, cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let mut shown = settings.clone();
            if !shown.llm.api_key.is_empty() {
                shown.llm.api_key = "********".to_string();
            }
            let toml = toml::to_string_pretty(&shown)?;
            println!("{}", toml);
        }
        ConfigCommand::Path => {
            println!("{}", config_path.display());
        }
        ConfigCommand::Init { force } => {
            if config_path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                );
            }
            Settings::write_default(config_path).with_context(|| {
                format!("Failed to write config file: {}", config_path.display())
            })?;
            println!("Configuration initialized at: {}", config_path.display());
        }
    }

    Ok(())
}
