//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// notegen - Personalized business notes written by an LLM
#[derive(Parser, Debug)]
#[command(name = "notegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use this configuration file instead of the default location
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP note endpoint
    Serve {
        /// Address to bind (overrides server.bind)
        #[arg(short, long)]
        bind: Option<String>,

        /// Serve canned notes instead of calling the provider
        #[arg(long)]
        mock: bool,
    },

    /// Generate one note and print it
    Generate {
        #[command(flatten)]
        note: NoteArgs,

        /// Use canned notes instead of calling the provider
        #[arg(long)]
        mock: bool,

        /// Print the response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the prompt that would be sent to the provider
    Prompt {
        #[command(flatten)]
        note: NoteArgs,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args, Debug)]
pub struct NoteArgs {
    /// Recipient name
    #[arg(short, long)]
    pub name: String,

    /// Product, issue, program or topic the note is about
    #[arg(short, long)]
    pub subject: String,

    /// Note category (thankyou, apology, welcome, followup)
    #[arg(short = 't', long, default_value = "thankyou")]
    pub category: String,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
