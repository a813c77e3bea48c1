//! notegen - Personalized business notes written by an LLM
//!
//! Takes a recipient, a subject and a category, builds a prompt and asks a
//! text-generation provider for a short note. When the provider fails the
//! caller still gets a templated fallback note.

pub mod cli;
pub mod config;
pub mod llm;
pub mod note;
pub mod server;

use thiserror::Error;

/// Main error type for notegen
///
/// Upstream provider failures are not part of this enum: the note service
/// turns them into fallback notes before they can reach a caller.
#[derive(Error, Debug)]
pub enum NotegenError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, NotegenError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "notegen";
