//! Configuration module for notegen
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::{GeneralSettings, LlmSettings, ServerSettings, Settings};
