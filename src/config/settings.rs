//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::llm::MockSelection;
use crate::NotegenError;

/// Environment variables checked, in order, for the provider API key.
const API_KEY_ENV_VARS: [&str; 2] = ["NOTEGEN_OPENAI_API_KEY", "OPENAI_API_KEY"];

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Text-generation provider settings
    #[serde(default)]
    pub llm: LlmSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Socket address the HTTP server binds to
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Path of the note generation endpoint
    #[serde(default = "default_route")]
    pub route: String,

    /// Emit permissive CORS headers and answer OPTIONS preflights
    #[serde(default = "default_true")]
    pub cors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// LLM provider (openai)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// API key for the provider
    #[serde(default)]
    pub api_key: String,

    /// Model name
    #[serde(default = "default_llm_model")]
    pub model: String,

    /// API base URL
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,

    /// Upper bound for one generation call, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Serve canned notes instead of calling the provider
    #[serde(default)]
    pub mock: bool,

    /// How mock mode picks between its canned notes
    #[serde(default)]
    pub mock_selection: MockSelection,
}

// Default value functions

fn default_log_level() -> String {
    "info".to_string()
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_route() -> String {
    "/api/generate".to_string()
}

fn default_true() -> bool {
    true
}

fn default_llm_provider() -> String {
    "openai".to_string()
}

fn default_llm_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_llm_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            route: default_route(),
            cors: true,
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_key: String::new(),
            model: default_llm_model(),
            endpoint: default_llm_endpoint(),
            timeout_secs: default_timeout_secs(),
            mock: false,
            mock_selection: MockSelection::default(),
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file
    pub fn load() -> Result<Self> {
        Self::load_or_default(&Self::config_path()?)
    }

    /// Load settings from `path`, or use defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        Self::load_from(path)
    }

    /// Load settings from an explicit file path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if !self.llm.api_key.trim().is_empty() {
            return;
        }

        if let Some(key) = API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|key| !key.trim().is_empty())
        {
            self.llm.api_key = key;
        }
    }

    /// Check values that serde cannot check on its own
    pub fn validate(&self) -> crate::Result<()> {
        self.bind_addr()?;

        if !self.server.route.starts_with('/') {
            return Err(NotegenError::Config(format!(
                "server.route must start with '/', got '{}'",
                self.server.route
            )));
        }

        // The route is mounted as a literal path; captures and wildcards
        // would make the router reject it at startup.
        let route = &self.server.route;
        if route.contains(|c: char| c == '{' || c == '}')
            || route
                .split('/')
                .any(|segment| segment.starts_with(':') || segment.starts_with('*'))
        {
            return Err(NotegenError::Config(format!(
                "server.route must be a literal path without captures or wildcards, got '{}'",
                route
            )));
        }

        if self.server.route == "/health" {
            return Err(NotegenError::Config(
                "server.route cannot be /health, that path is reserved".to_string(),
            ));
        }

        if self.llm.timeout_secs == 0 {
            return Err(NotegenError::Config(
                "llm.timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Parsed server bind address
    pub fn bind_addr(&self) -> crate::Result<SocketAddr> {
        self.server.bind.parse().map_err(|e| {
            NotegenError::Config(format!(
                "server.bind '{}' is not a socket address: {}",
                self.server.bind, e
            ))
        })
    }

    /// Timeout applied to each generation call
    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.llm.timeout_secs)
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "notegen", "notegen")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &Path) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
