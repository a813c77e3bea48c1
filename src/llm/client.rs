use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::config::Settings;
use crate::llm::mock::MockGenerator;
use crate::llm::openai::OpenAiClient;
use crate::note::Category;

/// Generation request payload.
///
/// Network providers only look at `system` and `prompt`. The parsed fields
/// are carried along for generators that write notes without a model.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub system: &'a str,
    pub prompt: &'a str,
    pub category: Category,
    pub name: &'a str,
    pub subject: &'a str,
}

/// Ways a text-generation call can fail to produce usable text.
#[derive(Error, Debug)]
pub enum UpstreamFailure {
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("provider returned no text")]
    EmptyResponse,

    #[error("provider did not answer within {0:?}")]
    Timeout(Duration),
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &'static str;

    /// True when the text comes from canned templates rather than a model.
    fn is_canned(&self) -> bool {
        false
    }

    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, UpstreamFailure>;
}

/// Build a text generator from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Box<dyn TextGenerator>> {
    if settings.llm.mock {
        tracing::warn!(
            selection = ?settings.llm.mock_selection,
            "Mock mode enabled, notes come from canned templates instead of {}",
            settings.llm.provider
        );
        return Ok(Box::new(MockGenerator::new(settings.llm.mock_selection)));
    }

    match settings.llm.provider.to_lowercase().as_str() {
        "openai" => Ok(Box::new(OpenAiClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: openai",
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn unsupported_provider_returns_error() {
        let mut settings = Settings::default();
        settings.llm.provider = "unknown".to_string();
        settings.llm.api_key = "sk-test".to_string();

        let err = match build_provider(&settings) {
            Ok(_) => panic!("expected provider creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("Unsupported llm.provider"));
    }

    #[test]
    fn openai_provider_requires_api_key() {
        let settings = Settings::default();

        let err = match build_provider(&settings) {
            Ok(_) => panic!("expected provider creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("OpenAI API key is missing"));
    }

    #[test]
    fn provider_name_is_case_insensitive() {
        let mut settings = Settings::default();
        settings.llm.provider = "OpenAI".to_string();
        settings.llm.api_key = "sk-test".to_string();

        let provider = build_provider(&settings).expect("provider should build");
        assert_eq!(provider.name(), "openai");
        assert!(!provider.is_canned());
    }

    #[test]
    fn mock_mode_skips_api_key_check() {
        let mut settings = Settings::default();
        settings.llm.mock = true;

        let provider = build_provider(&settings).expect("mock provider should build");
        assert_eq!(provider.name(), "mock");
        assert!(provider.is_canned());
    }
}
