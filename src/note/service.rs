//! Note generation service
//!
//! Validates a request, builds the prompt, calls the text generator and
//! falls back to a templated note when the generator has nothing usable.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::llm::{
    build_prompt, build_provider, GenerationRequest, TextGenerator, UpstreamFailure,
    SYSTEM_INSTRUCTION,
};
use crate::note::model::{Category, NoteRequest, NoteResponse, NoteSource, ValidNote};

/// Stateless note service shared by the HTTP handler and the CLI
pub struct NoteService {
    generator: Arc<dyn TextGenerator>,
    timeout: Duration,
}

impl NoteService {
    pub fn new(generator: Arc<dyn TextGenerator>, timeout: Duration) -> Self {
        Self { generator, timeout }
    }

    /// Build the configured provider and wrap it in a service.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let generator: Arc<dyn TextGenerator> = Arc::from(build_provider(settings)?);
        Ok(Self::new(generator, settings.generation_timeout()))
    }

    /// Name of the generator behind this service
    pub fn provider_name(&self) -> &'static str {
        self.generator.name()
    }

    /// Produce a note for a request.
    ///
    /// Only invalid input is reported as an error. Provider failures are
    /// logged and answered with [`fallback_note`].
    pub async fn generate(&self, request: &NoteRequest) -> crate::Result<NoteResponse> {
        let note = request.validate()?;
        let prompt = build_prompt(note.category, &note.name, &note.subject);

        debug!(
            category = %note.category,
            provider = self.generator.name(),
            "Requesting note"
        );

        match self.call_generator(&note, &prompt).await {
            Ok(text) => {
                let source = if self.generator.is_canned() {
                    NoteSource::Mock
                } else {
                    NoteSource::Generated
                };
                info!(category = %note.category, ?source, "Note generated");
                Ok(NoteResponse { note: text, source })
            }
            Err(e) => {
                warn!(
                    category = %note.category,
                    provider = self.generator.name(),
                    error = %e,
                    "Generation failed, using fallback note"
                );
                Ok(NoteResponse {
                    note: fallback_note(note.category, &note.name, &note.subject),
                    source: NoteSource::Fallback,
                })
            }
        }
    }

    async fn call_generator(&self, note: &ValidNote, prompt: &str) -> Result<String, UpstreamFailure> {
        let request = GenerationRequest {
            system: SYSTEM_INSTRUCTION,
            prompt,
            category: note.category,
            name: &note.name,
            subject: &note.subject,
        };

        let text = tokio::time::timeout(self.timeout, self.generator.generate(request))
            .await
            .map_err(|_| UpstreamFailure::Timeout(self.timeout))??;

        let text = text.trim();
        if text.is_empty() {
            return Err(UpstreamFailure::EmptyResponse);
        }

        Ok(text.to_string())
    }
}

/// Deterministic note used when the generator fails or returns nothing.
pub fn fallback_note(category: Category, name: &str, subject: &str) -> String {
    match category {
        Category::ThankYou => format!(
            "Dear {name}, thank you so much for your purchase of {subject}! \
We truly appreciate your business."
        ),
        Category::Apology => format!(
            "Dear {name}, we sincerely apologize for the trouble with {subject}. \
We are taking responsibility and will make it right."
        ),
        Category::Welcome => format!(
            "Dear {name}, welcome to {subject}! We are thrilled to have you with us."
        ),
        Category::FollowUp => format!(
            "Dear {name}, we wanted to check in about {subject}. \
Please let us know if there is anything we can do for you."
        ),
        Category::General => format!(
            "Dear {name}, thank you so much for reaching out regarding {subject}! \
We truly appreciate your business."
        ),
    }
}
