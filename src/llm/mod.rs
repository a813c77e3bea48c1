//! LLM module for notegen
//!
//! Prompt construction and the text-generation providers behind the note
//! service: OpenAI chat completions, plus a canned mock for credential-less runs.

mod client;
mod mock;
mod openai;
mod prompts;

pub use client::{build_provider, GenerationRequest, TextGenerator, UpstreamFailure};
pub use mock::{MockGenerator, MockSelection};
pub use openai::OpenAiClient;
pub use prompts::{build_prompt, SYSTEM_INSTRUCTION};
