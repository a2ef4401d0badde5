// src/llm/mod.rs

//! Client side of the persona response service: an opaque, hosted
//! text-completion API reached over HTTPS.

pub mod error;
pub mod openai;

pub use error::LlmError;
pub use openai::OpenAiProvider;

use async_trait::async_trait;

/// Seam for the generation backend. The reply service only sees this
/// trait, so tests can substitute a canned provider.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Complete `prompt` under `system` guidance. Returns the generated
    /// text, or a typed error the API layer can map to a distinct
    /// user-facing message.
    async fn complete(
        &self,
        prompt: &str,
        system: &str,
        temperature: f32,
    ) -> Result<String, LlmError>;

    /// Provider name for logging.
    fn name(&self) -> &'static str;
}
