// src/services/reply.rs

//! Persona reply orchestration: fetch the conversation, profile the
//! participant, compose the prompt, call the generation service. Stateless
//! between requests — every call recomputes the profile from the store.

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument};

use crate::llm::{CompletionProvider, LlmError};
use crate::persona::{AnalysisParams, StyleProfile};
use crate::prompt::{compose_reply_prompt, ContextLine, PromptInputs, SYSTEM_INSTRUCTION};
use crate::store::{SqliteMessageStore, StoredMessage};

/// Request-level failures. Analysis never appears here — an empty or
/// odd corpus degrades to neutral defaults instead of failing.
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("generation service is not configured")]
    MissingCredential,

    #[error("failed to fetch conversation history: {0}")]
    Store(#[from] sqlx::Error),

    #[error(transparent)]
    Generation(#[from] LlmError),
}

/// Tunables the service reads once at construction.
#[derive(Debug, Clone)]
pub struct ReplyConfig {
    /// Most recent messages rendered as transcript context.
    pub context_messages: usize,
    /// Cap on raw example messages included for style grounding.
    pub example_messages: usize,
    /// Corpus rows fetched from the store per request.
    pub history_fetch_cap: i64,
    pub temperature: f32,
    pub analysis: AnalysisParams,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            context_messages: 30,
            example_messages: 50,
            history_fetch_cap: 1000,
            temperature: 0.8,
            analysis: AnalysisParams::default(),
        }
    }
}

pub struct ReplyService {
    store: Arc<SqliteMessageStore>,
    provider: Option<Arc<dyn CompletionProvider>>,
    config: ReplyConfig,
}

impl ReplyService {
    pub fn new(
        store: Arc<SqliteMessageStore>,
        provider: Option<Arc<dyn CompletionProvider>>,
        config: ReplyConfig,
    ) -> Self {
        Self {
            store,
            provider,
            config,
        }
    }

    /// The single inbound operation: generate a reply in the voice of
    /// `participant` for `current_message`. Fails atomically — no partial
    /// reply ever reaches the caller.
    #[instrument(skip(self, current_message), fields(chat = %chat_history_id, participant = %participant))]
    pub async fn generate_reply(
        &self,
        chat_history_id: &str,
        participant: &str,
        current_message: &str,
    ) -> Result<String, ReplyError> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(ReplyError::MissingCredential)?;

        let history = self
            .store
            .fetch_messages(chat_history_id, Some(self.config.history_fetch_cap))
            .await?;

        let prompt = self.build_prompt(&history, participant, current_message);

        info!(
            "Generating reply: {} history messages, prompt {} chars",
            history.len(),
            prompt.len()
        );

        let reply = provider
            .complete(&prompt, SYSTEM_INSTRUCTION, self.config.temperature)
            .await?;

        Ok(reply)
    }

    /// Pure prompt assembly, split out so tests can assert on the exact
    /// string without a generation backend.
    pub fn build_prompt(
        &self,
        history: &[StoredMessage],
        participant: &str,
        current_message: &str,
    ) -> String {
        let corpus: Vec<&str> = history
            .iter()
            .filter(|m| m.sender_name == participant)
            .map(|m| m.content.as_str())
            .collect();

        let profile = StyleProfile::from_corpus(&corpus, &self.config.analysis);

        let example_start = corpus.len().saturating_sub(self.config.example_messages);
        let examples = &corpus[example_start..];

        let context_start = history.len().saturating_sub(self.config.context_messages);
        let recent_context: Vec<ContextLine> = history[context_start..]
            .iter()
            .map(|m| ContextLine {
                sender: m.sender_name.clone(),
                content: m.content.clone(),
            })
            .collect();

        compose_reply_prompt(&PromptInputs {
            participant,
            current_message,
            recent_context: &recent_context,
            examples,
            profile: &profile,
        })
    }
}
