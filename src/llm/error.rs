// src/llm/error.rs

use thiserror::Error;

/// Failures of the generation service, subtyped so each maps to a
/// distinct user-facing message instead of being swallowed.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("generation quota exceeded")]
    QuotaExceeded,

    #[error("generation service rejected the configured credential")]
    InvalidCredential,

    #[error("generation service returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("malformed response from generation service: {0}")]
    MalformedResponse(String),

    #[error("failed to reach generation service: {0}")]
    Http(#[from] reqwest::Error),
}
