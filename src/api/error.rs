// src/api/error.rs
// Centralized error handling for HTTP API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use tracing::error;

use crate::llm::LlmError;
use crate::services::ReplyError;

/// Standard API error response: `{"error": message}` with a non-2xx
/// status, matching what clients of the reply endpoint expect.
#[derive(Debug)]
pub struct ApiError {
    pub message: String,
    pub status_code: StatusCode,
}

impl ApiError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: StatusCode::BAD_REQUEST,
        }
    }

    pub fn custom(status_code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Each failure class gets its own status and user-facing message; none
/// are swallowed into a generic 500.
impl From<ReplyError> for ApiError {
    fn from(err: ReplyError) -> Self {
        match &err {
            ReplyError::MissingCredential => {
                error!("Reply failed: {}", err);
                ApiError::internal("generation service is not configured")
            }
            ReplyError::Store(e) => {
                error!("Message store query failed: {}", e);
                ApiError::custom(
                    StatusCode::BAD_GATEWAY,
                    "failed to fetch conversation history",
                )
            }
            ReplyError::Generation(gen) => {
                error!("Generation call failed: {}", gen);
                match gen {
                    LlmError::QuotaExceeded => ApiError::custom(
                        StatusCode::TOO_MANY_REQUESTS,
                        "generation quota exceeded, try again later",
                    ),
                    LlmError::InvalidCredential => {
                        ApiError::internal("generation service rejected the configured credential")
                    }
                    _ => ApiError::custom(StatusCode::BAD_GATEWAY, "generation service error"),
                }
            }
        }
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_errors_map_to_distinct_responses() {
        let quota: ApiError = ReplyError::Generation(LlmError::QuotaExceeded).into();
        assert_eq!(quota.status_code, StatusCode::TOO_MANY_REQUESTS);

        let cred: ApiError = ReplyError::Generation(LlmError::InvalidCredential).into();
        assert_eq!(cred.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(cred.message.contains("credential"));

        let config: ApiError = ReplyError::MissingCredential.into();
        assert!(config.message.contains("not configured"));
    }
}
