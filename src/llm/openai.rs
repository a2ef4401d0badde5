// src/llm/openai.rs

//! OpenAI-compatible chat completion client. No wrappers; just reqwest
//! against `chat/completions`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::env;

use super::{CompletionProvider, LlmError};

pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String, api_base: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            api_base,
            model,
        }
    }

    /// Build from the environment. Missing `OPENAI_API_KEY` is a
    /// configuration error the caller surfaces per request; the base URL
    /// and model fall back to the config defaults.
    pub fn from_env(api_base: &str, model: &str) -> Option<Self> {
        let api_key = env::var("OPENAI_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        Some(Self::new(api_key, api_base.to_string(), model.to_string()))
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(
        &self,
        prompt: &str,
        system: &str,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": prompt }
            ],
            "temperature": temperature,
        });

        let resp = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => LlmError::QuotaExceeded,
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::InvalidCredential,
                _ => LlmError::Upstream {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let payload: Value = resp
            .json()
            .await
            .map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

        let text = payload
            .pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                LlmError::MalformedResponse(format!("no message content in: {payload}"))
            })?;

        if text.trim().is_empty() {
            return Err(LlmError::MalformedResponse(
                "generation service returned empty text".to_string(),
            ));
        }

        Ok(text.to_string())
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
