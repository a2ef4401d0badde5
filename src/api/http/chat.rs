// src/api/http/chat.rs

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::api::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponseRequest {
    pub chat_history_id: String,
    pub current_message: String,
    pub participant_name: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponseBody {
    pub response: String,
}

/// `generatePersonaReply`: the single inbound RPC. Body and response
/// shapes match the uploading client's contract.
pub async fn chat_response_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<ChatResponseRequest>,
) -> ApiResult<Json<ChatResponseBody>> {
    info!(
        "Reply requested for '{}' in conversation {}",
        request.participant_name, request.chat_history_id
    );

    let response = app_state
        .reply_service
        .generate_reply(
            &request.chat_history_id,
            &request.participant_name,
            &request.current_message,
        )
        .await?;

    Ok(Json(ChatResponseBody { response }))
}
