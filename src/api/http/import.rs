// src/api/http/import.rs

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::api::error::{ApiError, ApiResult};
use crate::import::{parse_transcript, participants, resolve_timestamps};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRequest {
    pub chat_history_id: String,
    pub transcript: String,
}

#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub imported: usize,
    pub participants: Vec<String>,
}

/// Parse an exported transcript and load it into the message store.
pub async fn import_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<ImportRequest>,
) -> ApiResult<Json<ImportResponse>> {
    let messages = parse_transcript(&request.transcript);
    if messages.is_empty() {
        return Err(ApiError::bad_request(
            "transcript contained no parseable messages",
        ));
    }

    let names = participants(&messages);
    let rows = resolve_timestamps(&messages, Utc::now());

    let imported = app_state
        .store
        .insert_messages(&request.chat_history_id, &rows)
        .await
        .map_err(|e| {
            tracing::error!("Transcript import failed: {}", e);
            ApiError::internal("failed to store imported transcript")
        })?;

    info!(
        "Imported {} messages ({} participants) into conversation {}",
        imported,
        names.len(),
        request.chat_history_id
    );

    Ok(Json(ImportResponse {
        imported,
        participants: names,
    }))
}
