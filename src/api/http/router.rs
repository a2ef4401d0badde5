// src/api/http/router.rs
// HTTP router composition for the REST endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::{
    chat::chat_response_handler, handlers::health_handler, import::import_handler,
};
use crate::state::AppState;

/// Main HTTP router. CORS is permissive so the uploading client can call
/// from any origin; preflight OPTIONS is answered by the layer.
pub fn http_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/chat-response", post(chat_response_handler))
        .route("/import", post(import_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
