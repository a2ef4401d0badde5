// src/state.rs

use std::sync::Arc;

use crate::config::EcholineConfig;
use crate::llm::{CompletionProvider, OpenAiProvider};
use crate::persona::AnalysisParams;
use crate::services::reply::{ReplyConfig, ReplyService};
use crate::store::SqliteMessageStore;
use sqlx::SqlitePool;

/// Shared, immutable per-process state. Nothing here is mutated after
/// startup, so concurrent requests need no locking.
pub struct AppState {
    pub store: Arc<SqliteMessageStore>,
    pub reply_service: Arc<ReplyService>,
}

/// Wire the store and reply service together. `provider` is `None` when
/// the generation credential is absent; requests then fail with the
/// configuration error instead of the process refusing to start.
pub fn create_app_state(pool: SqlitePool, config: &EcholineConfig) -> AppState {
    let store = Arc::new(SqliteMessageStore::new(pool));

    let provider: Option<Arc<dyn CompletionProvider>> =
        OpenAiProvider::from_env(&config.openai_base_url, &config.model)
            .map(|p| Arc::new(p) as Arc<dyn CompletionProvider>);

    let reply_config = ReplyConfig {
        context_messages: config.context_messages,
        example_messages: config.example_messages,
        history_fetch_cap: config.history_fetch_cap,
        temperature: config.temperature,
        analysis: AnalysisParams {
            phrase_words: config.phrase_words,
            phrase_top_k: config.phrase_top_k,
        },
    };

    let reply_service = Arc::new(ReplyService::new(store.clone(), provider, reply_config));

    AppState {
        store,
        reply_service,
    }
}
