// src/main.rs

use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use echoline::api::http::router::http_router;
use echoline::config::CONFIG;
use echoline::state::create_app_state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let level = CONFIG
        .log_level
        .parse::<Level>()
        .unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting echoline");
    info!("Model: {}", CONFIG.model);

    let pool = SqlitePoolOptions::new()
        .max_connections(CONFIG.sqlite_max_connections)
        .connect(&CONFIG.database_url)
        .await?;

    let app_state = Arc::new(create_app_state(pool, &CONFIG));
    app_state.store.run_migrations().await?;

    if std::env::var("OPENAI_API_KEY").is_err() {
        warn!("OPENAI_API_KEY not set - reply requests will fail until it is configured");
    }

    let app = http_router(app_state);

    let bind_address = CONFIG.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
