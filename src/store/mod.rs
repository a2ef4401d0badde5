// src/store/mod.rs

//! SQLite message store. One table, `chat_messages`, mirroring the
//! upload pipeline's output: every row is one transcript or live message
//! in a conversation, ordered by timestamp.

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

/// One stored conversation message. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StoredMessage {
    pub id: i64,
    pub chat_history_id: String,
    pub sender_name: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

pub struct SqliteMessageStore {
    pub pool: SqlitePool,
}

impl SqliteMessageStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the schema if it does not exist yet.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS chat_messages (
                id              INTEGER PRIMARY KEY AUTOINCREMENT,
                chat_history_id TEXT NOT NULL,
                sender_name     TEXT NOT NULL,
                content         TEXT NOT NULL,
                timestamp       TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_chat_messages_history_ts
            ON chat_messages (chat_history_id, timestamp)
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Fetch a conversation's messages ordered by timestamp ascending.
    /// `limit`, when given, keeps the MOST RECENT rows (the tail of the
    /// conversation), still returned in ascending order.
    pub async fn fetch_messages(
        &self,
        chat_history_id: &str,
        limit: Option<i64>,
    ) -> Result<Vec<StoredMessage>, sqlx::Error> {
        let rows: Vec<StoredMessage> = match limit {
            Some(n) => {
                let mut tail: Vec<StoredMessage> = sqlx::query_as(
                    r#"
                    SELECT id, chat_history_id, sender_name, content, timestamp
                    FROM chat_messages
                    WHERE chat_history_id = ?
                    ORDER BY timestamp DESC, id DESC
                    LIMIT ?
                    "#,
                )
                .bind(chat_history_id)
                .bind(n)
                .fetch_all(&self.pool)
                .await?;
                tail.reverse();
                tail
            }
            None => {
                sqlx::query_as(
                    r#"
                    SELECT id, chat_history_id, sender_name, content, timestamp
                    FROM chat_messages
                    WHERE chat_history_id = ?
                    ORDER BY timestamp ASC, id ASC
                    "#,
                )
                .bind(chat_history_id)
                .fetch_all(&self.pool)
                .await?
            }
        };

        debug!(
            "Fetched {} messages for conversation {}",
            rows.len(),
            chat_history_id
        );
        Ok(rows)
    }

    pub async fn insert_message(
        &self,
        chat_history_id: &str,
        sender_name: &str,
        content: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<i64, sqlx::Error> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO chat_messages (chat_history_id, sender_name, content, timestamp)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(chat_history_id)
        .bind(sender_name)
        .bind(content)
        .bind(timestamp)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Bulk insert for the transcript importer. One transaction so a
    /// failed import leaves nothing behind.
    pub async fn insert_messages(
        &self,
        chat_history_id: &str,
        messages: &[(String, String, DateTime<Utc>)],
    ) -> Result<usize, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        for (sender_name, content, timestamp) in messages {
            sqlx::query(
                r#"
                INSERT INTO chat_messages (chat_history_id, sender_name, content, timestamp)
                VALUES (?, ?, ?, ?)
                "#,
            )
            .bind(chat_history_id)
            .bind(sender_name)
            .bind(content)
            .bind(timestamp)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(messages.len())
    }
}
