//! PostgreSQL message table (database of record)

use anyhow::Context;
use async_trait::async_trait;
use msgboard_core::{BoardError, MessageStore, Result};
use msgboard_types::Message;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::Config;

pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    /// Build the store over a lazy pool. No I/O happens here: connections
    /// are established per operation, so an unreachable database still lets
    /// the process come up degraded.
    pub fn connect(config: &Config) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy(&config.postgres_url())
            .context("Failed to configure PostgreSQL pool")?;

        Ok(Self { pool })
    }

    /// Idempotently ensure the messages table exists. Safe to call on every
    /// process start.
    pub async fn init_schema(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id BIGSERIAL PRIMARY KEY,
                content TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create messages table")?;

        Ok(())
    }
}

fn store_err(e: sqlx::Error) -> BoardError {
    BoardError::StoreUnavailable(e.to_string())
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn insert(&self, content: &str) -> Result<Message> {
        let row: MessageRow = sqlx::query_as(
            r#"
            INSERT INTO messages (content)
            VALUES ($1)
            RETURNING id, content, created_at
            "#,
        )
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(row.into())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<Message>> {
        let rows: Vec<MessageRow> = sqlx::query_as(
            r#"
            SELECT id, content, created_at
            FROM messages
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM messages")
            .fetch_one(&self.pool)
            .await
            .map_err(store_err)?;

        Ok(count)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(store_err)?;

        Ok(())
    }
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct MessageRow {
    id: i64,
    content: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<MessageRow> for Message {
    fn from(r: MessageRow) -> Self {
        Message {
            id: r.id,
            content: r.content,
            created_at: r.created_at,
        }
    }
}
