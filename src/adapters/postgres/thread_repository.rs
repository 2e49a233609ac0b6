//! PostgreSQL implementation of ThreadRepository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{PgPool, Row};

use crate::domain::comment::ThreadRecord;
use crate::domain::foundation::{DomainError, ThreadId, Timestamp};
use crate::domain::thread::{CreateThread, CreatedThread};
use crate::ports::ThreadRepository;

/// PostgreSQL implementation of ThreadRepository.
#[derive(Clone)]
pub struct PostgresThreadRepository {
    pool: PgPool,
}

impl PostgresThreadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for PostgresThreadRepository {
    async fn add_thread(&self, thread: &CreateThread) -> Result<CreatedThread, DomainError> {
        let id = ThreadId::generate();
        let created_at = Timestamp::now();

        let row = sqlx::query(
            r#"
            INSERT INTO threads (id, title, body, owner, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, owner
            "#,
        )
        .bind(id.as_str())
        .bind(thread.title())
        .bind(thread.body())
        .bind(thread.owner().as_str())
        .bind(created_at.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert thread: {}", e)))?;

        tracing::debug!(thread_id = %id, "inserted thread");

        CreatedThread::new(&json!({
            "id": get_string(&row, "id")?,
            "title": get_string(&row, "title")?,
            "owner": get_string(&row, "owner")?,
        }))
    }

    async fn verify_thread_exists(&self, id: &ThreadId) -> Result<(), DomainError> {
        let row = sqlx::query("SELECT id FROM threads WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                DomainError::database(format!("Failed to check thread existence: {}", e))
            })?;

        match row {
            Some(_) => Ok(()),
            None => Err(DomainError::thread_not_found(id.as_str())),
        }
    }

    async fn get_thread_by_id(&self, id: &ThreadId) -> Result<ThreadRecord, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT t.id, t.title, t.body, t.created_at,
                   COALESCE(u.username, t.owner) AS username
            FROM threads t
            LEFT JOIN users u ON u.id = t.owner
            WHERE t.id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch thread: {}", e)))?
        .ok_or_else(|| DomainError::thread_not_found(id.as_str()))?;

        let created_at: chrono::DateTime<chrono::Utc> = row
            .try_get("created_at")
            .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?;

        Ok(ThreadRecord {
            id: ThreadId::new(get_string(&row, "id")?),
            title: get_string(&row, "title")?,
            body: get_string(&row, "body")?,
            date: Timestamp::from_datetime(created_at),
            username: get_string(&row, "username")?,
        })
    }
}

pub(super) fn get_string(row: &sqlx::postgres::PgRow, column: &str) -> Result<String, DomainError> {
    row.try_get(column)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", column, e)))
}
