//! PostgreSQL implementation of CommentRepository.
//!
//! Deletion is a soft delete: `is_deleted` is set and the content stays.
//! Lookups by comment id are always scoped to the thread in the request.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{PgPool, Row};

use crate::domain::comment::{
    CommentOwner, CommentRecord, CreateComment, CreatedComment, DeleteComment,
};
use crate::domain::foundation::{CommentId, DomainError, OwnedByUser, ThreadId, Timestamp, UserId};
use crate::ports::CommentRepository;

use super::thread_repository::get_string;

/// PostgreSQL implementation of CommentRepository.
#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn add_comment(&self, comment: &CreateComment) -> Result<CreatedComment, DomainError> {
        let id = CommentId::generate();
        let created_at = Timestamp::now();

        let row = sqlx::query(
            r#"
            INSERT INTO comments (id, thread_id, content, owner, is_deleted, created_at)
            VALUES ($1, $2, $3, $4, FALSE, $5)
            RETURNING id, content, owner
            "#,
        )
        .bind(id.as_str())
        .bind(comment.thread_id().as_str())
        .bind(comment.content())
        .bind(comment.owner().as_str())
        .bind(created_at.as_datetime())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to insert comment: {}", e)))?;

        tracing::debug!(comment_id = %id, thread_id = %comment.thread_id(), "inserted comment");

        CreatedComment::new(&json!({
            "id": get_string(&row, "id")?,
            "content": get_string(&row, "content")?,
            "owner": get_string(&row, "owner")?,
        }))
    }

    async fn verify_comment_owner(
        &self,
        thread_id: &ThreadId,
        comment_id: &CommentId,
        owner: &UserId,
    ) -> Result<(), DomainError> {
        let row = sqlx::query("SELECT owner FROM comments WHERE id = $1 AND thread_id = $2")
            .bind(comment_id.as_str())
            .bind(thread_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to fetch comment owner: {}", e)))?
            .ok_or_else(|| DomainError::comment_not_found(comment_id.as_str()))?;

        let stored_owner = UserId::new(get_string(&row, "owner")?)
            .map_err(|e| DomainError::database(format!("Invalid owner: {}", e)))?;

        CommentOwner {
            comment_id: comment_id.clone(),
            owner: stored_owner,
        }
        .check_ownership(owner)
    }

    async fn delete_comment(&self, delete: &DeleteComment) -> Result<(), DomainError> {
        let result =
            sqlx::query("UPDATE comments SET is_deleted = TRUE WHERE id = $1 AND thread_id = $2")
                .bind(delete.comment_id().as_str())
                .bind(delete.thread_id().as_str())
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::database(format!("Failed to delete comment: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::comment_not_found(delete.comment_id().as_str()));
        }

        Ok(())
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &ThreadId,
    ) -> Result<Vec<CommentRecord>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT c.id, c.content, c.is_deleted, c.created_at,
                   COALESCE(u.username, c.owner) AS username
            FROM comments c
            LEFT JOIN users u ON u.id = c.owner
            WHERE c.thread_id = $1
            ORDER BY c.created_at ASC
            "#,
        )
        .bind(thread_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch comments: {}", e)))?;

        rows.iter().map(row_to_comment_record).collect()
    }
}

fn row_to_comment_record(row: &sqlx::postgres::PgRow) -> Result<CommentRecord, DomainError> {
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database(format!("Failed to get created_at: {}", e)))?;

    let is_deleted: bool = row
        .try_get("is_deleted")
        .map_err(|e| DomainError::database(format!("Failed to get is_deleted: {}", e)))?;

    Ok(CommentRecord {
        id: CommentId::new(get_string(row, "id")?),
        username: get_string(row, "username")?,
        date: Timestamp::from_datetime(created_at),
        content: get_string(row, "content")?,
        is_deleted,
    })
}
