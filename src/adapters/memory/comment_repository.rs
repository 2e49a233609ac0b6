//! In-memory implementation of CommentRepository.

use async_trait::async_trait;
use serde_json::json;

use crate::domain::comment::{
    CommentOwner, CommentRecord, CreateComment, CreatedComment, DeleteComment,
};
use crate::domain::foundation::{
    CommentId, CommentStatus, DomainError, OwnedByUser, StateMachine, ThreadId, Timestamp, UserId,
};
use crate::ports::CommentRepository;

use super::store::{InMemoryForumStore, StoredComment};

#[derive(Debug, Clone)]
pub struct InMemoryCommentRepository {
    store: InMemoryForumStore,
}

impl InMemoryCommentRepository {
    pub fn new(store: InMemoryForumStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn add_comment(&self, comment: &CreateComment) -> Result<CreatedComment, DomainError> {
        let stored = StoredComment {
            id: CommentId::generate(),
            thread_id: comment.thread_id().clone(),
            content: comment.content().to_string(),
            owner: comment.owner().clone(),
            status: CommentStatus::Active,
            created_at: Timestamp::now(),
        };

        let created = CreatedComment::new(&json!({
            "id": stored.id.as_str(),
            "content": stored.content,
            "owner": stored.owner.as_str(),
        }))?;

        self.store.data.write().await.comments.push(stored);
        Ok(created)
    }

    async fn verify_comment_owner(
        &self,
        thread_id: &ThreadId,
        comment_id: &CommentId,
        owner: &UserId,
    ) -> Result<(), DomainError> {
        let data = self.store.data.read().await;
        let comment = data
            .comments
            .iter()
            .find(|c| &c.id == comment_id && &c.thread_id == thread_id)
            .ok_or_else(|| DomainError::comment_not_found(comment_id.as_str()))?;

        CommentOwner {
            comment_id: comment.id.clone(),
            owner: comment.owner.clone(),
        }
        .check_ownership(owner)
    }

    async fn delete_comment(&self, delete: &DeleteComment) -> Result<(), DomainError> {
        let mut data = self.store.data.write().await;
        let comment = data
            .comments
            .iter_mut()
            .find(|c| &c.id == delete.comment_id() && &c.thread_id == delete.thread_id())
            .ok_or_else(|| DomainError::comment_not_found(delete.comment_id().as_str()))?;

        if !comment.status.is_deleted() {
            comment.status = comment.status.transition_to(CommentStatus::Deleted)?;
        }
        Ok(())
    }

    async fn get_comments_by_thread_id(
        &self,
        thread_id: &ThreadId,
    ) -> Result<Vec<CommentRecord>, DomainError> {
        let data = self.store.data.read().await;

        Ok(data
            .comments
            .iter()
            .filter(|c| &c.thread_id == thread_id)
            .map(|c| CommentRecord {
                id: c.id.clone(),
                username: data.username_of(&c.owner),
                date: c.created_at,
                content: c.content.clone(),
                is_deleted: c.status.is_deleted(),
            })
            .collect())
    }
}
