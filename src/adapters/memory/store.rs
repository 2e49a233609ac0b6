//! Shared in-memory storage behind both in-memory repositories.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::foundation::{CommentId, CommentStatus, ThreadId, Timestamp, UserId};

use super::{InMemoryCommentRepository, InMemoryThreadRepository};

#[derive(Debug, Clone)]
pub(super) struct StoredThread {
    pub id: ThreadId,
    pub title: String,
    pub body: String,
    pub owner: UserId,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub(super) struct StoredComment {
    pub id: CommentId,
    pub thread_id: ThreadId,
    pub content: String,
    pub owner: UserId,
    pub status: CommentStatus,
    pub created_at: Timestamp,
}

#[derive(Debug, Default)]
pub(super) struct ForumData {
    /// user id -> username
    pub users: HashMap<String, String>,
    pub threads: Vec<StoredThread>,
    pub comments: Vec<StoredComment>,
}

impl ForumData {
    /// Username for `owner`, or the owner id when the user is unknown.
    pub fn username_of(&self, owner: &UserId) -> String {
        self.users
            .get(owner.as_str())
            .cloned()
            .unwrap_or_else(|| owner.as_str().to_string())
    }

    pub fn has_thread(&self, id: &ThreadId) -> bool {
        self.threads.iter().any(|t| &t.id == id)
    }
}

/// In-memory forum storage shared by the thread and comment repositories.
///
/// Cloning the store shares the same data.
#[derive(Debug, Clone, Default)]
pub struct InMemoryForumStore {
    pub(super) data: Arc<RwLock<ForumData>>,
}

impl InMemoryForumStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `username` resolvable for `id` in thread detail reads.
    pub async fn register_user(&self, id: &UserId, username: impl Into<String>) {
        self.data
            .write()
            .await
            .users
            .insert(id.as_str().to_string(), username.into());
    }

    pub fn thread_repository(&self) -> InMemoryThreadRepository {
        InMemoryThreadRepository::new(self.clone())
    }

    pub fn comment_repository(&self) -> InMemoryCommentRepository {
        InMemoryCommentRepository::new(self.clone())
    }

    /// Status of a stored comment, `None` if it does not exist.
    pub async fn comment_status(&self, id: &CommentId) -> Option<CommentStatus> {
        self.data
            .read()
            .await
            .comments
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.status)
    }
}
