//! DeleteComment - validated request to soft-delete a comment.

use serde_json::Value;

use crate::domain::foundation::{payload, CommentId, DomainError, ThreadId, UserId};

pub const DELETE_COMMENT: &str = "DELETE_COMMENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteComment {
    thread_id: ThreadId,
    comment_id: CommentId,
    owner: UserId,
}

impl DeleteComment {
    /// Builds a DeleteComment from a `{threadId, commentId, owner}` payload.
    ///
    /// # Errors
    ///
    /// - `DELETE_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY`
    /// - `DELETE_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION`
    pub fn new(payload: &Value) -> Result<Self, DomainError> {
        let [thread_id, comment_id, owner] =
            payload::require_strings(DELETE_COMMENT, payload, ["threadId", "commentId", "owner"])?;

        Ok(Self {
            thread_id: ThreadId::new(thread_id),
            comment_id: CommentId::new(comment_id),
            owner: UserId::new(owner)?,
        })
    }

    pub fn thread_id(&self) -> &ThreadId {
        &self.thread_id
    }

    pub fn comment_id(&self) -> &CommentId {
        &self.comment_id
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }
}
