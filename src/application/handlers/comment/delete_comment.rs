//! DeleteCommentHandler - Command handler for soft-deleting a comment.

use std::sync::Arc;

use serde_json::json;

use crate::domain::comment::DeleteComment;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{CommentRepository, ThreadRepository};

/// Command to delete a comment on behalf of the caller.
#[derive(Debug, Clone)]
pub struct DeleteCommentCommand {
    pub payload: serde_json::Value,
}

impl DeleteCommentCommand {
    pub fn new(thread_id: &str, comment_id: &str, owner: &UserId) -> Self {
        Self {
            payload: json!({
                "threadId": thread_id,
                "commentId": comment_id,
                "owner": owner.as_str(),
            }),
        }
    }
}

/// Handler for deleting comments.
///
/// Ownership is verified before any mutation is attempted.
pub struct DeleteCommentHandler {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentHandler {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    pub async fn handle(&self, cmd: DeleteCommentCommand) -> Result<(), DomainError> {
        let delete = DeleteComment::new(&cmd.payload)?;

        self.thread_repository
            .verify_thread_exists(delete.thread_id())
            .await?;

        self.comment_repository
            .verify_comment_owner(delete.thread_id(), delete.comment_id(), delete.owner())
            .await?;

        self.comment_repository.delete_comment(&delete).await
    }
}
