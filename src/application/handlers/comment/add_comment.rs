//! AddCommentHandler - Command handler for replying to a thread.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::comment::{CreateComment, CreatedComment};
use crate::domain::foundation::{payload, DomainError, UserId};
use crate::ports::{CommentRepository, ThreadRepository};

/// Command to add a comment to a thread.
#[derive(Debug, Clone)]
pub struct AddCommentCommand {
    pub payload: Value,
}

impl AddCommentCommand {
    /// Builds the command from a request body, the thread id taken from the
    /// path, and the caller as owner.
    pub fn new(body: Value, thread_id: &str, owner: &UserId) -> Self {
        Self {
            payload: payload::with_fields(
                body,
                [("threadId", thread_id), ("owner", owner.as_str())],
            ),
        }
    }
}

/// Handler for adding comments.
pub struct AddCommentHandler {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AddCommentHandler {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    pub async fn handle(&self, cmd: AddCommentCommand) -> Result<CreatedComment, DomainError> {
        let comment = CreateComment::new(&cmd.payload)?;

        self.thread_repository
            .verify_thread_exists(comment.thread_id())
            .await?;

        self.comment_repository.add_comment(&comment).await
    }
}
