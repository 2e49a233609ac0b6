//! Comment repository port.
//!
//! Comments are written once, soft-deleted by their owner, and read back in
//! bulk for a thread's detail view.

use async_trait::async_trait;

use crate::domain::comment::{CommentRecord, CreateComment, CreatedComment, DeleteComment};
use crate::domain::foundation::{CommentId, DomainError, ThreadId, UserId};

/// Sentinel prefix for operations an adapter did not override.
pub const COMMENT_REPOSITORY: &str = "COMMENT_REPOSITORY";

/// Repository port for comment persistence.
///
/// Every method defaults to `COMMENT_REPOSITORY.METHOD_NOT_IMPLEMENTED`.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment and return its id, content and owner.
    ///
    /// The adapter generates the `comment-` id. The thread is assumed to
    /// have been verified by the caller.
    async fn add_comment(&self, _comment: &CreateComment) -> Result<CreatedComment, DomainError> {
        Err(DomainError::not_implemented(COMMENT_REPOSITORY))
    }

    /// Succeeds only if the comment exists on `thread_id` and belongs to
    /// `owner`.
    ///
    /// # Errors
    ///
    /// - `CommentNotFound` if the thread has no comment with this id
    /// - `Forbidden` if the comment belongs to someone else
    async fn verify_comment_owner(
        &self,
        _thread_id: &ThreadId,
        _comment_id: &CommentId,
        _owner: &UserId,
    ) -> Result<(), DomainError> {
        Err(DomainError::not_implemented(COMMENT_REPOSITORY))
    }

    /// Mark the comment as deleted. Content is kept in storage.
    ///
    /// Deleting an already deleted comment succeeds.
    ///
    /// # Errors
    ///
    /// - `CommentNotFound` if the thread has no comment with this id
    async fn delete_comment(&self, _delete: &DeleteComment) -> Result<(), DomainError> {
        Err(DomainError::not_implemented(COMMENT_REPOSITORY))
    }

    /// All comments of a thread, including deleted ones, with usernames
    /// resolved. Order is unspecified.
    async fn get_comments_by_thread_id(
        &self,
        _thread_id: &ThreadId,
    ) -> Result<Vec<CommentRecord>, DomainError> {
        Err(DomainError::not_implemented(COMMENT_REPOSITORY))
    }
}
