//! Ownership view of a stored comment, used before any mutation.

use crate::domain::foundation::{CommentId, OwnedByUser, UserId};

/// Owner of an existing comment as read from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentOwner {
    pub comment_id: CommentId,
    pub owner: UserId,
}

impl OwnedByUser for CommentOwner {
    fn owner_id(&self) -> &UserId {
        &self.owner
    }

    fn forbidden_message(&self) -> &'static str {
        "Anda bukan pemilik komentar ini"
    }
}
