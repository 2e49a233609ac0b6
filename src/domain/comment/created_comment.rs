//! CreatedComment - the persisted comment as echoed back to its author.

use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::{payload, CommentId, DomainError, UserId};

pub const CREATED_COMMENT: &str = "CREATED_COMMENT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedComment {
    id: CommentId,
    content: String,
    owner: UserId,
}

impl CreatedComment {
    /// Builds a CreatedComment from an `{id, content, owner}` payload.
    pub fn new(payload: &Value) -> Result<Self, DomainError> {
        let [id, content, owner] =
            payload::require_strings(CREATED_COMMENT, payload, ["id", "content", "owner"])?;

        Ok(Self {
            id: CommentId::new(id),
            content: content.to_string(),
            owner: UserId::new(owner)?,
        })
    }

    pub fn id(&self) -> &CommentId {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }
}
