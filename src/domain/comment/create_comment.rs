//! CreateComment - validated request to reply to a thread.

use serde_json::Value;

use crate::domain::foundation::{payload, DomainError, ThreadId, UserId};

pub const CREATE_COMMENT: &str = "CREATE_COMMENT";

/// A comment creation request whose payload passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateComment {
    content: String,
    thread_id: ThreadId,
    owner: UserId,
}

impl CreateComment {
    /// Builds a CreateComment from a `{content, threadId, owner}` payload.
    ///
    /// # Errors
    ///
    /// - `CREATE_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY`
    /// - `CREATE_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION`
    pub fn new(payload: &Value) -> Result<Self, DomainError> {
        let [content, thread_id, owner] =
            payload::require_strings(CREATE_COMMENT, payload, ["content", "threadId", "owner"])?;

        Ok(Self {
            content: content.to_string(),
            thread_id: ThreadId::new(thread_id),
            owner: UserId::new(owner)?,
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn thread_id(&self) -> &ThreadId {
        &self.thread_id
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }
}
