//! CreatedThread - the persisted thread as echoed back to its author.

use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::{payload, DomainError, ThreadId, UserId};

pub const CREATED_THREAD: &str = "CREATED_THREAD";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedThread {
    id: ThreadId,
    title: String,
    owner: UserId,
}

impl CreatedThread {
    /// Builds a CreatedThread from an `{id, title, owner}` payload.
    ///
    /// # Errors
    ///
    /// - `CREATED_THREAD.NOT_CONTAIN_NEEDED_PROPERTY`
    /// - `CREATED_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION`
    pub fn new(payload: &Value) -> Result<Self, DomainError> {
        let [id, title, owner] =
            payload::require_strings(CREATED_THREAD, payload, ["id", "title", "owner"])?;

        Ok(Self {
            id: ThreadId::new(id),
            title: title.to_string(),
            owner: UserId::new(owner)?,
        })
    }

    pub fn id(&self) -> &ThreadId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }
}
