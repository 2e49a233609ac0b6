//! CreateThread - validated request to start a new thread.

use serde_json::Value;

use crate::domain::foundation::{payload, DomainError, UserId};

/// Sentinel prefix for CreateThread payload errors.
pub const CREATE_THREAD: &str = "CREATE_THREAD";

/// A thread creation request whose payload passed validation.
///
/// # Invariants
///
/// - `title`, `body` and `owner` are non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateThread {
    title: String,
    body: String,
    owner: UserId,
}

impl CreateThread {
    /// Builds a CreateThread from a `{title, body, owner}` payload.
    ///
    /// # Errors
    ///
    /// - `CREATE_THREAD.NOT_CONTAIN_NEEDED_PROPERTY` if a field is missing
    /// - `CREATE_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION` if a field is not a string
    pub fn new(payload: &Value) -> Result<Self, DomainError> {
        let [title, body, owner] =
            payload::require_strings(CREATE_THREAD, payload, ["title", "body", "owner"])?;

        Ok(Self {
            title: title.to_string(),
            body: body.to_string(),
            owner: UserId::new(owner)?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }
}
