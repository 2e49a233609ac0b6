//! AddThreadHandler - Command handler for posting a new thread.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::foundation::{payload, DomainError, UserId};
use crate::domain::thread::{CreateThread, CreatedThread};
use crate::ports::ThreadRepository;

/// Command to post a thread.
///
/// Carries the raw request body so that missing and mistyped fields are
/// reported by `CreateThread` itself.
#[derive(Debug, Clone)]
pub struct AddThreadCommand {
    pub payload: Value,
}

impl AddThreadCommand {
    /// Builds the command from a request body, stamping the caller as owner.
    pub fn new(body: Value, owner: &UserId) -> Self {
        Self {
            payload: payload::with_fields(body, [("owner", owner.as_str())]),
        }
    }
}

/// Handler for posting threads.
pub struct AddThreadHandler {
    thread_repository: Arc<dyn ThreadRepository>,
}

impl AddThreadHandler {
    pub fn new(thread_repository: Arc<dyn ThreadRepository>) -> Self {
        Self { thread_repository }
    }

    pub async fn handle(&self, cmd: AddThreadCommand) -> Result<CreatedThread, DomainError> {
        let thread = CreateThread::new(&cmd.payload)?;
        self.thread_repository.add_thread(&thread).await
    }
}
