//! Thread repository port.
//!
//! Defines the contract for persisting threads and reading them back for the
//! thread detail view. Threads are immutable once created, so the port has
//! no update or delete operations.

use async_trait::async_trait;

use crate::domain::comment::ThreadRecord;
use crate::domain::foundation::{DomainError, ThreadId};
use crate::domain::thread::{CreateThread, CreatedThread};

/// Sentinel prefix for operations an adapter did not override.
pub const THREAD_REPOSITORY: &str = "THREAD_REPOSITORY";

/// Repository port for thread persistence.
///
/// Every method defaults to `THREAD_REPOSITORY.METHOD_NOT_IMPLEMENTED`.
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Persist a new thread and return its id, title and owner.
    ///
    /// The adapter generates the `thread-` id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn add_thread(&self, _thread: &CreateThread) -> Result<CreatedThread, DomainError> {
        Err(DomainError::not_implemented(THREAD_REPOSITORY))
    }

    /// Succeeds only if the thread exists.
    ///
    /// # Errors
    ///
    /// - `ThreadNotFound` if no thread has this id
    async fn verify_thread_exists(&self, _id: &ThreadId) -> Result<(), DomainError> {
        Err(DomainError::not_implemented(THREAD_REPOSITORY))
    }

    /// Load a thread with its owner's username resolved.
    ///
    /// # Errors
    ///
    /// - `ThreadNotFound` if no thread has this id
    async fn get_thread_by_id(&self, _id: &ThreadId) -> Result<ThreadRecord, DomainError> {
        Err(DomainError::not_implemented(THREAD_REPOSITORY))
    }
}
