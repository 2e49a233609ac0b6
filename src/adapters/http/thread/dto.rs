//! HTTP DTOs for thread endpoints.
//!
//! Request bodies are read as raw JSON so that field presence and type are
//! judged by the domain entities, not by serde.

use serde::Serialize;

use crate::domain::comment::ThreadWithComments;
use crate::domain::thread::CreatedThread;

/// `data` of `POST /threads`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThreadData {
    pub added_thread: CreatedThread,
}

/// `data` of `GET /threads/:threadId`.
#[derive(Debug, Clone, Serialize)]
pub struct ThreadDetailData {
    pub thread: ThreadWithComments,
}
