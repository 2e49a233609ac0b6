//! HTTP DTOs for comment endpoints.

use serde::Serialize;

use crate::domain::comment::CreatedComment;

/// `data` of `POST /threads/:threadId/comments`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCommentData {
    pub added_comment: CreatedComment,
}
