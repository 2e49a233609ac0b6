//! HTTP handlers for comment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::response::SuccessResponse;
use crate::application::handlers::comment::{
    AddCommentCommand, AddCommentHandler, DeleteCommentCommand, DeleteCommentHandler,
};

use super::dto::AddedCommentData;

/// Acknowledgement returned after a soft delete.
pub const COMMENT_DELETED_MESSAGE: &str = "komentar telah dihapus";

#[derive(Clone)]
pub struct CommentHandlers {
    add_handler: Arc<AddCommentHandler>,
    delete_handler: Arc<DeleteCommentHandler>,
}

impl CommentHandlers {
    pub fn new(
        add_handler: Arc<AddCommentHandler>,
        delete_handler: Arc<DeleteCommentHandler>,
    ) -> Self {
        Self {
            add_handler,
            delete_handler,
        }
    }
}

/// POST /threads/:thread_id/comments - Reply to a thread
pub async fn post_comment(
    State(handlers): State<CommentHandlers>,
    RequireAuth(user): RequireAuth,
    Path(thread_id): Path<String>,
    body: Option<Json<Value>>,
) -> Result<Response, ApiError> {
    let body = body.map(|Json(value)| value).unwrap_or(Value::Null);
    let cmd = AddCommentCommand::new(body, &thread_id, &user.id);

    let added_comment = handlers.add_handler.handle(cmd).await?;
    tracing::info!(
        comment_id = %added_comment.id(),
        thread_id = %thread_id,
        username = %user.username_or_id(),
        "comment created"
    );

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::with_data(AddedCommentData { added_comment })),
    )
        .into_response())
}

/// DELETE /threads/:thread_id/comments/:comment_id - Soft-delete own comment
pub async fn delete_comment(
    State(handlers): State<CommentHandlers>,
    RequireAuth(user): RequireAuth,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let cmd = DeleteCommentCommand::new(&thread_id, &comment_id, &user.id);

    handlers.delete_handler.handle(cmd).await?;
    tracing::info!(comment_id = %comment_id, owner = %user.id, "comment deleted");

    Ok((
        StatusCode::OK,
        Json(SuccessResponse::with_message(COMMENT_DELETED_MESSAGE)),
    )
        .into_response())
}
