//! HTTP handlers for thread endpoints.

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
use crate::application::handlers::thread::{
    AddThreadCommand, AddThreadHandler, GetThreadDetailHandler, GetThreadDetailQuery,
};
use crate::domain::foundation::ThreadId;

use super::dto::{AddedThreadData, ThreadDetailData};

#[derive(Clone)]
pub struct ThreadHandlers {
    add_handler: Arc<AddThreadHandler>,
    detail_handler: Arc<GetThreadDetailHandler>,
}

impl ThreadHandlers {
    pub fn new(
        add_handler: Arc<AddThreadHandler>,
        detail_handler: Arc<GetThreadDetailHandler>,
    ) -> Self {
        Self {
            add_handler,
            detail_handler,
        }
    }
}

/// POST /threads - Post a new thread
pub async fn post_thread(
    State(handlers): State<ThreadHandlers>,
    RequireAuth(user): RequireAuth,
    body: Option<Json<Value>>,
) -> Result<Response, ApiError> {
    let body = body.map(|Json(value)| value).unwrap_or(Value::Null);
    let cmd = AddThreadCommand::new(body, &user.id);

    let added_thread = handlers.add_handler.handle(cmd).await?;
    tracing::info!(
        thread_id = %added_thread.id(),
        owner = %user.id,
        username = %user.username_or_id(),
        "thread created"
    );

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::with_data(AddedThreadData { added_thread })),
    )
        .into_response())
}

/// GET /threads/:thread_id - Thread with its comments
pub async fn get_thread_detail(
    State(handlers): State<ThreadHandlers>,
    Path(thread_id): Path<String>,
) -> Result<Response, ApiError> {
    let query = GetThreadDetailQuery {
        thread_id: ThreadId::new(thread_id),
    };

    let thread = handlers.detail_handler.handle(query).await?;

    Ok((
        StatusCode::OK,
        Json(SuccessResponse::with_data(ThreadDetailData { thread })),
    )
        .into_response())
}
