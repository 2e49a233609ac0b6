//! Application router assembly.

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::adapters::http::comment::{comment_routes, CommentHandlers};
use crate::adapters::http::middleware::AuthState;
use crate::adapters::http::thread::{thread_routes, ThreadHandlers};
use crate::application::handlers::{
    AddCommentHandler, AddThreadHandler, DeleteCommentHandler, GetThreadDetailHandler,
};
use crate::ports::{CommentRepository, ThreadRepository};

/// Wires handlers over the given ports and returns the full API router.
pub fn build_router(
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    validator: AuthState,
) -> Router {
    let thread_handlers = ThreadHandlers::new(
        Arc::new(AddThreadHandler::new(thread_repository.clone())),
        Arc::new(GetThreadDetailHandler::new(
            thread_repository.clone(),
            comment_repository.clone(),
        )),
    );

    let comment_handlers = CommentHandlers::new(
        Arc::new(AddCommentHandler::new(
            thread_repository.clone(),
            comment_repository.clone(),
        )),
        Arc::new(DeleteCommentHandler::new(thread_repository, comment_repository)),
    );

    Router::new()
        .route("/health", get(health))
        .merge(thread_routes(thread_handlers, validator.clone()))
        .merge(comment_routes(comment_handlers, validator))
        .layer(TraceLayer::new_for_http())
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
