//! HTTP routes for comment endpoints.

use axum::{
    middleware,
    routing::{delete, post},
    Router,
};

use crate::adapters::http::middleware::{auth_middleware, AuthState};

use super::handlers::{delete_comment, post_comment, CommentHandlers};

/// Creates the comment router. Every comment route requires a token.
pub fn comment_routes(handlers: CommentHandlers, auth: AuthState) -> Router {
    Router::new()
        .route("/threads/:thread_id/comments", post(post_comment))
        .route(
            "/threads/:thread_id/comments/:comment_id",
            delete(delete_comment),
        )
        .route_layer(middleware::from_fn_with_state(auth, auth_middleware))
        .with_state(handlers)
}
