//! HTTP routes for thread endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::adapters::http::middleware::{auth_middleware, AuthState};

use super::handlers::{get_thread_detail, post_thread, ThreadHandlers};

/// Creates the thread router. Only posting requires a token.
pub fn thread_routes(handlers: ThreadHandlers, auth: AuthState) -> Router {
    let protected = Router::new()
        .route("/threads", post(post_thread))
        .route_layer(middleware::from_fn_with_state(auth, auth_middleware));

    Router::new()
        .route("/threads/:thread_id", get(get_thread_detail))
        .merge(protected)
        .with_state(handlers)
}
