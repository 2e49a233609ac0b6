//! Integration tests for the forum HTTP API.
//!
//! Drives the full router with in-memory repositories and a mock session
//! validator, so every request goes through routing, auth, handlers and
//! error translation.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use forum_api::adapters::auth::MockSessionValidator;
use forum_api::adapters::http::build_router;
use forum_api::adapters::memory::InMemoryForumStore;
use forum_api::domain::foundation::{CommentId, CommentStatus, UserId};

// =============================================================================
// Test Infrastructure
// =============================================================================

const ALICE: &str = "token-alice";
const BOB: &str = "token-bob";

async fn setup() -> (Router, InMemoryForumStore) {
    let store = InMemoryForumStore::new();
    store
        .register_user(&UserId::new("user-1").unwrap(), "dicoding")
        .await;
    store
        .register_user(&UserId::new("user-2").unwrap(), "johndoe")
        .await;

    let validator = MockSessionValidator::new()
        .with_test_user(ALICE, "user-1")
        .with_test_user(BOB, "user-2");

    let router = build_router(
        Arc::new(store.thread_repository()),
        Arc::new(store.comment_repository()),
        Arc::new(validator),
    );
    (router, store)
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn create_thread(router: &Router, token: &str) -> String {
    let (status, body) = send(
        router,
        request(
            "POST",
            "/threads",
            Some(token),
            Some(json!({ "title": "T", "body": "B" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["addedThread"]["id"].as_str().unwrap().to_string()
}

async fn create_comment(router: &Router, token: &str, thread_id: &str, content: &str) -> String {
    let (status, body) = send(
        router,
        request(
            "POST",
            &format!("/threads/{}/comments", thread_id),
            Some(token),
            Some(json!({ "content": content })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["addedComment"]["id"].as_str().unwrap().to_string()
}

// =============================================================================
// Threads
// =============================================================================

#[tokio::test]
async fn post_thread_returns_added_thread() {
    let (router, _) = setup().await;

    let (status, body) = send(
        &router,
        request(
            "POST",
            "/threads",
            Some(ALICE),
            Some(json!({ "title": "T", "body": "B" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    let added = &body["data"]["addedThread"];
    assert!(added["id"].as_str().unwrap().starts_with("thread-"));
    assert_eq!(added["title"], "T");
    assert_eq!(added["owner"], "user-1");
}

#[tokio::test]
async fn post_thread_without_token_is_unauthorized() {
    let (router, _) = setup().await;

    let (status, body) = send(
        &router,
        request("POST", "/threads", None, Some(json!({ "title": "T", "body": "B" }))),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Missing authentication");
}

#[tokio::test]
async fn post_thread_with_unknown_token_is_unauthorized() {
    let (router, _) = setup().await;

    let (status, body) = send(
        &router,
        request(
            "POST",
            "/threads",
            Some("forged"),
            Some(json!({ "title": "T", "body": "B" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn post_thread_missing_body_field_is_bad_request() {
    let (router, _) = setup().await;

    let (status, body) = send(
        &router,
        request("POST", "/threads", Some(ALICE), Some(json!({ "title": "T" }))),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert_eq!(
        body["message"],
        "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada"
    );
}

#[tokio::test]
async fn post_thread_wrong_type_is_bad_request() {
    let (router, _) = setup().await;

    let (status, body) = send(
        &router,
        request(
            "POST",
            "/threads",
            Some(ALICE),
            Some(json!({ "title": 123, "body": "B" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "tidak dapat membuat thread baru karena tipe data tidak sesuai"
    );
}

#[tokio::test]
async fn post_thread_with_malformed_json_is_bad_request() {
    let (router, _) = setup().await;

    let malformed = Request::builder()
        .method("POST")
        .uri("/threads")
        .header("Authorization", format!("Bearer {}", ALICE))
        .header("Content-Type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body) = send(&router, malformed).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn get_unknown_thread_is_not_found() {
    let (router, _) = setup().await;

    let (status, body) = send(&router, request("GET", "/threads/thread-nope", None, None)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn get_thread_detail_is_public() {
    let (router, _) = setup().await;
    let thread_id = create_thread(&router, ALICE).await;

    let (status, body) = send(
        &router,
        request("GET", &format!("/threads/{}", thread_id), None, None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let thread = &body["data"]["thread"];
    assert_eq!(thread["id"], thread_id.as_str());
    assert_eq!(thread["title"], "T");
    assert_eq!(thread["body"], "B");
    assert_eq!(thread["username"], "dicoding");
    assert!(thread["date"].is_string());
    assert_eq!(thread["comments"], json!([]));
}

// =============================================================================
// Comments
// =============================================================================

#[tokio::test]
async fn post_comment_returns_added_comment() {
    let (router, _) = setup().await;
    let thread_id = create_thread(&router, ALICE).await;

    let (status, body) = send(
        &router,
        request(
            "POST",
            &format!("/threads/{}/comments", thread_id),
            Some(BOB),
            Some(json!({ "content": "C" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let added = &body["data"]["addedComment"];
    assert!(added["id"].as_str().unwrap().starts_with("comment-"));
    assert_eq!(added["content"], "C");
    assert_eq!(added["owner"], "user-2");
}

#[tokio::test]
async fn post_comment_on_unknown_thread_is_not_found() {
    let (router, _) = setup().await;

    let (status, _) = send(
        &router,
        request(
            "POST",
            "/threads/thread-nope/comments",
            Some(ALICE),
            Some(json!({ "content": "C" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_comment_without_content_is_bad_request() {
    let (router, _) = setup().await;
    let thread_id = create_thread(&router, ALICE).await;

    let (status, body) = send(
        &router,
        request(
            "POST",
            &format!("/threads/{}/comments", thread_id),
            Some(ALICE),
            Some(json!({})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "tidak dapat membuat komentar baru karena properti yang dibutuhkan tidak ada"
    );
}

#[tokio::test]
async fn delete_unknown_comment_is_not_found() {
    let (router, _) = setup().await;
    let thread_id = create_thread(&router, ALICE).await;

    let (status, _) = send(
        &router,
        request(
            "DELETE",
            &format!("/threads/{}/comments/comment-nope", thread_id),
            Some(ALICE),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_comment_without_token_is_unauthorized() {
    let (router, _) = setup().await;
    let thread_id = create_thread(&router, ALICE).await;
    let comment_id = create_comment(&router, ALICE, &thread_id, "C").await;

    let (status, _) = send(
        &router,
        request(
            "DELETE",
            &format!("/threads/{}/comments/{}", thread_id, comment_id),
            None,
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn delete_through_another_thread_is_not_found() {
    let (router, store) = setup().await;
    let home = create_thread(&router, ALICE).await;
    let other = create_thread(&router, ALICE).await;
    let comment_id = create_comment(&router, ALICE, &home, "C").await;

    let (status, body) = send(
        &router,
        request(
            "DELETE",
            &format!("/threads/{}/comments/{}", other, comment_id),
            Some(ALICE),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "fail");
    assert_eq!(
        store.comment_status(&CommentId::new(comment_id)).await,
        Some(CommentStatus::Active)
    );
}

#[tokio::test]
async fn soft_delete_scenario() {
    let (router, store) = setup().await;
    let thread_id = create_thread(&router, ALICE).await;
    let deleted_id = create_comment(&router, ALICE, &thread_id, "C").await;
    let kept_id = create_comment(&router, BOB, &thread_id, "still here").await;
    let delete_uri = format!("/threads/{}/comments/{}", thread_id, deleted_id);

    // another user cannot delete it
    let (status, body) = send(&router, request("DELETE", &delete_uri, Some(BOB), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["status"], "fail");
    assert_eq!(
        store.comment_status(&CommentId::new(deleted_id.clone())).await,
        Some(CommentStatus::Active)
    );

    // the owner can
    let (status, body) = send(&router, request("DELETE", &delete_uri, Some(ALICE), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "success", "message": "komentar telah dihapus" })
    );
    assert_eq!(
        store.comment_status(&CommentId::new(deleted_id.clone())).await,
        Some(CommentStatus::Deleted)
    );

    let (status, body) = send(
        &router,
        request("GET", &format!("/threads/{}", thread_id), None, None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let comments = body["data"]["thread"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["id"], deleted_id.as_str());
    assert_eq!(comments[0]["username"], "dicoding");
    assert_eq!(comments[0]["content"], "**komentar telah dihapus**");
    assert_eq!(comments[1]["id"], kept_id.as_str());
    assert_eq!(comments[1]["username"], "johndoe");
    assert_eq!(comments[1]["content"], "still here");
}

// =============================================================================
// Misc
// =============================================================================

#[tokio::test]
async fn health_check() {
    let (router, _) = setup().await;

    let (status, body) = send(&router, request("GET", "/health", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}
