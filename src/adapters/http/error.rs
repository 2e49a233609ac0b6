//! Translation of domain errors into HTTP responses.
//!
//! This is the only place where an `ErrorCode` becomes a status code.
//! Client errors are answered with `status: "fail"` and a readable message;
//! server errors are logged and answered with a generic `status: "error"`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Message returned for every 5xx response.
pub const SERVER_FAILURE_MESSAGE: &str = "terjadi kegagalan pada server kami";

/// Error body: `{status, message}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: "fail",
            message: message.into(),
        }
    }

    pub fn error() -> Self {
        Self {
            status: "error",
            message: SERVER_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Maps an error code to its HTTP status.
pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        code if code.is_validation() => StatusCode::BAD_REQUEST,
        code if code.is_not_found() => StatusCode::NOT_FOUND,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Turns a sentinel message into the text shown to API clients.
///
/// Messages without a translation are returned unchanged.
pub fn translate(message: &str) -> &str {
    match message {
        "CREATE_THREAD.NOT_CONTAIN_NEEDED_PROPERTY" => {
            "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak ada"
        }
        "CREATE_THREAD.NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            "tidak dapat membuat thread baru karena tipe data tidak sesuai"
        }
        "CREATE_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY" => {
            "tidak dapat membuat komentar baru karena properti yang dibutuhkan tidak ada"
        }
        "CREATE_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            "tidak dapat membuat komentar baru karena tipe data tidak sesuai"
        }
        "DELETE_COMMENT.NOT_CONTAIN_NEEDED_PROPERTY" => {
            "tidak dapat menghapus komentar karena properti yang dibutuhkan tidak ada"
        }
        "DELETE_COMMENT.NOT_MEET_DATA_TYPE_SPECIFICATION" => {
            "tidak dapat menghapus komentar karena tipe data tidak sesuai"
        }
        other => other,
    }
}

/// HTTP-facing wrapper around `DomainError`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(self.0.code);

        if status.is_server_error() {
            tracing::error!(
                code = %self.0.code,
                details = ?self.0.details,
                "request failed: {}",
                self.0.message
            );
            return (status, Json(ErrorResponse::error())).into_response();
        }

        tracing::debug!(code = %self.0.code, "request rejected: {}", self.0.message);
        (status, Json(ErrorResponse::fail(translate(&self.0.message)))).into_response()
    }
}
