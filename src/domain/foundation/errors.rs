//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Payload validation errors
    MissingProperty,
    WrongDataType,

    // Not found errors
    ThreadNotFound,
    CommentNotFound,

    // Authorization errors
    Unauthorized,
    Forbidden,

    // Contract errors
    NotImplemented,

    // Infrastructure errors
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    /// Returns true for errors caused by the caller's input.
    pub fn is_validation(&self) -> bool {
        matches!(self, ErrorCode::MissingProperty | ErrorCode::WrongDataType)
    }

    /// Returns true for errors about a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ErrorCode::ThreadNotFound | ErrorCode::CommentNotFound)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::MissingProperty => "MISSING_PROPERTY",
            ErrorCode::WrongDataType => "WRONG_DATA_TYPE",
            ErrorCode::ThreadNotFound => "THREAD_NOT_FOUND",
            ErrorCode::CommentNotFound => "COMMENT_NOT_FOUND",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::NotImplemented => "NOT_IMPLEMENTED",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
///
/// Payload validation errors carry a sentinel message of the form
/// `<ENTITY>.NOT_CONTAIN_NEEDED_PROPERTY` or
/// `<ENTITY>.NOT_MEET_DATA_TYPE_SPECIFICATION`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Payload for `entity` lacks a required field.
    pub fn missing_property(entity: &str) -> Self {
        Self::new(
            ErrorCode::MissingProperty,
            format!("{}.NOT_CONTAIN_NEEDED_PROPERTY", entity),
        )
    }

    /// Payload for `entity` has a field of the wrong primitive type.
    pub fn wrong_data_type(entity: &str) -> Self {
        Self::new(
            ErrorCode::WrongDataType,
            format!("{}.NOT_MEET_DATA_TYPE_SPECIFICATION", entity),
        )
    }

    /// A repository port method was called without an adapter override.
    pub fn not_implemented(port: &str) -> Self {
        Self::new(
            ErrorCode::NotImplemented,
            format!("{}.METHOD_NOT_IMPLEMENTED", port),
        )
    }

    pub fn thread_not_found(thread_id: impl Into<String>) -> Self {
        Self::new(ErrorCode::ThreadNotFound, "thread tidak ditemukan")
            .with_detail("thread_id", thread_id)
    }

    pub fn comment_not_found(comment_id: impl Into<String>) -> Self {
        Self::new(ErrorCode::CommentNotFound, "komentar tidak ditemukan")
            .with_detail("comment_id", comment_id)
    }

    /// The request carries no usable identity.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// The caller is not the owner of the resource it tried to mutate.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(ErrorCode::InternalError, err.to_string())
    }
}
