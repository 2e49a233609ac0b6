//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the forum domain.

mod auth;
mod comment_status;
mod errors;
mod ids;
mod ownership;
pub mod payload;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use comment_status::CommentStatus;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CommentId, ThreadId, UserId, ID_SUFFIX_LENGTH};
pub use ownership::OwnedByUser;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
