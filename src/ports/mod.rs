//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ThreadRepository` - Thread persistence
//! - `CommentRepository` - Comment persistence and soft-delete
//! - `SessionValidator` - Access token verification

mod comment_repository;
mod session_validator;
mod thread_repository;

pub use comment_repository::{CommentRepository, COMMENT_REPOSITORY};
pub use session_validator::SessionValidator;
pub use thread_repository::{ThreadRepository, THREAD_REPOSITORY};
