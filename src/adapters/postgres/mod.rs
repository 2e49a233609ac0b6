//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresThreadRepository` - Threads, joined with `users` for usernames
//! - `PostgresCommentRepository` - Comments with soft delete

mod comment_repository;
mod thread_repository;

pub use comment_repository::PostgresCommentRepository;
pub use thread_repository::PostgresThreadRepository;
