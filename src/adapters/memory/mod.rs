//! In-memory adapters for the repository ports.
//!
//! Both repositories share one `InMemoryForumStore`, so a thread created
//! through one is visible to comment operations through the other.

mod comment_repository;
mod store;
mod thread_repository;

pub use comment_repository::InMemoryCommentRepository;
pub use store::InMemoryForumStore;
pub use thread_repository::InMemoryThreadRepository;
