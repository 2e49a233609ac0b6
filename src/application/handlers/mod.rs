//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod comment;
pub mod thread;

pub use comment::{AddCommentCommand, AddCommentHandler, DeleteCommentCommand, DeleteCommentHandler};
pub use thread::{AddThreadCommand, AddThreadHandler, GetThreadDetailHandler, GetThreadDetailQuery};
