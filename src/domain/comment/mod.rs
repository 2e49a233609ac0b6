//! Comment domain module.
//!
//! Comments are replies attached to a thread. A comment is never removed
//! from storage; deletion flips it into the `Deleted` status and its content
//! is redacted whenever the thread detail is read.

mod comment_owner;
mod create_comment;
mod created_comment;
mod delete_comment;
mod thread_detail;

pub use comment_owner::CommentOwner;
pub use create_comment::{CreateComment, CREATE_COMMENT};
pub use created_comment::{CreatedComment, CREATED_COMMENT};
pub use delete_comment::{DeleteComment, DELETE_COMMENT};
pub use thread_detail::{
    CommentDetail, CommentRecord, ThreadRecord, ThreadWithComments, COMMENT_DETAIL,
    DELETED_COMMENT_PLACEHOLDER, THREAD_DETAIL,
};
