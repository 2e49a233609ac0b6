//! Thread command and query handlers.

mod add_thread;
mod get_thread_detail;

pub use add_thread::{AddThreadCommand, AddThreadHandler};
pub use get_thread_detail::{GetThreadDetailHandler, GetThreadDetailQuery};
