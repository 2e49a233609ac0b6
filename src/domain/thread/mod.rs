//! Thread domain module.
//!
//! Threads are top-level discussion posts. They are immutable once created.

mod create_thread;
mod created_thread;

pub use create_thread::{CreateThread, CREATE_THREAD};
pub use created_thread::{CreatedThread, CREATED_THREAD};
