//! HTTP adapter for thread endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{AddedThreadData, ThreadDetailData};
pub use handlers::ThreadHandlers;
pub use routes::thread_routes;
