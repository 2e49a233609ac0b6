//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! `router` puts them together.

pub mod comment;
pub mod error;
pub mod middleware;
pub mod response;
pub mod router;
pub mod thread;

pub use error::{ApiError, ErrorResponse};
pub use router::build_router;
