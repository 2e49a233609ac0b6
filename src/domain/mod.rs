//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `thread` - Thread creation requests and results
//! - `comment` - Comment requests, soft-delete, and the thread detail read model

pub mod comment;
pub mod foundation;
pub mod thread;
