//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum routers, handlers and error translation
//! - `postgres` - sqlx-backed repositories
//! - `memory` - In-memory repositories for tests
//! - `auth` - Access token validators

pub mod auth;
pub mod http;
pub mod memory;
pub mod postgres;
