//! Forum API - threads and comments over REST
//!
//! Authenticated users open threads and comment on them. Deleting a comment
//! only marks it; the thread detail read model shows the placeholder
//! `**komentar telah dihapus**` in place of its content.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
