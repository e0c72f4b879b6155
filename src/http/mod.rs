//! HTTP server infrastructure.
//!
//! Server startup and graceful shutdown. Route handlers live in
//! `crate::routes`; this module only owns the listener lifecycle.

pub mod server;
pub mod shutdown;
