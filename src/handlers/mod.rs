//! Request handlers for the admin endpoints
//!
//! Each handler is plain synchronous logic over the storage layer so it can
//! be tested without an HTTP server; the `server` module wires these into
//! axum routes.

pub mod console;
pub mod export;
pub mod import;
