//! HTTP server startup and shutdown.
//!
//! Binds the listener, serves the router, and drains connections on
//! SIGTERM/SIGINT. A bind failure is fatal: the probe exits non-zero rather
//! than retrying, so a broken deployment fails loudly instead of masking
//! itself.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
