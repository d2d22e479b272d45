//! HTTP server hosting.
//!
//! Serves the router over plain HTTP; TLS termination is expected to happen in
//! front of the service. The server drains in-flight connections on
//! SIGTERM/SIGINT before exiting.

mod server;
mod shutdown;

pub use server::{serve, start_server, ServerError};
pub use shutdown::setup_shutdown_handler;
