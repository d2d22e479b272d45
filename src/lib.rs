//! Verifier service liveness endpoint.
//!
//! Exposes `GET /healthz`, which reports that the process is up with a fixed
//! JSON status document. Everything else in the crate hosts that route:
//! configuration, request correlation and the HTTP server.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::AppError;
pub use routes::{create_router, health::HealthStatus};
