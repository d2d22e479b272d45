//! HTTP route handlers.
//!
//! The service exposes a single liveness route. Responses from it are marked
//! `Cache-Control: no-store`, and every request runs inside the request ID
//! middleware so its logs can be correlated.

pub mod health;

use axum::{middleware, routing::any, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HEALTH, HEALTH_PATH};
use crate::middleware::request_id_layer;

/// Creates the Axum router with the liveness route and its headers.
pub fn create_router() -> Router {
    // Health check - never cached, method dispatch is done by the handler
    let health_routes = Router::new()
        .route(HEALTH_PATH, any(health::health))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HEALTH),
        ));

    Router::new()
        .merge(health_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
