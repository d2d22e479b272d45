//! Liveness endpoint for container orchestration.
//!
//! Answers `GET` with a fixed JSON status document and rejects every other
//! method with `405 Method Not Allowed`. Only checks that the process can
//! respond to HTTP; no dependencies are probed.

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::config::{HEALTH_MESSAGE, HEALTH_STATUS_OK};
use crate::error::AppError;

const APPLICATION_JSON: &str = "application/json";

/// Body of a successful liveness response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: HEALTH_STATUS_OK.to_string(),
            message: HEALTH_MESSAGE.to_string(),
        }
    }
}

/// Liveness handler.
///
/// Mounted for every method so that method dispatch happens here rather than
/// in the router; `HEAD` is rejected like any other non-GET method.
pub async fn health(method: Method) -> Result<Response, AppError> {
    if method != Method::GET {
        return Err(AppError::MethodNotAllowed(method));
    }

    let body = serde_json::to_vec(&HealthStatus::ok())?;

    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))],
        body,
    )
        .into_response())
}
