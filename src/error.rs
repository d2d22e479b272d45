use axum::{
    http::{header::ALLOW, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::config::{INTERNAL_ERROR_BODY, METHOD_NOT_ALLOWED_BODY};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(Method),

    #[error("Failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MethodNotAllowed(_) => (
                self.status(),
                [(ALLOW, HeaderValue::from_static("GET"))],
                METHOD_NOT_ALLOWED_BODY,
            )
                .into_response(),
            AppError::Serialization(_) => {
                tracing::error!("Internal error: {:?}", self);
                (self.status(), INTERNAL_ERROR_BODY).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::CONTENT_TYPE;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_method_not_allowed_response() {
        let response = AppError::MethodNotAllowed(Method::POST).into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[ALLOW], "GET");
        assert!(response.headers()[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(body_string(response).await, "Method not allowed");
    }

    #[tokio::test]
    async fn test_serialization_failure_response() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let response = AppError::from(cause).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers()[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(body_string(response).await, "Internal server error");
    }
}
