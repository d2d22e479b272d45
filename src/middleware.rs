//! Request ID middleware for correlating logs with requests.
//!
//! Takes the caller's `x-request-id` when it is a valid UUID (so probes from
//! a load balancer can be traced end to end) and otherwise generates a UUID v4.
//! The id is attached to a tracing span wrapping the whole request and echoed
//! back on the response.

use std::time::Instant;

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::config::REQUEST_ID_HEADER;

/// Extension type for accessing the request ID in handlers if needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(pub Uuid);

impl RequestId {
    /// Reuse the inbound header when it parses as a UUID, otherwise mint a new one.
    ///
    /// Also returns the header value to echo: the caller's bytes unchanged when
    /// reused, the hyphenated form when generated.
    pub fn from_headers(headers: &HeaderMap) -> (Self, HeaderValue) {
        let inbound = headers.get(REQUEST_ID_HEADER).and_then(|value| {
            let id = Uuid::parse_str(value.to_str().ok()?).ok()?;
            Some((RequestId(id), value.clone()))
        });

        inbound.unwrap_or_else(|| {
            let id = Uuid::new_v4();
            let value = HeaderValue::from_str(&id.hyphenated().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static(""));
            (RequestId(id), value)
        })
    }
}

/// Middleware that resolves a request ID and creates a request span.
///
/// This should be the outermost middleware layer so the span wraps
/// all request processing, including other middleware and handlers.
pub async fn request_id_layer(mut request: Request, next: Next) -> Response {
    let (request_id, echoed) = RequestId::from_headers(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id.0,
        method = %method,
        path = %path,
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();
    request.extensions_mut().insert(request_id);

    async move {
        let mut response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::info!(
            status = response.status().as_u16(),
            duration_ms,
            "Request completed"
        );

        response.headers_mut().insert(REQUEST_ID_HEADER, echoed);

        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_inbound_id_is_reused() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(&id.to_string()).unwrap());

        let (request_id, echoed) = RequestId::from_headers(&headers);
        assert_eq!(request_id, RequestId(id));
        assert_eq!(echoed, id.to_string().as_str());
    }

    #[test]
    fn test_uppercase_inbound_id_is_echoed_verbatim() {
        let mut headers = HeaderMap::new();
        headers.insert(
            REQUEST_ID_HEADER,
            HeaderValue::from_static("67E55044-10B1-426F-9247-BB680E5FE0C8"),
        );

        let (request_id, echoed) = RequestId::from_headers(&headers);
        assert_eq!(
            request_id.0,
            Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap()
        );
        assert_eq!(echoed, "67E55044-10B1-426F-9247-BB680E5FE0C8");
    }

    #[test]
    fn test_invalid_inbound_id_is_replaced() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("not-a-uuid"));

        let (request_id, echoed) = RequestId::from_headers(&headers);
        assert_eq!(request_id.0.get_version_num(), 4);
        assert_eq!(echoed, request_id.0.to_string().as_str());
    }

    #[test]
    fn test_missing_id_generates_distinct_ids() {
        let headers = HeaderMap::new();
        let (first, _) = RequestId::from_headers(&headers);
        let (second, _) = RequestId::from_headers(&headers);
        assert_ne!(first, second);
    }
}
