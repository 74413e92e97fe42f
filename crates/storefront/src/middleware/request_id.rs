//! Request ID middleware for request tracing and correlation.
//!
//! Reuses an upstream `x-request-id` (load balancer, CDN) or generates a
//! UUID v4. The ID is recorded in the current span, tagged on the Sentry
//! scope and echoed in the response.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream ID accepted as-is.
const MAX_UPSTREAM_ID_LEN: usize = 128;

/// The upstream ID if it is printable and reasonably short, else a new one.
fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= MAX_UPSTREAM_ID_LEN)
        .map_or_else(|| Uuid::new_v4().to_string(), String::from)
}

/// Middleware that ensures every request carries a request ID.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = resolve_request_id(request.headers());

    Span::current().record("request_id", request_id.as_str());
    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_id_is_kept() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("cf-1234"));
        assert_eq!(resolve_request_id(&headers), "cf-1234");
    }

    #[test]
    fn test_missing_id_is_generated() {
        let id = resolve_request_id(&HeaderMap::new());
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_oversized_id_is_replaced() {
        let mut headers = HeaderMap::new();
        let long = "a".repeat(MAX_UPSTREAM_ID_LEN + 1);
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(&long).unwrap());
        assert_ne!(resolve_request_id(&headers), long);
    }
}
