//! Pure Angan Organic storefront library.
//!
//! The catalog and inquiry site as a library, so the whole router can be
//! driven in tests over an in-memory store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
mod filters;
pub mod middleware;
pub mod navigation;
pub mod routes;
pub mod services;
pub mod state;
pub mod supabase;

use axum::{Router, middleware as axum_middleware};
use tower_http::{services::ServeDir, trace::TraceLayer};

use state::AppState;

/// Directory the static assets are served from, relative to the workspace root.
pub const STATIC_DIR: &str = "crates/storefront/static";

/// Build the full application router.
///
/// Sentry layers are added by the binary, outside this router, so tests
/// run without a Sentry hub.
pub fn app(state: AppState) -> Router {
    let session_layer = middleware::create_session_layer(state.config());

    Router::new()
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(session_layer)
        .layer(axum_middleware::from_fn(
            middleware::security_headers_middleware,
        ))
        .layer(axum_middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = tracing::field::Empty,
            )
        }))
        .with_state(state)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use secrecy::SecretString;
    use tower::ServiceExt;

    use super::*;
    use crate::config::{ContactConfig, SentryConfig, StorefrontConfig, SupabaseConfig};
    use crate::supabase::MemoryStore;

    fn state() -> AppState {
        let config = StorefrontConfig {
            host: [127, 0, 0, 1].into(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            supabase: SupabaseConfig {
                url: "http://localhost:54321".parse().unwrap(),
                anon_key: SecretString::from("test-key"),
                timeout: Duration::from_secs(1),
            },
            contact: ContactConfig::default(),
            confirmation_override: None,
            sentry: SentryConfig::default(),
        };
        AppState::new(config, Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_health_through_full_stack() {
        let response = app(state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(response.headers()["x-frame-options"], "DENY");
    }

    #[tokio::test]
    async fn test_upstream_request_id_is_echoed() {
        let response = app(state())
            .oneshot(
                Request::get("/health")
                    .header("x-request-id", "lb-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()["x-request-id"], "lb-42");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = app(state())
            .oneshot(Request::get("/checkout").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_inquiry_script_locks_submit_button() {
        let script = include_str!("../static/js/dismiss.js");
        assert!(script.contains(r#"addEventListener("submit""#));
        assert!(script.contains("button[type=submit]"));
        assert!(script.contains("button.disabled = true"));
    }
}
