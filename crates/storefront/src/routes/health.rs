//! Liveness and readiness checks.

use axum::{extract::State, http::StatusCode};

use crate::supabase::{Query, Table};
use crate::state::AppState;

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Runs one single-row read against the hosted store; 503 if it fails.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    let check = Query::select(Table::Categories).maybe_single();
    match state.store().select(&check).await {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
