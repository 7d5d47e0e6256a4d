//! Health check handlers

use axum::{Router, extract::State, http::StatusCode, routing::get};

use crate::{db, state::AppState};

/// Liveness probe
async fn health_check() -> &'static str {
    "OK"
}

/// Readiness probe, fails while the database is unreachable
async fn readiness_check(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match db::ping(state.db()).await {
        Ok(()) => (StatusCode::OK, "READY"),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "DATABASE UNAVAILABLE")
        }
    }
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
}
