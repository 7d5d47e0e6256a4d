//! CF Stats - Codeforces statistics dashboard backend
//!
//! Keeps a periodically refreshed snapshot of recent Codeforces contests,
//! grouped by division, rating and topic, and serves it over HTTP together
//! with per-user solve statistics computed on request.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic and the refresh cycle
//! - **Aggregator**: Pure classification and bucketing
//! - **Repositories**: Database access
//! - **Codeforces**: Retrying API client behind a mockable trait

pub mod aggregator;
pub mod codeforces;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod scheduler;
pub mod services;
pub mod state;
#[cfg(test)]
mod test_utils;
pub mod utils;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware as axum_middleware,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config()
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .merge(handlers::health::routes())
        .nest("/api", handlers::routes())
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}
