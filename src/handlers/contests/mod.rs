//! Contest snapshot handlers

mod handler;

pub use handler::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Contest routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/{division}", get(handler::list_contests))
}
