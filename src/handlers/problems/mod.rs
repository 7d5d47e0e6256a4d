//! Problem bucket handlers

mod handler;

pub use handler::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Problem routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/rating/{division}", get(handler::problems_by_rating))
        .route("/topics/{division}", get(handler::problems_by_topic))
}
