//! Codeforces user statistics handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// User routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/{handle}/stats", get(handler::get_user_stats))
}
