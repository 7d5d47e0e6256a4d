//! Visit counter handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Visit routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::get_visits))
        .route("/increment", post(handler::increment_visits))
}
