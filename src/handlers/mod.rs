//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod contests;
pub mod health;
pub mod problems;
pub mod users;
pub mod visits;

use axum::Router;

use crate::state::AppState;

/// Create all `/api` routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/contests", contests::routes())
        .nest("/problems", problems::routes())
        .nest("/visits", visits::routes())
        .nest("/users", users::routes())
}
