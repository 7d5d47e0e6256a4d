//! Visit counter handler implementations

use axum::{Json, extract::State};

use crate::{error::AppResult, services::VisitService, state::AppState};

use super::response::VisitCountResponse;

/// Record a page load
pub async fn increment_visits(State(state): State<AppState>) -> AppResult<Json<VisitCountResponse>> {
    let count = VisitService::increment(state.db()).await?;
    Ok(Json(VisitCountResponse { count }))
}

/// Current page-load count
pub async fn get_visits(State(state): State<AppState>) -> AppResult<Json<VisitCountResponse>> {
    let count = VisitService::count(state.db()).await?;
    Ok(Json(VisitCountResponse { count }))
}
