//! Contest handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{error::AppResult, models::Contest, services::ContestService, state::AppState};

/// Latest contests of a division, newest first
pub async fn list_contests(
    State(state): State<AppState>,
    Path(division): Path<String>,
) -> AppResult<Json<Vec<Contest>>> {
    let contests = ContestService::list_by_division(state.db(), &division).await?;
    Ok(Json(contests))
}
