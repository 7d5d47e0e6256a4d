//! Problem handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    error::AppResult,
    models::{ProblemByRating, ProblemByTopic},
    services::ProblemService,
    state::AppState,
};

/// Rating buckets of a division, ordered by rating
pub async fn problems_by_rating(
    State(state): State<AppState>,
    Path(division): Path<String>,
) -> AppResult<Json<Vec<ProblemByRating>>> {
    let buckets = ProblemService::by_rating(state.db(), &division).await?;
    Ok(Json(buckets))
}

/// Topic buckets of a division, ordered by topic
pub async fn problems_by_topic(
    State(state): State<AppState>,
    Path(division): Path<String>,
) -> AppResult<Json<Vec<ProblemByTopic>>> {
    let buckets = ProblemService::by_topic(state.db(), &division).await?;
    Ok(Json(buckets))
}
