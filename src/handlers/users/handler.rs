//! User statistics handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::{error::AppResult, services::UserService, state::AppState};

use super::{
    request::{HandlePath, StatsQuery},
    response::UserStatsResponse,
};

/// Solve statistics of a Codeforces user
pub async fn get_user_stats(
    State(state): State<AppState>,
    Path(path): Path<HandlePath>,
    Query(query): Query<StatsQuery>,
) -> AppResult<Json<UserStatsResponse>> {
    path.validate()?;

    let stats = UserService::stats(state.codeforces(), &path.handle, &query).await?;

    Ok(Json(stats))
}
