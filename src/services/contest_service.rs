//! Contest service

use sqlx::PgPool;

use crate::{
    constants::MAX_CONTESTS_RETURNED, db::repositories::ContestRepository, error::AppResult,
    models::Contest,
};

/// Contest service for business logic
pub struct ContestService;

impl ContestService {
    /// Latest contests of a division, newest first.
    ///
    /// Unknown divisions have no stored contests and yield an empty list.
    pub async fn list_by_division(pool: &PgPool, division: &str) -> AppResult<Vec<Contest>> {
        ContestRepository::list_by_division(pool, division, MAX_CONTESTS_RETURNED).await
    }
}
