//! Visit counter service

use sqlx::PgPool;

use crate::{db::repositories::VisitRepository, error::AppResult};

/// Visit counter service
pub struct VisitService;

impl VisitService {
    /// Record a page load and return the new total
    pub async fn increment(pool: &PgPool) -> AppResult<i64> {
        let counter = VisitRepository::increment(pool).await?;
        tracing::debug!(count = counter.count, "Visit recorded");
        Ok(counter.count)
    }

    /// Current total
    pub async fn count(pool: &PgPool) -> AppResult<i64> {
        Ok(VisitRepository::get(pool).await?.count)
    }
}
