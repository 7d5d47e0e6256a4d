//! Problem bucket service

use sqlx::PgPool;

use crate::{
    db::repositories::ProblemRepository,
    error::AppResult,
    models::{ProblemByRating, ProblemByTopic},
};

/// Problem service for business logic
pub struct ProblemService;

impl ProblemService {
    /// Rating buckets of a division
    pub async fn by_rating(pool: &PgPool, division: &str) -> AppResult<Vec<ProblemByRating>> {
        ProblemRepository::list_by_rating(pool, division).await
    }

    /// Topic buckets of a division
    pub async fn by_topic(pool: &PgPool, division: &str) -> AppResult<Vec<ProblemByTopic>> {
        ProblemRepository::list_by_topic(pool, division).await
    }
}
