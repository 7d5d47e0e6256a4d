//! Problem bucket repository

use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{ProblemByRating, ProblemByTopic},
};

/// Repository for problem bucket database operations
pub struct ProblemRepository;

impl ProblemRepository {
    /// Rating buckets of a division, ordered by rating
    pub async fn list_by_rating(pool: &PgPool, division: &str) -> AppResult<Vec<ProblemByRating>> {
        let buckets = sqlx::query_as::<_, ProblemByRating>(
            r#"
            SELECT division, rating, problems
            FROM problems_by_rating
            WHERE division = $1
            ORDER BY rating
            "#,
        )
        .bind(division)
        .fetch_all(pool)
        .await?;

        Ok(buckets)
    }

    /// Topic buckets of a division, ordered by topic
    pub async fn list_by_topic(pool: &PgPool, division: &str) -> AppResult<Vec<ProblemByTopic>> {
        let buckets = sqlx::query_as::<_, ProblemByTopic>(
            r#"
            SELECT division, topic, problems
            FROM problems_by_topic
            WHERE division = $1
            ORDER BY topic
            "#,
        )
        .bind(division)
        .fetch_all(pool)
        .await?;

        Ok(buckets)
    }
}
