//! Visit counter repository

use sqlx::PgPool;

use crate::{constants::VISIT_COUNTER_ID, error::AppResult, models::VisitCounter};

/// Repository for the singleton visit counter
pub struct VisitRepository;

impl VisitRepository {
    /// Atomically increment the counter, creating it on first use
    pub async fn increment(pool: &PgPool) -> AppResult<VisitCounter> {
        let counter = sqlx::query_as::<_, VisitCounter>(
            r#"
            INSERT INTO visit_counter (id, count, last_updated)
            VALUES ($1, 1, NOW())
            ON CONFLICT (id) DO UPDATE
            SET count = visit_counter.count + 1, last_updated = NOW()
            RETURNING count, last_updated
            "#,
        )
        .bind(VISIT_COUNTER_ID)
        .fetch_one(pool)
        .await?;

        Ok(counter)
    }

    /// Read the counter, creating it at zero on first use
    pub async fn get(pool: &PgPool) -> AppResult<VisitCounter> {
        sqlx::query(
            r#"
            INSERT INTO visit_counter (id, count, last_updated)
            VALUES ($1, 0, NOW())
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(VISIT_COUNTER_ID)
        .execute(pool)
        .await?;

        let counter = sqlx::query_as::<_, VisitCounter>(
            r#"SELECT count, last_updated FROM visit_counter WHERE id = $1"#,
        )
        .bind(VISIT_COUNTER_ID)
        .fetch_one(pool)
        .await?;

        Ok(counter)
    }
}
