//! Contest repository

use sqlx::PgPool;

use crate::{error::AppResult, models::Contest};

/// Repository for contest database operations
pub struct ContestRepository;

impl ContestRepository {
    /// Most recent contests of a division, newest first
    pub async fn list_by_division(
        pool: &PgPool,
        division: &str,
        limit: i64,
    ) -> AppResult<Vec<Contest>> {
        let contests = sqlx::query_as::<_, Contest>(
            r#"
            SELECT id, name, division, start_time_seconds, problems
            FROM contests
            WHERE division = $1
            ORDER BY start_time_seconds DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(division)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(contests)
    }
}

#[cfg(test)]
mod tests {
    use sqlx::types::Json;

    use super::*;
    use crate::aggregator::Snapshot;
    use crate::db::repositories::SnapshotRepository;
    use crate::test_utils::containers::migrated_pool;

    fn contest(id: i64, division: &str) -> Contest {
        Contest {
            id,
            name: format!("Round {id}"),
            division: division.to_string(),
            start_time_seconds: id * 100,
            problems: Json(vec![]),
        }
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_list_returns_newest_first_and_caps() {
        let (pool, _guard) = migrated_pool().await;
        let snapshot = Snapshot {
            contests: (1..=60).map(|id| contest(id, "div3")).collect(),
            ..Snapshot::default()
        };
        SnapshotRepository::replace(&pool, &snapshot).await.unwrap();

        let contests = ContestRepository::list_by_division(&pool, "div3", 50)
            .await
            .unwrap();

        assert_eq!(contests.len(), 50);
        assert_eq!(contests[0].id, 60);
        assert_eq!(contests[49].id, 11);
    }

    #[tokio::test]
    #[ignore = "requires docker"]
    async fn test_unknown_division_is_empty() {
        let (pool, _guard) = migrated_pool().await;
        let snapshot = Snapshot {
            contests: vec![contest(1, "div1")],
            ..Snapshot::default()
        };
        SnapshotRepository::replace(&pool, &snapshot).await.unwrap();

        let contests = ContestRepository::list_by_division(&pool, "div9", 50)
            .await
            .unwrap();
        assert!(contests.is_empty());
    }
}
