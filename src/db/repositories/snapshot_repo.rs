//! Snapshot replacement

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{aggregator::Snapshot, error::AppResult};

/// Repository that swaps the whole stored snapshot
pub struct SnapshotRepository;

impl SnapshotRepository {
    /// Replace every contest and bucket row with `snapshot` in one transaction.
    ///
    /// Readers see either the previous snapshot or the new one, never a mix.
    pub async fn replace(pool: &PgPool, snapshot: &Snapshot) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        for table in ["contests", "problems_by_rating", "problems_by_topic"] {
            sqlx::query(&format!("DELETE FROM {table}"))
                .execute(&mut *tx)
                .await?;
        }

        if !snapshot.contests.is_empty() {
            let mut qb: QueryBuilder<Postgres> = QueryBuilder::new(
                "INSERT INTO contests (id, name, division, start_time_seconds, problems) ",
            );
            qb.push_values(&snapshot.contests, |mut b, contest| {
                b.push_bind(contest.id)
                    .push_bind(contest.name.clone())
                    .push_bind(contest.division.clone())
                    .push_bind(contest.start_time_seconds)
                    .push_bind(contest.problems.clone());
            });
            qb.build().execute(&mut *tx).await?;
        }

        if !snapshot.by_rating.is_empty() {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO problems_by_rating (division, rating, problems) ");
            qb.push_values(&snapshot.by_rating, |mut b, bucket| {
                b.push_bind(bucket.division.clone())
                    .push_bind(bucket.rating)
                    .push_bind(bucket.problems.clone());
            });
            qb.build().execute(&mut *tx).await?;
        }

        if !snapshot.by_topic.is_empty() {
            let mut qb: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO problems_by_topic (division, topic, problems) ");
            qb.push_values(&snapshot.by_topic, |mut b, bucket| {
                b.push_bind(bucket.division.clone())
                    .push_bind(bucket.topic.clone())
                    .push_bind(bucket.problems.clone());
            });
            qb.build().execute(&mut *tx).await?;
        }

        tx.commit().await?;

        Ok(())
    }
}
