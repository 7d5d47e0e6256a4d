//! Contest snapshot refresh cycle
//!
//! One cycle lists every contest, keeps the most recent ones of each
//! division, fetches their problems through a bounded worker pool and swaps
//! the stored snapshot in a single transaction. Contests whose standings
//! cannot be fetched are skipped; a failed `contest.list` abandons the cycle
//! and leaves the previous snapshot in place.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use futures::{StreamExt, stream};
use sqlx::PgPool;

use crate::{
    aggregator::{Snapshot, SnapshotBuilder, categorize_contests},
    codeforces::{CodeforcesApi, CodeforcesError},
    config::RefreshConfig,
    db::repositories::SnapshotRepository,
    error::AppResult,
};

/// Counters reported at the end of a cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshStats {
    pub contests: usize,
    pub problems: usize,
    pub rating_buckets: usize,
    pub topic_buckets: usize,
    /// Contests dropped because their standings could not be fetched
    pub failed_contests: usize,
    pub elapsed: Duration,
}

/// Result of a refresh request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    Completed(RefreshStats),
    /// Another cycle was already running
    Skipped,
}

/// Snapshot built from the API together with the number of skipped contests
#[derive(Debug)]
pub struct BuiltSnapshot {
    pub snapshot: Snapshot,
    pub failed_contests: usize,
}

/// Fetch and aggregate a full snapshot without touching the database
pub async fn build_snapshot(
    api: &dyn CodeforcesApi,
    config: &RefreshConfig,
) -> Result<BuiltSnapshot, CodeforcesError> {
    let contests = api.contest_list().await?;
    tracing::info!(total = contests.len(), "Fetched contest list");

    let jobs: Vec<_> = categorize_contests(contests, config.contests_per_division)
        .into_iter()
        .flat_map(|(division, contests)| contests.into_iter().map(move |c| (division, c)))
        .collect();

    // `buffered` keeps results in job order, so the snapshot does not depend
    // on which request finishes first.
    let results: Vec<_> = stream::iter(jobs)
        .map(|(division, contest)| async move {
            let problems = api.contest_problems(contest.id).await;
            (division, contest, problems)
        })
        .buffered(config.concurrency.max(1))
        .collect()
        .await;

    let mut builder = SnapshotBuilder::new();
    let mut failed_contests = 0;

    for (division, contest, problems) in results {
        match problems {
            Ok(problems) => {
                if !builder.add_contest(division, &contest, &problems) {
                    tracing::debug!(contest_id = contest.id, "Duplicate contest ignored");
                }
            }
            Err(e) => {
                failed_contests += 1;
                tracing::warn!(
                    contest_id = contest.id,
                    contest = %contest.name,
                    error = %e,
                    "Skipping contest, standings unavailable"
                );
            }
        }
    }

    Ok(BuiltSnapshot {
        snapshot: builder.finish(),
        failed_contests,
    })
}

/// Held while a cycle runs; releases the flag on drop, including on error
struct RunGuard<'a>(&'a AtomicBool);

impl<'a> RunGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs refresh cycles, at most one at a time
pub struct RefreshService {
    api: Arc<dyn CodeforcesApi>,
    db: PgPool,
    config: RefreshConfig,
    running: AtomicBool,
}

impl RefreshService {
    pub fn new(api: Arc<dyn CodeforcesApi>, db: PgPool, config: RefreshConfig) -> Self {
        Self {
            api,
            db,
            config,
            running: AtomicBool::new(false),
        }
    }

    /// Whether a cycle is currently in progress
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Run one refresh cycle unless one is already in progress
    pub async fn run(&self) -> AppResult<RefreshOutcome> {
        let Some(_guard) = RunGuard::acquire(&self.running) else {
            tracing::info!("Refresh already in progress, skipping");
            return Ok(RefreshOutcome::Skipped);
        };

        let started = Instant::now();
        tracing::info!("Refresh cycle started");

        let built = build_snapshot(self.api.as_ref(), &self.config).await?;
        SnapshotRepository::replace(&self.db, &built.snapshot).await?;

        let stats = RefreshStats {
            contests: built.snapshot.contests.len(),
            problems: built.snapshot.problem_count(),
            rating_buckets: built.snapshot.by_rating.len(),
            topic_buckets: built.snapshot.by_topic.len(),
            failed_contests: built.failed_contests,
            elapsed: started.elapsed(),
        };

        tracing::info!(
            contests = stats.contests,
            problems = stats.problems,
            rating_buckets = stats.rating_buckets,
            topic_buckets = stats.topic_buckets,
            failed_contests = stats.failed_contests,
            elapsed_ms = stats.elapsed.as_millis() as u64,
            "Refresh cycle completed"
        );

        Ok(RefreshOutcome::Completed(stats))
    }
}
