//! Codeforces user statistics service

use std::cmp::Ordering;

use crate::{
    aggregator::{SolveStats, classify_submissions},
    codeforces::CodeforcesApi,
    error::{AppError, AppResult},
    handlers::users::{
        request::{SortKey, SortOrder, StatsQuery},
        response::{RatingCount, StatsSummary, TopicCount, UserStatsResponse},
    },
    models::SolvedProblem,
    utils::day_range_millis,
};

/// User statistics service
pub struct UserService;

impl UserService {
    /// Fetch a user's profile and submissions and compute their statistics
    pub async fn stats(
        api: &dyn CodeforcesApi,
        handle: &str,
        query: &StatsQuery,
    ) -> AppResult<UserStatsResponse> {
        let range = match (query.from, query.to) {
            (Some(from), Some(to)) if from > to => {
                return Err(AppError::Validation(
                    "`from` must not be after `to`".to_string(),
                ));
            }
            (Some(from), Some(to)) => Some(day_range_millis(from, to)),
            _ => None,
        };

        let (user, submissions) = tokio::try_join!(api.user_info(handle), api.user_status(handle))?;

        tracing::debug!(
            handle = %user.handle,
            submissions = submissions.len(),
            "Fetched user submissions"
        );

        let mut stats = classify_submissions(submissions);

        if let Some((start, end)) = range {
            Self::retain_solved_between(&mut stats, start, end);
        }
        Self::sort_solved(&mut stats, query.sort, query.order);
        let summary = Self::summarize(&stats);

        Ok(UserStatsResponse {
            user: user.into(),
            solved_by_rating: stats.solved_by_rating,
            solved_by_topic: stats.solved_by_topic,
            unsolved: stats.unsolved,
            summary,
        })
    }

    /// Keep solved entries whose time lies in `[start, end]`, dropping
    /// buckets left empty
    fn retain_solved_between(stats: &mut SolveStats, start: i64, end: i64) {
        let in_range = |p: &SolvedProblem| p.time >= start && p.time <= end;

        for bucket in stats.solved_by_rating.values_mut() {
            bucket.retain(in_range);
        }
        stats.solved_by_rating.retain(|_, bucket| !bucket.is_empty());

        for bucket in stats.solved_by_topic.values_mut() {
            bucket.retain(in_range);
        }
        stats.solved_by_topic.retain(|_, bucket| !bucket.is_empty());
    }

    fn sort_solved(stats: &mut SolveStats, key: SortKey, order: SortOrder) {
        let compare = |a: &SolvedProblem, b: &SolvedProblem| {
            let ordering = match key {
                SortKey::Time => a.time.cmp(&b.time),
                SortKey::Rating => a.rating.cmp(&b.rating).then(a.time.cmp(&b.time)),
            };
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        };

        for bucket in stats
            .solved_by_rating
            .values_mut()
            .chain(stats.solved_by_topic.values_mut())
        {
            bucket.sort_by(compare);
        }
    }

    fn summarize(stats: &SolveStats) -> StatsSummary {
        let rating_histogram = stats
            .solved_by_rating
            .iter()
            .map(|(rating, problems)| RatingCount {
                rating: *rating,
                count: problems.len(),
            })
            .collect();

        let mut topic_distribution: Vec<TopicCount> = stats
            .solved_by_topic
            .iter()
            .map(|(topic, problems)| TopicCount {
                topic: topic.clone(),
                count: problems.len(),
            })
            .collect();
        topic_distribution.sort_by(|a, b| match b.count.cmp(&a.count) {
            Ordering::Equal => a.topic.cmp(&b.topic),
            other => other,
        });

        StatsSummary {
            total_solved: stats.solved_count(),
            total_unsolved: stats.unsolved.len(),
            rating_histogram,
            topic_distribution,
        }
    }
}
