//! Contest snapshot aggregation
//!
//! Turns the raw `contest.list` and per-contest problem lists into the
//! records the snapshot store persists: contests per division plus rating
//! and topic buckets.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};

use sqlx::types::Json;

use crate::codeforces::{ApiContest, ApiProblem};
use crate::models::{
    Contest, Division, ProblemByRating, ProblemByTopic, ProblemRef, RatedProblemEntry,
    TopicProblemEntry, problem_id,
};

/// Split contests into divisions and keep the `per_division` most recent of each.
///
/// Every division is present in the result, possibly empty. Contests whose
/// name does not classify are dropped.
pub fn categorize_contests(
    contests: Vec<ApiContest>,
    per_division: usize,
) -> BTreeMap<Division, Vec<ApiContest>> {
    let mut categorized: BTreeMap<Division, Vec<ApiContest>> =
        Division::ALL.iter().map(|d| (*d, Vec::new())).collect();

    for contest in contests {
        if let Some(division) = Division::classify(&contest.name) {
            categorized.entry(division).or_default().push(contest);
        }
    }

    for (division, contests) in categorized.iter_mut() {
        let found = contests.len();
        contests.sort_by_key(|c| Reverse(c.start_time()));
        contests.truncate(per_division);
        tracing::info!(%division, found, retained = contests.len(), "Classified contests");
    }

    categorized
}

/// Fully aggregated snapshot, ready to replace the stored one
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub contests: Vec<Contest>,
    pub by_rating: Vec<ProblemByRating>,
    pub by_topic: Vec<ProblemByTopic>,
}

impl Snapshot {
    pub fn problem_count(&self) -> usize {
        self.contests.iter().map(|c| c.problems.len()).sum()
    }
}

/// Bucket with set semantics on problem id; the first entry for an id wins
#[derive(Debug)]
struct Bucket<T> {
    ids: HashSet<String>,
    entries: Vec<T>,
}

impl<T> Default for Bucket<T> {
    fn default() -> Self {
        Self {
            ids: HashSet::new(),
            entries: Vec::new(),
        }
    }
}

impl<T> Bucket<T> {
    fn insert(&mut self, id: &str, entry: T) {
        if self.ids.insert(id.to_string()) {
            self.entries.push(entry);
        }
    }
}

/// Accumulates contests into a [`Snapshot`] during one refresh cycle
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    contests: Vec<Contest>,
    seen_contests: HashSet<i64>,
    by_rating: BTreeMap<(Division, i32), Bucket<RatedProblemEntry>>,
    by_topic: BTreeMap<(Division, String), Bucket<TopicProblemEntry>>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one contest and its problems.
    ///
    /// Returns `false` when the contest id was already added this cycle.
    pub fn add_contest(
        &mut self,
        division: Division,
        contest: &ApiContest,
        problems: &[ApiProblem],
    ) -> bool {
        if !self.seen_contests.insert(contest.id) {
            return false;
        }

        let mut refs = Vec::with_capacity(problems.len());

        for problem in problems {
            let id = problem_id(contest.id, &problem.index);

            if let Some(rating) = problem.rating {
                self.by_rating.entry((division, rating)).or_default().insert(
                    &id,
                    RatedProblemEntry {
                        id: id.clone(),
                        name: problem.name.clone(),
                        contest_id: contest.id,
                        contest_name: contest.name.clone(),
                        tags: problem.tags.clone(),
                    },
                );
            }

            for tag in &problem.tags {
                self.by_topic
                    .entry((division, tag.clone()))
                    .or_default()
                    .insert(
                        &id,
                        TopicProblemEntry {
                            id: id.clone(),
                            name: problem.name.clone(),
                            rating: problem.rating,
                            contest_id: contest.id,
                            contest_name: contest.name.clone(),
                        },
                    );
            }

            refs.push(ProblemRef {
                id,
                name: problem.name.clone(),
                rating: problem.rating,
                tags: problem.tags.clone(),
            });
        }

        self.contests.push(Contest {
            id: contest.id,
            name: contest.name.clone(),
            division: division.as_str().to_string(),
            start_time_seconds: contest.start_time(),
            problems: Json(refs),
        });

        true
    }

    pub fn finish(self) -> Snapshot {
        let by_rating = self
            .by_rating
            .into_iter()
            .map(|((division, rating), bucket)| ProblemByRating {
                division: division.as_str().to_string(),
                rating,
                problems: Json(bucket.entries),
            })
            .collect();

        let by_topic = self
            .by_topic
            .into_iter()
            .map(|((division, topic), bucket)| ProblemByTopic {
                division: division.as_str().to_string(),
                topic,
                problems: Json(bucket.entries),
            })
            .collect();

        Snapshot {
            contests: self.contests,
            by_rating,
            by_topic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contest(id: i64, name: &str, start: i64) -> ApiContest {
        ApiContest {
            id,
            name: name.to_string(),
            start_time_seconds: Some(start),
        }
    }

    fn problem(contest_id: i64, index: &str, rating: Option<i32>, tags: &[&str]) -> ApiProblem {
        ApiProblem {
            contest_id: Some(contest_id),
            index: index.to_string(),
            name: format!("Problem {index}"),
            rating,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_categorize_caps_to_most_recent() {
        let contests = (1..=60)
            .map(|i| contest(i, &format!("Round {i} (Div. 2)"), i * 100))
            .collect();

        let categorized = categorize_contests(contests, 50);
        let div2 = &categorized[&Division::Div2];

        assert_eq!(div2.len(), 50);
        assert_eq!(div2.first().unwrap().id, 60);
        assert_eq!(div2.last().unwrap().id, 11);
        assert!(div2.windows(2).all(|w| w[0].start_time() >= w[1].start_time()));
    }

    #[test]
    fn test_categorize_drops_unclassified_and_keeps_all_divisions() {
        let contests = vec![
            contest(1, "Round (Div. 1 + Div. 2)", 10),
            contest(2, "Round (Div. 3)", 20),
            contest(3, "Educational Round", 30),
        ];

        let categorized = categorize_contests(contests, 50);

        assert_eq!(categorized.len(), 4);
        assert!(categorized[&Division::Div1].is_empty());
        assert!(categorized[&Division::Div2].is_empty());
        assert_eq!(categorized[&Division::Div3].len(), 1);
        assert!(categorized[&Division::Div4].is_empty());
    }

    #[test]
    fn test_grouping_by_rating_and_topic() {
        let round = contest(100, "Round (Div. 2)", 10);
        let problems = vec![
            problem(100, "A", Some(800), &["math", "greedy"]),
            problem(100, "B", Some(800), &["math"]),
            problem(100, "C", None, &["dp"]),
            problem(100, "D", Some(1600), &[]),
        ];

        let mut builder = SnapshotBuilder::new();
        assert!(builder.add_contest(Division::Div2, &round, &problems));
        let snapshot = builder.finish();

        assert_eq!(snapshot.contests.len(), 1);
        assert_eq!(snapshot.problem_count(), 4);
        assert_eq!(snapshot.contests[0].problems[2].rating, None);

        let ratings: Vec<i32> = snapshot.by_rating.iter().map(|b| b.rating).collect();
        assert_eq!(ratings, vec![800, 1600]);
        let ids: Vec<&str> = snapshot.by_rating[0]
            .problems
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["100-A", "100-B"]);

        // The unrated problem is still bucketed by topic; the untagged one is not.
        let topics: Vec<&str> = snapshot.by_topic.iter().map(|b| b.topic.as_str()).collect();
        assert_eq!(topics, vec!["dp", "greedy", "math"]);
        let dp = &snapshot.by_topic[0];
        assert_eq!(dp.problems[0].id, "100-C");
        assert_eq!(dp.problems[0].rating, None);
        assert_eq!(snapshot.by_topic[2].problems.len(), 2);
    }

    #[test]
    fn test_buckets_accumulate_across_contests() {
        let mut builder = SnapshotBuilder::new();
        builder.add_contest(
            Division::Div3,
            &contest(1, "Round 1 (Div. 3)", 10),
            &[problem(1, "A", Some(800), &["math"])],
        );
        builder.add_contest(
            Division::Div3,
            &contest(2, "Round 2 (Div. 3)", 20),
            &[problem(2, "A", Some(800), &["math"])],
        );
        let snapshot = builder.finish();

        assert_eq!(snapshot.by_rating.len(), 1);
        assert_eq!(snapshot.by_rating[0].problems.len(), 2);
        assert_eq!(snapshot.by_rating[0].problems[1].contest_name, "Round 2 (Div. 3)");
    }

    #[test]
    fn test_duplicate_problems_are_deduplicated() {
        let round = contest(5, "Round (Div. 4)", 10);
        let problems = vec![
            problem(5, "A", Some(800), &["math", "math"]),
            problem(5, "A", Some(800), &["math"]),
        ];

        let mut builder = SnapshotBuilder::new();
        builder.add_contest(Division::Div4, &round, &problems);
        assert!(!builder.add_contest(Division::Div4, &round, &problems));
        let snapshot = builder.finish();

        assert_eq!(snapshot.contests.len(), 1);
        assert_eq!(snapshot.by_rating[0].problems.len(), 1);
        assert_eq!(snapshot.by_topic[0].problems.len(), 1);
    }

    #[test]
    fn test_same_rating_in_different_divisions_is_separate() {
        let mut builder = SnapshotBuilder::new();
        builder.add_contest(
            Division::Div1,
            &contest(1, "Round (Div. 1)", 10),
            &[problem(1, "A", Some(1500), &[])],
        );
        builder.add_contest(
            Division::Div2,
            &contest(2, "Round (Div. 2)", 10),
            &[problem(2, "C", Some(1500), &[])],
        );
        let snapshot = builder.finish();

        assert_eq!(snapshot.by_rating.len(), 2);
        assert_eq!(snapshot.by_rating[0].division, "div1");
        assert_eq!(snapshot.by_rating[1].division, "div2");
    }

    #[test]
    fn test_building_twice_is_identical() {
        let build = || {
            let mut builder = SnapshotBuilder::new();
            for id in 1..=3 {
                builder.add_contest(
                    Division::Div2,
                    &contest(id, &format!("Round {id} (Div. 2)"), id * 10),
                    &[
                        problem(id, "A", Some(800), &["math"]),
                        problem(id, "B", Some(1200), &["dp", "graphs"]),
                    ],
                );
            }
            builder.finish()
        };

        assert_eq!(build(), build());
    }
}
