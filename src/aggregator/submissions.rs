//! Per-user solve classification
//!
//! Partitions a submission history into solved problems (bucketed by rating
//! and by topic) and problems attempted without ever being accepted.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::codeforces::ApiSubmission;
use crate::constants::verdicts;
use crate::models::{SolvedProblem, UnsolvedProblem, problem_id};
use crate::utils::time::seconds_to_millis;

/// Solve statistics of one user
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveStats {
    pub solved_by_rating: BTreeMap<i32, Vec<SolvedProblem>>,
    pub solved_by_topic: BTreeMap<String, Vec<SolvedProblem>>,
    pub unsolved: Vec<UnsolvedProblem>,
}

impl SolveStats {
    /// Number of bucketed solved problems; each sits in exactly one rating bucket
    pub fn solved_count(&self) -> usize {
        self.solved_by_rating.values().map(Vec::len).sum()
    }
}

fn is_accepted(submission: &ApiSubmission) -> bool {
    submission.verdict.as_deref() == Some(verdicts::ACCEPTED)
}

fn submission_problem_id(submission: &ApiSubmission) -> String {
    problem_id(
        submission.problem.contest_id.unwrap_or_default(),
        &submission.problem.index,
    )
}

/// Classify a submission history.
///
/// A problem is solved when any of its submissions is accepted. Solved
/// entries carry the time and metadata of the most recent accepted
/// submission and are bucketed only when that submission's problem is rated.
/// Unsolved entries carry the metadata of the earliest attempt and count
/// every attempt. Input order does not matter.
pub fn classify_submissions(mut submissions: Vec<ApiSubmission>) -> SolveStats {
    let solved_ids: HashSet<String> = submissions
        .iter()
        .filter(|s| is_accepted(s))
        .map(submission_problem_id)
        .collect();

    // Stable, so equal timestamps keep their relative order.
    submissions.sort_by_key(|s| s.creation_time_seconds);

    let mut solve_order: Vec<String> = Vec::new();
    let mut latest: HashMap<String, SolvedProblem> = HashMap::new();
    let mut unsolved: Vec<UnsolvedProblem> = Vec::new();
    let mut unsolved_index: HashMap<String, usize> = HashMap::new();

    for submission in submissions {
        let id = submission_problem_id(&submission);
        let time = seconds_to_millis(submission.creation_time_seconds);

        if is_accepted(&submission) {
            let stale = latest.get(&id).is_some_and(|current| current.time > time);
            if !stale {
                let entry = SolvedProblem {
                    id: id.clone(),
                    name: submission.problem.name,
                    time,
                    rating: submission.problem.rating,
                    tags: submission.problem.tags,
                };
                if latest.insert(id.clone(), entry).is_none() {
                    solve_order.push(id);
                }
            }
        } else if !solved_ids.contains(&id) {
            match unsolved_index.get(&id) {
                Some(&i) => unsolved[i].attempts += 1,
                None => {
                    unsolved_index.insert(id.clone(), unsolved.len());
                    unsolved.push(UnsolvedProblem {
                        id,
                        name: submission.problem.name,
                        time,
                        rating: submission.problem.rating,
                        tags: submission.problem.tags,
                        attempts: 1,
                    });
                }
            }
        }
    }

    let mut stats = SolveStats {
        unsolved,
        ..SolveStats::default()
    };

    for id in solve_order {
        let Some(problem) = latest.remove(&id) else {
            continue;
        };

        // Unrated solves are left out of both maps.
        let Some(rating) = problem.rating else {
            continue;
        };

        let mut seen_tags = HashSet::new();
        for tag in &problem.tags {
            if seen_tags.insert(tag.as_str()) {
                stats
                    .solved_by_topic
                    .entry(tag.clone())
                    .or_default()
                    .push(problem.clone());
            }
        }

        stats.solved_by_rating.entry(rating).or_default().push(problem);
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeforces::ApiProblem;

    fn submission(
        contest_id: i64,
        index: &str,
        time: i64,
        verdict: Option<&str>,
        rating: Option<i32>,
        tags: &[&str],
    ) -> ApiSubmission {
        ApiSubmission {
            id: time,
            creation_time_seconds: time,
            problem: ApiProblem {
                contest_id: Some(contest_id),
                index: index.to_string(),
                name: format!("{contest_id}{index}"),
                rating,
                tags: tags.iter().map(|t| t.to_string()).collect(),
            },
            verdict: verdict.map(str::to_string),
        }
    }

    #[test]
    fn test_solved_and_unsolved_split() {
        let stats = classify_submissions(vec![
            submission(1, "A", 100, Some("OK"), Some(800), &["math"]),
            submission(1, "A", 50, Some("WRONG_ANSWER"), Some(800), &["math"]),
            submission(2, "B", 200, Some("WRONG_ANSWER"), Some(1200), &["dp"]),
            submission(2, "B", 300, Some("TIME_LIMIT_EXCEEDED"), Some(1200), &["dp"]),
        ]);

        assert_eq!(stats.solved_by_rating[&800].len(), 1);
        assert_eq!(stats.solved_by_rating[&800][0].id, "1-A");
        assert_eq!(stats.solved_by_rating[&800][0].time, 100_000);
        assert_eq!(stats.solved_by_topic["math"][0].id, "1-A");

        assert_eq!(stats.unsolved.len(), 1);
        assert_eq!(stats.unsolved[0].id, "2-B");
        assert_eq!(stats.unsolved[0].attempts, 2);
        assert_eq!(stats.unsolved[0].time, 200_000);
        assert_eq!(stats.solved_count(), 1);
    }

    #[test]
    fn test_failed_attempts_after_solve_are_not_unsolved() {
        let stats = classify_submissions(vec![
            submission(1, "A", 10, Some("OK"), Some(800), &[]),
            submission(1, "A", 20, Some("WRONG_ANSWER"), Some(800), &[]),
            submission(1, "A", 30, None, Some(800), &[]),
        ]);

        assert!(stats.unsolved.is_empty());
        assert_eq!(stats.solved_by_rating[&800].len(), 1);
    }

    #[test]
    fn test_most_recent_accepted_wins() {
        let stats = classify_submissions(vec![
            submission(3, "C", 500, Some("OK"), Some(1500), &["graphs", "trees"]),
            submission(3, "C", 100, Some("OK"), Some(1400), &["graphs", "dsu"]),
        ]);

        assert_eq!(stats.solved_by_rating.len(), 1);
        let entry = &stats.solved_by_rating[&1500][0];
        assert_eq!(entry.time, 500_000);

        // Tags from the older accepted submission do not linger.
        assert!(!stats.solved_by_topic.contains_key("dsu"));
        assert_eq!(stats.solved_by_topic["graphs"].len(), 1);
        assert_eq!(stats.solved_by_topic["trees"].len(), 1);
    }

    #[test]
    fn test_order_of_input_does_not_matter() {
        let forward = vec![
            submission(1, "A", 10, Some("WRONG_ANSWER"), Some(800), &["math"]),
            submission(1, "A", 20, Some("OK"), Some(800), &["math"]),
            submission(2, "A", 30, Some("OK"), Some(900), &["math"]),
            submission(3, "A", 40, Some("RUNTIME_ERROR"), None, &[]),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(classify_submissions(forward), classify_submissions(reversed));
    }

    #[test]
    fn test_unrated_solves_are_not_bucketed() {
        let stats = classify_submissions(vec![
            submission(7, "E", 10, Some("OK"), None, &["math"]),
            submission(7, "E", 5, Some("WRONG_ANSWER"), None, &["math"]),
        ]);

        assert!(stats.solved_by_rating.is_empty());
        assert!(stats.solved_by_topic.is_empty());
        assert_eq!(stats.solved_count(), 0);
        // Still solved, so never reported as unsolved.
        assert!(stats.unsolved.is_empty());
    }

    #[test]
    fn test_repeated_tags_bucket_once() {
        let stats = classify_submissions(vec![submission(
            7,
            "E",
            10,
            Some("OK"),
            Some(1000),
            &["implementation", "implementation"],
        )]);

        assert_eq!(stats.solved_by_topic["implementation"].len(), 1);
        assert_eq!(stats.solved_count(), 1);
    }

    #[test]
    fn test_missing_contest_id_defaults_to_zero() {
        let mut gym = submission(0, "A", 10, Some("WRONG_ANSWER"), None, &[]);
        gym.problem.contest_id = None;

        let stats = classify_submissions(vec![gym]);
        assert_eq!(stats.unsolved[0].id, "0-A");
    }

    #[test]
    fn test_serializes_rating_keys_as_strings() {
        let stats = classify_submissions(vec![submission(
            1,
            "A",
            10,
            Some("OK"),
            Some(800),
            &["math"],
        )]);

        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["solvedByRating"]["800"][0]["id"], "1-A");
        assert_eq!(value["solvedByTopic"]["math"][0]["rating"], 800);
        assert!(value["unsolved"].as_array().unwrap().is_empty());
    }
}
