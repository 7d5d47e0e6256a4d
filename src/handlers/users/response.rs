//! User statistics response DTOs

use std::collections::BTreeMap;

use serde::Serialize;

use crate::codeforces::ApiUser;
use crate::models::{SolvedProblem, UnsolvedProblem};

/// Public profile of a Codeforces user
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub handle: String,
    pub rank: Option<String>,
    pub rating: Option<i32>,
    pub max_rank: Option<String>,
    pub max_rating: Option<i32>,
    pub title_photo: Option<String>,
}

impl From<ApiUser> for UserProfile {
    fn from(user: ApiUser) -> Self {
        Self {
            handle: user.handle,
            rank: user.rank,
            rating: user.rating,
            max_rank: user.max_rank,
            max_rating: user.max_rating,
            title_photo: user.title_photo,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingCount {
    pub rating: i32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicCount {
    pub topic: String,
    pub count: usize,
}

/// Totals and chart data over the (filtered) solved problems
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_solved: usize,
    pub total_unsolved: usize,
    /// Ordered by rating ascending
    pub rating_histogram: Vec<RatingCount>,
    /// Ordered by count descending, then topic
    pub topic_distribution: Vec<TopicCount>,
}

/// User statistics response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatsResponse {
    pub user: UserProfile,
    pub solved_by_rating: BTreeMap<i32, Vec<SolvedProblem>>,
    pub solved_by_topic: BTreeMap<String, Vec<SolvedProblem>>,
    pub unsolved: Vec<UnsolvedProblem>,
    pub summary: StatsSummary,
}
