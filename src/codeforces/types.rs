//! Codeforces API wire types
//!
//! Only the fields the dashboard reads are modelled; unknown fields are ignored.

use serde::Deserialize;

use super::CodeforcesError;

/// `{status, comment?, result?}` envelope wrapping every API response
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: String,
    pub comment: Option<String>,
    pub result: Option<T>,
}

/// Entry of `contest.list`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContest {
    pub id: i64,
    pub name: String,
    /// Absent for contests without a scheduled start
    pub start_time_seconds: Option<i64>,
}

impl ApiContest {
    pub fn start_time(&self) -> i64 {
        self.start_time_seconds.unwrap_or_default()
    }
}

/// Problem as returned by `contest.standings` and inside submissions
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProblem {
    pub contest_id: Option<i64>,
    pub index: String,
    pub name: String,
    pub rating: Option<i32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Result of `contest.standings`; rows are never requested beyond the first
#[derive(Debug, Deserialize)]
pub struct Standings {
    pub problems: Option<Vec<ApiProblem>>,
}

impl Standings {
    /// Problem list of the contest; a result without one counts as missing
    pub fn into_problems(self) -> Result<Vec<ApiProblem>, CodeforcesError> {
        self.problems.ok_or(CodeforcesError::MissingResult)
    }
}

/// Entry of `user.status`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSubmission {
    pub id: i64,
    pub creation_time_seconds: i64,
    pub problem: ApiProblem,
    /// Missing while the submission is still queued
    pub verdict: Option<String>,
}

/// Entry of `user.info`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiUser {
    pub handle: String,
    pub rank: Option<String>,
    pub rating: Option<i32>,
    pub max_rank: Option<String>,
    pub max_rating: Option<i32>,
    pub title_photo: Option<String>,
}
