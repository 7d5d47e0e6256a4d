//! Contest snapshot model

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};

/// Contest database model, one row per retained contest in the latest snapshot
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    /// Codeforces contest id
    pub id: i64,
    pub name: String,
    pub division: String,
    pub start_time_seconds: i64,
    pub problems: Json<Vec<ProblemRef>>,
}

/// Problem embedded in a contest record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemRef {
    /// `"{contestId}-{index}"`
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Build the dashboard-wide problem id
pub fn problem_id(contest_id: i64, index: &str) -> String {
    format!("{}-{}", contest_id, index)
}
