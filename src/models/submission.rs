//! Per-user submission derived models
//!
//! These are computed on request from a user's submission history and are
//! never persisted.

use serde::{Deserialize, Serialize};

/// A problem the user has at least one accepted submission for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolvedProblem {
    pub id: String,
    pub name: String,
    /// Time of the most recent accepted submission, in milliseconds
    pub time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    pub tags: Vec<String>,
}

/// A problem the user attempted but never got accepted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnsolvedProblem {
    pub id: String,
    pub name: String,
    /// Time of the first recorded attempt, in milliseconds
    pub time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    pub tags: Vec<String>,
    /// Number of non-accepted submissions
    pub attempts: u32,
}
