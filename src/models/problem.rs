//! Problem bucket models
//!
//! Buckets group the problems of the retained contests of one division
//! either by difficulty rating or by topic tag.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};

/// All problems of one `(division, rating)` pair
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemByRating {
    pub division: String,
    pub rating: i32,
    pub problems: Json<Vec<RatedProblemEntry>>,
}

/// Entry of a rating bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatedProblemEntry {
    pub id: String,
    pub name: String,
    pub contest_id: i64,
    pub contest_name: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// All problems of one `(division, topic)` pair
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemByTopic {
    pub division: String,
    pub topic: String,
    pub problems: Json<Vec<TopicProblemEntry>>,
}

/// Entry of a topic bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicProblemEntry {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    pub contest_id: i64,
    pub contest_name: String,
}
