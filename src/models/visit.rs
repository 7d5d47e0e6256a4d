//! Visit counter model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Singleton page-load counter
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitCounter {
    pub count: i64,
    pub last_updated: DateTime<Utc>,
}
