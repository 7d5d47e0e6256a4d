//! Codeforces API access
//!
//! The rest of the application talks to Codeforces only through the
//! [`CodeforcesApi`] trait, so the refresh cycle and the user statistics
//! service can be driven by mocks in tests.

pub mod client;
pub mod types;

use async_trait::async_trait;

pub use client::{CodeforcesClient, RetryPolicy};
pub use types::*;

/// Errors raised while talking to the Codeforces API
#[derive(Debug, thiserror::Error)]
pub enum CodeforcesError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("API call failed: {comment}")]
    Api { comment: String },

    #[error("response has no result")]
    MissingResult,

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CodeforcesError {
    /// Transient network failures and `FAILED` envelopes are retried alike,
    /// except for lookups of entities that do not exist.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) | Self::Status(_) => true,
            Self::Api { .. } => !self.is_not_found(),
            Self::MissingResult | Self::Decode(_) => false,
        }
    }

    /// `FAILED` envelope reporting an unknown handle or contest
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { comment } if comment.contains("not found"))
    }
}

/// Read endpoints of the Codeforces API used by the dashboard
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeforcesApi: Send + Sync {
    /// `contest.list`
    async fn contest_list(&self) -> Result<Vec<ApiContest>, CodeforcesError>;

    /// Problem list of a contest, taken from the first `contest.standings` page
    async fn contest_problems(&self, contest_id: i64) -> Result<Vec<ApiProblem>, CodeforcesError>;

    /// `user.info` for a single handle
    async fn user_info(&self, handle: &str) -> Result<ApiUser, CodeforcesError>;

    /// `user.status`, the full submission history of a handle
    async fn user_status(&self, handle: &str) -> Result<Vec<ApiSubmission>, CodeforcesError>;
}
