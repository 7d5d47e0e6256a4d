//! Retrying HTTP client for the Codeforces API

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::{
    ApiContest, ApiEnvelope, ApiProblem, ApiSubmission, ApiUser, CodeforcesApi, CodeforcesError,
    Standings,
};
use crate::config::CodeforcesConfig;
use crate::constants::API_STATUS_OK;

/// Fixed-delay retry policy
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Retries after the first failed attempt
    pub max_retries: u32,
    pub delay: Duration,
}

impl From<&CodeforcesConfig> for RetryPolicy {
    fn from(config: &CodeforcesConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            delay: config.retry_delay,
        }
    }
}

/// Run `op` until it succeeds, fails with a non-retryable error, or the
/// retry budget is spent.
pub async fn with_retry<T, F, Fut>(
    policy: RetryPolicy,
    label: &str,
    mut op: F,
) -> Result<T, CodeforcesError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, CodeforcesError>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() && attempt < policy.max_retries => {
                attempt += 1;
                tracing::warn!(
                    call = label,
                    attempt,
                    max_retries = policy.max_retries,
                    error = %e,
                    "Codeforces call failed, retrying"
                );
                tokio::time::sleep(policy.delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Decode a raw API response body into its `result` payload
pub fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<T, CodeforcesError> {
    let envelope: ApiEnvelope<T> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => return Err(CodeforcesError::Status(status.as_u16())),
        Err(e) => return Err(CodeforcesError::Decode(e)),
    };

    if envelope.status != API_STATUS_OK {
        return Err(CodeforcesError::Api {
            comment: envelope
                .comment
                .unwrap_or_else(|| format!("status {}", envelope.status)),
        });
    }

    envelope.result.ok_or(CodeforcesError::MissingResult)
}

/// Codeforces API client
#[derive(Debug, Clone)]
pub struct CodeforcesClient {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl CodeforcesClient {
    /// Create a new client from configuration
    pub fn new(config: &CodeforcesConfig) -> Result<Self, CodeforcesError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("cfstats/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::from(config),
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, String)],
    ) -> Result<T, CodeforcesError> {
        with_retry(self.retry, method, || self.call_once(method, query)).await
    }

    async fn call_once<T: DeserializeOwned>(
        &self,
        method: &str,
        query: &[(&str, String)],
    ) -> Result<T, CodeforcesError> {
        let url = format!("{}/{}", self.base_url, method);
        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        decode_envelope(status, &body)
    }
}

#[async_trait]
impl CodeforcesApi for CodeforcesClient {
    async fn contest_list(&self) -> Result<Vec<ApiContest>, CodeforcesError> {
        self.call("contest.list", &[]).await
    }

    async fn contest_problems(&self, contest_id: i64) -> Result<Vec<ApiProblem>, CodeforcesError> {
        // Any standings page carries the full problem list, so ask for a single row.
        let standings: Standings = self
            .call(
                "contest.standings",
                &[
                    ("contestId", contest_id.to_string()),
                    ("from", "1".to_string()),
                    ("count", "1".to_string()),
                ],
            )
            .await?;

        standings.into_problems()
    }

    async fn user_info(&self, handle: &str) -> Result<ApiUser, CodeforcesError> {
        let users: Vec<ApiUser> = self
            .call("user.info", &[("handles", handle.to_string())])
            .await?;

        users.into_iter().next().ok_or(CodeforcesError::MissingResult)
    }

    async fn user_status(&self, handle: &str) -> Result<Vec<ApiSubmission>, CodeforcesError> {
        self.call("user.status", &[("handle", handle.to_string())]).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    const NO_DELAY: RetryPolicy = RetryPolicy {
        max_retries: 3,
        delay: Duration::ZERO,
    };

    #[test]
    fn test_decode_ok_envelope() {
        let body = r#"{"status":"OK","result":[{"id":1,"name":"Round (Div. 2)","phase":"FINISHED","startTimeSeconds":10}]}"#;
        let contests: Vec<ApiContest> = decode_envelope(StatusCode::OK, body).unwrap();
        assert_eq!(contests.len(), 1);
        assert_eq!(contests[0].start_time(), 10);
    }

    #[test]
    fn test_decode_failed_envelope() {
        let body = r#"{"status":"FAILED","comment":"handles: User with handle x not found"}"#;
        let err = decode_envelope::<Vec<ApiUser>>(StatusCode::BAD_REQUEST, body).unwrap_err();
        match &err {
            CodeforcesError::Api { comment } => {
                assert!(comment.contains("not found"));
                assert!(err.is_not_found());
                assert!(!err.is_retryable());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_non_json_error_page() {
        let err = decode_envelope::<Vec<ApiContest>>(StatusCode::BAD_GATEWAY, "<html>").unwrap_err();
        assert!(matches!(err, CodeforcesError::Status(502)));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_decode_malformed_success_body() {
        let err = decode_envelope::<Vec<ApiContest>>(StatusCode::OK, "{").unwrap_err();
        assert!(matches!(err, CodeforcesError::Decode(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_decode_missing_result() {
        let err = decode_envelope::<Vec<ApiContest>>(StatusCode::OK, r#"{"status":"OK"}"#)
            .unwrap_err();
        assert!(matches!(err, CodeforcesError::MissingResult));
    }

    #[tokio::test]
    async fn test_retry_recovers_from_transient_failure() {
        let calls = AtomicU32::new(0);
        let result = with_retry(NO_DELAY, "test", || async {
            if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(CodeforcesError::Status(503))
            } else {
                Ok(42)
            }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_budget_is_bounded() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = with_retry(NO_DELAY, "test", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(CodeforcesError::Api {
                comment: "Call limit exceeded".to_string(),
            })
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_malformed_responses_are_not_retried() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = with_retry(NO_DELAY, "test", || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(CodeforcesError::MissingResult)
        })
        .await;

        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
