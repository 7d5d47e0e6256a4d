//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Origins allowed to call the API when `CORS_ALLOWED_ORIGINS` is unset
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "https://cf-stalker-web.onrender.com",
    "http://localhost:5173",
];

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Seconds to wait for a pooled connection before giving up
pub const DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Primary key of the singleton visit counter row
pub const VISIT_COUNTER_ID: i16 = 1;

// =============================================================================
// CODEFORCES API
// =============================================================================

/// Default base URL of the Codeforces API
pub const DEFAULT_CODEFORCES_API_URL: &str = "https://codeforces.com/api";

/// Default per-request timeout in seconds
pub const DEFAULT_CODEFORCES_TIMEOUT_SECS: u64 = 30;

/// Default number of retries after the first failed attempt
pub const DEFAULT_CODEFORCES_MAX_RETRIES: u32 = 3;

/// Default fixed delay between attempts in milliseconds
pub const DEFAULT_CODEFORCES_RETRY_DELAY_MS: u64 = 2000;

/// Envelope status returned by successful API calls
pub const API_STATUS_OK: &str = "OK";

/// Submission verdicts
pub mod verdicts {
    pub const ACCEPTED: &str = "OK";
}

// =============================================================================
// REFRESH CYCLE
// =============================================================================

/// Default refresh schedule: every day at 03:00 (sec min hour dom mon dow)
pub const DEFAULT_REFRESH_CRON: &str = "0 0 3 * * *";

/// Number of most recent contests kept per division
pub const DEFAULT_CONTESTS_PER_DIVISION: usize = 50;

/// Default number of concurrent standings fetches
pub const DEFAULT_REFRESH_CONCURRENCY: usize = 1;

// =============================================================================
// QUERY LIMITS
// =============================================================================

/// Maximum number of contests returned per division
pub const MAX_CONTESTS_RETURNED: i64 = 50;

// =============================================================================
// VALIDATION
// =============================================================================

/// Codeforces handle minimum length
pub const MIN_HANDLE_LENGTH: u64 = 3;

/// Codeforces handle maximum length
pub const MAX_HANDLE_LENGTH: u64 = 24;
