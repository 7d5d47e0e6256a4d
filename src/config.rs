//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

use crate::constants::{
    DEFAULT_ALLOWED_ORIGINS, DEFAULT_CODEFORCES_API_URL, DEFAULT_CODEFORCES_MAX_RETRIES,
    DEFAULT_CODEFORCES_RETRY_DELAY_MS, DEFAULT_CODEFORCES_TIMEOUT_SECS,
    DEFAULT_CONTESTS_PER_DIVISION, DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS,
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_REFRESH_CONCURRENCY,
    DEFAULT_REFRESH_CRON, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub codeforces: CodeforcesConfig,
    pub refresh: RefreshConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Emit JSON log lines instead of the human readable format
    pub log_json: bool,
    pub allowed_origins: Vec<String>,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

/// Codeforces API client configuration
#[derive(Debug, Clone)]
pub struct CodeforcesConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Retries after the first failed attempt
    pub max_retries: u32,
    pub retry_delay: Duration,
}

/// Refresh cycle configuration
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    /// Cron expression with a leading seconds field
    pub cron: String,
    pub run_on_startup: bool,
    pub contests_per_division: usize,
    /// Upper bound on in-flight standings requests
    pub concurrency: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            codeforces: CodeforcesConfig::from_env()?,
            refresh: RefreshConfig::from_env()?,
        })
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: parse_var("PORT", DEFAULT_SERVER_PORT)?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_json: env::var("LOG_FORMAT")
                .map(|format| format.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .map(|origins| split_list(&origins))
                .unwrap_or_else(|_| {
                    DEFAULT_ALLOWED_ORIGINS
                        .iter()
                        .map(|origin| origin.to_string())
                        .collect()
                }),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", DEFAULT_DATABASE_MAX_CONNECTIONS)?,
            acquire_timeout: Duration::from_secs(parse_var(
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECS,
            )?),
        })
    }
}

impl CodeforcesConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env::var("CODEFORCES_API_URL")
                .unwrap_or_else(|_| DEFAULT_CODEFORCES_API_URL.to_string()),
            timeout: Duration::from_secs(parse_var(
                "CODEFORCES_TIMEOUT_SECS",
                DEFAULT_CODEFORCES_TIMEOUT_SECS,
            )?),
            max_retries: parse_var("CODEFORCES_MAX_RETRIES", DEFAULT_CODEFORCES_MAX_RETRIES)?,
            retry_delay: Duration::from_millis(parse_var(
                "CODEFORCES_RETRY_DELAY_MS",
                DEFAULT_CODEFORCES_RETRY_DELAY_MS,
            )?),
        })
    }
}

impl Default for CodeforcesConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CODEFORCES_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_CODEFORCES_TIMEOUT_SECS),
            max_retries: DEFAULT_CODEFORCES_MAX_RETRIES,
            retry_delay: Duration::from_millis(DEFAULT_CODEFORCES_RETRY_DELAY_MS),
        }
    }
}

impl RefreshConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let concurrency: usize = parse_var("REFRESH_CONCURRENCY", DEFAULT_REFRESH_CONCURRENCY)?;
        if concurrency == 0 {
            return Err(ConfigError::InvalidValue("REFRESH_CONCURRENCY".to_string()));
        }

        Ok(Self {
            cron: env::var("REFRESH_CRON").unwrap_or_else(|_| DEFAULT_REFRESH_CRON.to_string()),
            run_on_startup: parse_var("REFRESH_ON_STARTUP", false)?,
            contests_per_division: parse_var(
                "CONTESTS_PER_DIVISION",
                DEFAULT_CONTESTS_PER_DIVISION,
            )?,
            concurrency,
        })
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            cron: DEFAULT_REFRESH_CRON.to_string(),
            run_on_startup: false,
            contests_per_division: DEFAULT_CONTESTS_PER_DIVISION,
            concurrency: DEFAULT_REFRESH_CONCURRENCY,
        }
    }
}

/// Read an optional variable, falling back to `default` when it is unset
fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name.to_string())),
        Err(_) => Ok(default),
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
