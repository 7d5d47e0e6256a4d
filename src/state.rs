//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::codeforces::CodeforcesApi;
use crate::config::Config;
use crate::services::RefreshService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    db: PgPool,

    /// Codeforces API client
    codeforces: Arc<dyn CodeforcesApi>,

    /// Snapshot refresh runner shared with the scheduler
    refresh: Arc<RefreshService>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: PgPool, codeforces: Arc<dyn CodeforcesApi>, config: Config) -> Self {
        let refresh = Arc::new(RefreshService::new(
            codeforces.clone(),
            db.clone(),
            config.refresh.clone(),
        ));

        Self {
            inner: Arc::new(AppStateInner {
                db,
                codeforces,
                refresh,
                config,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    /// Get a reference to the Codeforces client
    pub fn codeforces(&self) -> &dyn CodeforcesApi {
        self.inner.codeforces.as_ref()
    }

    /// Get a handle to the refresh service
    pub fn refresh(&self) -> Arc<RefreshService> {
        self.inner.refresh.clone()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
