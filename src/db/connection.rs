//! Postgres pool setup and liveness checks

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::config::DatabaseConfig;

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
}

/// Open the pool; fails once `acquire_timeout` passes without a connection
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = pool_options(config).connect(&config.url).await?;
    tracing::info!(
        max_connections = config.max_connections,
        "Database pool ready"
    );
    Ok(pool)
}

/// Single round trip, used by the readiness probe
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}
