//! Snapshot store and visit counter persistence

pub mod connection;
pub mod repositories;

use sqlx::PgPool;

pub use connection::{create_pool, ping};

/// Bring the schema up to date with `migrations/`
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    let migrator = sqlx::migrate!("./migrations");
    tracing::debug!(available = migrator.iter().count(), "Applying migrations");
    migrator.run(pool).await
}
