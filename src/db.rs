use anyhow::Context;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use tracing::info;

/// Schema migrations from the crate's `migrations` directory, embedded at compile time
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Builds a PostgreSQL connection pool and verifies the database can be reached
pub async fn connect_sqlx(db_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(db_url)
        .await
        .context("connecting to the database")
}

/// Brings the todo schema up to date. Safe to run on every start since applied migrations are skipped.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    info!("Applying database migrations");
    MIGRATOR
        .run(pool)
        .await
        .context("applying database migrations")?;

    Ok(())
}
