use notifyd_domain::{config::DatabaseConfig, DomainError};
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::error;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn create_pool(
    database_url: &str,
    cfg: &DatabaseConfig,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(cfg.busy_timeout_secs));

    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Connection-level failures are reported as `StorageUnavailable`, anything
/// the database rejected as `QueryFailed`.
pub(crate) fn map_db_error(e: sqlx::Error, context: &str) -> DomainError {
    error!(error = %e, "{}", context);
    match e {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::WorkerCrashed => {
            DomainError::StorageUnavailable(format!("{}: {}", context, e))
        }
        _ => DomainError::QueryFailed(format!("{}: {}", context, e)),
    }
}
