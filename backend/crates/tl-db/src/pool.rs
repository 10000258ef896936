use crate::{DbError, Result as DbErrorResult};

use tl_core::ErrorLocation;

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::info;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

const FILE_POOL_MAX_CONNECTIONS: u32 = 10;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open a SQLite pool. `None` opens a private in-memory database.
pub async fn create_pool(path: Option<&Path>) -> DbErrorResult<SqlitePool> {
    let pool = match path {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent).map_err(|e| DbError::Initialization {
                    message: format!("Cannot create {}: {}", parent.display(), e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
            }

            info!("Opening database {}", path.display());
            SqlitePoolOptions::new()
                .max_connections(FILE_POOL_MAX_CONNECTIONS)
                .connect_with(
                    SqliteConnectOptions::new()
                        .filename(path)
                        .create_if_missing(true)
                        .foreign_keys(true)
                        .journal_mode(SqliteJournalMode::Wal)
                        .synchronous(SqliteSynchronous::Normal)
                        .busy_timeout(BUSY_TIMEOUT),
                )
                .await?
        }
        None => {
            info!("Opening in-memory database");
            // Every connection gets its own in-memory database, so keep exactly one alive
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(
                    SqliteConnectOptions::new()
                        .filename(":memory:")
                        .foreign_keys(true),
                )
                .await?
        }
    };

    Ok(pool)
}

/// Apply pending schema migrations.
pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Migrations complete");
    Ok(())
}
