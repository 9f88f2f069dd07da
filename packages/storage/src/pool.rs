// ABOUTME: SQLite connection pool construction
// ABOUTME: File-backed pools for the server, single-connection in-memory pools for tests

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use crate::{StorageError, StorageResult};

/// Pool tuning knobs
#[derive(Debug, Clone)]
pub struct PoolOptions {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Open (creating if needed) the SQLite database at `database_path`.
///
/// The parent directory is created first. WAL journaling and `synchronous = NORMAL`
/// are applied to every pooled connection.
pub async fn connect(database_path: &Path, options: &PoolOptions) -> StorageResult<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(StorageError::Io)?;
        }
    }

    debug!("Connecting to database: {}", database_path.display());

    let connect_options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal);

    let pool = SqlitePoolOptions::new()
        .max_connections(options.max_connections)
        .acquire_timeout(options.acquire_timeout)
        .connect_with(connect_options)
        .await
        .map_err(StorageError::Sqlx)?;

    info!("Database connection established");
    Ok(pool)
}

/// Open a private in-memory database.
///
/// Each SQLite in-memory connection is its own database, so the pool is pinned to a
/// single connection that is never recycled.
pub async fn connect_in_memory() -> StorageResult<SqlitePool> {
    let connect_options = SqliteConnectOptions::new().in_memory(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(connect_options)
        .await
        .map_err(StorageError::Sqlx)
}
