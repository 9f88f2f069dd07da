// ABOUTME: Embedded, reversible schema migrations
// ABOUTME: Applying is idempotent; reverting drops the tasks table unconditionally

use sqlx::migrate::Migrator;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::{StorageError, StorageResult};

/// Migrations compiled into the binary from `packages/storage/migrations`
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply every pending migration. Running it twice is a no-op.
pub async fn run_migrations(pool: &SqlitePool) -> StorageResult<()> {
    debug!("Running database migrations");

    MIGRATOR.run(pool).await.map_err(StorageError::Migration)?;

    info!("Database migrations completed");
    Ok(())
}

/// Revert every applied migration, dropping the tasks table.
pub async fn revert_migrations(pool: &SqlitePool) -> StorageResult<()> {
    debug!("Reverting database migrations");

    MIGRATOR
        .undo(pool, 0)
        .await
        .map_err(StorageError::Migration)?;

    info!("Database migrations reverted");
    Ok(())
}
