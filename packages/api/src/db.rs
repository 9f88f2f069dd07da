// ABOUTME: Database connection management and storage initialization
// ABOUTME: Provides shared access to the SQLite pool and the task store

use sqlx::SqlitePool;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use tasklist_storage::{PoolOptions, StorageError};
use tasklist_tasks::TaskStorage;

/// Shared database state for API handlers
#[derive(Clone)]
pub struct DbState {
    pub pool: SqlitePool,
    pub task_storage: Arc<TaskStorage>,
}

impl DbState {
    /// Create new database state from a SQLite pool
    pub fn new(pool: SqlitePool) -> Self {
        let task_storage = Arc::new(TaskStorage::new(pool.clone()));
        Self { pool, task_storage }
    }

    /// Open the database at `database_path`, apply migrations and build the state
    pub async fn init_with_path(database_path: &Path) -> Result<Self, StorageError> {
        let pool = tasklist_storage::connect(database_path, &PoolOptions::default()).await?;

        tasklist_storage::run_migrations(&pool).await?;
        debug!("Database ready at {}", database_path.display());

        Ok(Self::new(pool))
    }

    /// Migrated in-memory database, used by tests and throwaway runs
    pub async fn init_in_memory() -> Result<Self, StorageError> {
        let pool = tasklist_storage::connect_in_memory().await?;
        tasklist_storage::run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }
}
