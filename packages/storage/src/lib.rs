// ABOUTME: Data layer and persistence for Tasklist
// ABOUTME: Storage errors, SQLite pool setup and the embedded schema migrations

pub mod migrations;
pub mod pool;

use thiserror::Error;

pub use migrations::{revert_migrations, run_migrations, MIGRATOR};
pub use pool::{connect, connect_in_memory, PoolOptions};

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;
