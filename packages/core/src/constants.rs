use std::path::PathBuf;

/// Name reported by the health endpoint and the startup banner
pub const SERVICE_NAME: &str = "tasklist";

/// Port the API listens on when nothing else is configured
pub const DEFAULT_PORT: u16 = 5000;

/// Interface the API binds to when nothing else is configured
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// SQLite file used when no database path is configured, relative to the working directory
pub const DEFAULT_DATABASE_PATH: &str = "./data/tasks.db3";

/// Get the default database path (./data/tasks.db3)
pub fn default_database_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_PATH)
}
