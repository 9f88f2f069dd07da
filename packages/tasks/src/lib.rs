// ABOUTME: Task management for Tasklist
// ABOUTME: Provides the task types and the SQLite-backed task store

pub mod storage;
pub mod types;

pub use storage::*;
pub use types::*;
