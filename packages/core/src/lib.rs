// ABOUTME: Core constants and validation for Tasklist
// ABOUTME: Foundational package shared by the storage, API and CLI packages

pub mod constants;
pub mod validation;

// Re-export constants
pub use constants::{
    default_database_path, DEFAULT_DATABASE_PATH, DEFAULT_HOST, DEFAULT_PORT, SERVICE_NAME,
};

// Re-export validation
pub use validation::{validate_title, ValidationError};
