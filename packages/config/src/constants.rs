// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Tasklist

// Server Configuration
pub const PORT: &str = "PORT";
pub const HOST: &str = "HOST";

// Storage Configuration
pub const DATABASE_PATH: &str = "DATABASE_PATH";

// CORS Configuration
pub const CORS_ORIGIN: &str = "CORS_ORIGIN";

// Logging (read by tracing-subscriber's EnvFilter)
pub const RUST_LOG: &str = "RUST_LOG";
