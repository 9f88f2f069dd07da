// ABOUTME: Request validation shared by the API layer
// ABOUTME: The store accepts whatever it is given, so required fields are checked here

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Validate a task title supplied at creation time.
///
/// Absent, `null` and whitespace-only titles are all treated as missing. The title is
/// returned unchanged (not trimmed) so the store keeps exactly what the client sent.
pub fn validate_title(title: Option<&str>) -> Result<&str, ValidationError> {
    match title {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(ValidationError::MissingField("title")),
    }
}
