//! Input validation utilities.

use crate::errors::ValidationError;

/// Normalize the resource path given on the command line.
///
/// Surrounding whitespace and leading slashes are removed so the result can be
/// appended to `api/v3/` directly.
///
/// # Errors
///
/// Returns an error if the path is empty after trimming or contains
/// whitespace.
pub fn normalize_api_path(url: &str) -> Result<String, ValidationError> {
    let trimmed = url.trim().trim_start_matches('/');

    if trimmed.is_empty() {
        return Err(ValidationError::ApiPath(
            "API path cannot be empty".to_string(),
        ));
    }

    if trimmed.chars().any(char::is_whitespace) {
        return Err(ValidationError::ApiPath(format!(
            "API path cannot contain whitespace. Got: '{}'",
            trimmed
        )));
    }

    Ok(trimmed.to_string())
}
