//! Error formatting utilities.
//!
//! This module provides helper functions for formatting error chains
//! into human-readable messages.

use anyhow::Error;

/// Format an error and its source chain into a detailed error message.
///
/// This function extracts the full error chain from an `anyhow::Error`,
/// joining all error messages with " → " so the top-level report shows
/// both what failed and why.
///
/// # Example
///
/// ```
/// use api_design_util::error::format_error_chain;
///
/// let err = anyhow::anyhow!("connection refused")
///     .context("Failed to fetch api/v3/clusters");
/// let formatted = format_error_chain(&err);
/// assert_eq!(formatted, "Failed to fetch api/v3/clusters → connection refused");
/// ```
pub fn format_error_chain(error: &Error) -> String {
    error
        .chain()
        .map(|err| err.to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}
