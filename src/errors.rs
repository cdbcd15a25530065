use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when talking to the home API.
#[derive(Error, Debug)]
pub enum HomeError {
    #[error("Home API error (status {status_code}): {message}")]
    ApiError { status_code: u16, message: String },
    #[error("HTTP request failed")]
    HttpError(#[from] reqwest::Error),
    #[error("Invalid base URL: {0}")]
    UrlError(String),
    #[error("Failed to decode JSON response")]
    DecodeError(#[from] serde_json::Error),
}

/// Errors that can occur when reading the config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("API key not found in {}", path.display())]
    MissingApiKey { path: PathBuf },
}

/// Errors that can occur during validation.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("API path validation failed: {0}")]
    ApiPath(String),
}
