//! Config file reading.
//!
//! The home CLI config file is read line by line: the API key comes from the
//! first line containing `api_key = `, and its value may be wrapped in double
//! quotes. Other settings in the file, including `cloud_url`, are ignored.

use std::fs;
use std::path::Path;

use crate::constants;
use crate::errors::ConfigError;

/// Settings read from the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API key sent with every request.
    pub api_key: String,
}

impl Config {
    /// Load settings from the config file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read, and
    /// [`ConfigError::MissingApiKey`] if no line carries the API key.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    /// Parse config file `content`; `path` is only used in error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let api_key = find_setting(content, constants::config::API_KEY_MARKER).ok_or_else(|| {
            ConfigError::MissingApiKey {
                path: path.to_path_buf(),
            }
        })?;

        if api_key.is_empty() {
            tracing::warn!(file = %path.display(), "api_key is set but empty");
        }

        tracing::debug!(file = %path.display(), "Config loaded");

        Ok(Self { api_key })
    }
}

/// Value of the first line containing `marker`, with whitespace and
/// surrounding double quotes stripped.
fn find_setting(content: &str, marker: &str) -> Option<String> {
    let line = content.lines().find(|line| line.contains(marker))?;
    let (_, value) = line.split_once(constants::config::SETTING_SEPARATOR)?;
    Some(value.trim().trim_matches('"').to_string())
}
