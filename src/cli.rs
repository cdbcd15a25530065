//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::api::DEFAULT_HOST;

/// Fetch a home API resource and print it with string values redacted.
#[derive(Debug, Parser)]
#[command(name = "api-design-util", version, about)]
pub struct Cli {
    /// Resource path, appended to `api/v3/`.
    pub url: String,

    /// Print the response as received, without redacting strings.
    #[arg(long)]
    pub original: bool,

    /// Read the API key from this file instead of the default config location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Query this host or base URL instead of the default API host.
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,
}

impl Cli {
    /// Host the request goes to: `--host` if given, otherwise the fixed API host.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }
}
