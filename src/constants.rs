//! Application constants for the API host, config file layout, and output format.

/// Home API endpoint constants.
pub mod api {
    /// Host every request is sent to unless `--host` is given.
    pub const DEFAULT_HOST: &str = "api.fries.home.weka.io";

    /// Path prefix every resource path is appended to.
    pub const API_PREFIX: &str = "api/v3";

    /// Scheme used when the host has none.
    pub const DEFAULT_SCHEME: &str = "https";

    /// Authorization scheme for the API key header.
    pub const AUTH_SCHEME: &str = "Token";

    /// Request timeout in seconds.
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;
}

/// Config file constants.
pub mod config {
    /// Directory under the user's config dir holding the config file.
    pub const CONFIG_DIR_NAME: &str = "home-cli";

    /// Config file name.
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Environment variable overriding the config file location.
    pub const CONFIG_PATH_ENV: &str = "HOME_CLI_CONFIG";

    /// Marker identifying the credential line.
    pub const API_KEY_MARKER: &str = "api_key = ";

    /// Separator between a setting name and its value.
    pub const SETTING_SEPARATOR: &str = " = ";
}

/// Output constants.
pub mod output {
    /// Replacement for every redacted string value.
    pub const REDACTED: &str = "STRING";

    /// Indentation used when printing JSON.
    pub const INDENT: &[u8] = b"    ";
}
