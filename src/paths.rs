//! XDG-compliant path resolution for the config file.
//!
//! The home CLI keeps its settings in `~/.config/home-cli/config.toml`. This
//! module resolves that location, honoring an explicit override and
//! `XDG_CONFIG_HOME`.

use std::env;
use std::path::PathBuf;

use crate::constants::config::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, CONFIG_PATH_ENV};

/// Find the config file.
/// Priority:
/// 1. HOME_CLI_CONFIG from environment (if set and non-empty)
/// 2. XDG_CONFIG_HOME/home-cli/config.toml (if XDG_CONFIG_HOME is set and the file exists)
/// 3. ~/.config/home-cli/config.toml
///
/// The last candidate is returned even when it does not exist, so the read
/// error names the expected location.
pub fn find_config_file() -> PathBuf {
    // Check if HOME_CLI_CONFIG is explicitly set (highest priority)
    if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
        if !config_path.is_empty() {
            return PathBuf::from(config_path);
        }
    }

    if let Some(xdg_config) = xdg_config_path() {
        if xdg_config.exists() {
            return xdg_config;
        }
    }

    default_config_path()
}

/// Default config location: ~/.config/home-cli/config.toml.
///
/// Falls back to `config.toml` in the current directory when the home
/// directory cannot be determined.
pub fn default_config_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home
            .join(".config")
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME),
        None => PathBuf::from(CONFIG_FILE_NAME),
    }
}

fn xdg_config_path() -> Option<PathBuf> {
    let xdg_config_home = env::var_os("XDG_CONFIG_HOME")?;
    if xdg_config_home.is_empty() {
        return None;
    }
    Some(
        PathBuf::from(xdg_config_home)
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    struct EnvGuard {
        saved: Vec<(&'static str, Option<std::ffi::OsString>)>,
    }

    impl EnvGuard {
        fn new(keys: &[&'static str]) -> Self {
            let saved = keys.iter().map(|k| (*k, env::var_os(k))).collect();
            Self { saved }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.saved {
                match value {
                    Some(v) => unsafe { env::set_var(key, v) },
                    None => unsafe { env::remove_var(key) },
                }
            }
        }
    }

    #[test]
    #[serial]
    fn test_find_config_file_env_override() {
        let _guard = EnvGuard::new(&[CONFIG_PATH_ENV, "XDG_CONFIG_HOME"]);
        unsafe {
            env::set_var(CONFIG_PATH_ENV, "/tmp/elsewhere/home.toml");
        }

        assert_eq!(find_config_file(), PathBuf::from("/tmp/elsewhere/home.toml"));
    }

    #[test]
    #[serial]
    fn test_find_config_file_empty_env_is_ignored() {
        let _guard = EnvGuard::new(&[CONFIG_PATH_ENV, "XDG_CONFIG_HOME"]);
        unsafe {
            env::set_var(CONFIG_PATH_ENV, "");
            env::remove_var("XDG_CONFIG_HOME");
        }

        assert_eq!(find_config_file(), default_config_path());
    }

    #[test]
    #[serial]
    fn test_find_config_file_uses_existing_xdg_config() {
        let _guard = EnvGuard::new(&[CONFIG_PATH_ENV, "XDG_CONFIG_HOME"]);
        let xdg = TempDir::new().unwrap();
        let cfg_dir = xdg.path().join(CONFIG_DIR_NAME);
        fs::create_dir_all(&cfg_dir).unwrap();
        let cfg = cfg_dir.join(CONFIG_FILE_NAME);
        fs::write(&cfg, "api_key = k\n").unwrap();

        unsafe {
            env::remove_var(CONFIG_PATH_ENV);
            env::set_var("XDG_CONFIG_HOME", xdg.path());
        }

        assert_eq!(find_config_file(), cfg);
    }

    #[test]
    #[serial]
    fn test_find_config_file_skips_missing_xdg_config() {
        let _guard = EnvGuard::new(&[CONFIG_PATH_ENV, "XDG_CONFIG_HOME"]);
        let xdg = TempDir::new().unwrap();

        unsafe {
            env::remove_var(CONFIG_PATH_ENV);
            env::set_var("XDG_CONFIG_HOME", xdg.path());
        }

        assert_eq!(find_config_file(), default_config_path());
    }

    #[test]
    fn test_default_config_path_layout() {
        let path = default_config_path();
        assert!(path.ends_with("home-cli/config.toml") || path == PathBuf::from("config.toml"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(
                path,
                home.join(".config").join("home-cli").join("config.toml")
            );
        }
    }
}
