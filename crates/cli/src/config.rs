//! Configuration file support for conneqt.
//!
//! Loads settings from `~/.conneqt/config.toml` with the following
//! precedence: CLI arguments > Environment variables > Config file
//!
//! ## Configuration File Format
//!
//! ```toml
//! # ~/.conneqt/config.toml
//!
//! [sync]
//! # OAuth access token for the Google People API
//! google_token = "ya29...."
//!
//! # Contact page size
//! page_size = 100
//!
//! [storage]
//! # Where the JSON stores live
//! data_dir = "/home/me/.conneqt/data"
//! ```

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

pub const ENV_GOOGLE_TOKEN: &str = "CONNEQT_GOOGLE_TOKEN";
pub const ENV_PAGE_SIZE: &str = "CONNEQT_PAGE_SIZE";
pub const ENV_DATA_DIR: &str = "CONNEQT_DATA_DIR";

/// Top-level configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Sync command configuration.
    #[serde(default)]
    pub sync: SyncConfig,
    /// Storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Configuration for the sync command.
#[derive(Debug, Default, Deserialize)]
pub struct SyncConfig {
    /// OAuth access token for the Google People API.
    pub google_token: Option<String>,
    /// Contact page size.
    pub page_size: Option<u32>,
}

/// Storage configuration.
#[derive(Debug, Default, Deserialize)]
pub struct StorageConfig {
    /// Data directory for the JSON stores.
    pub data_dir: Option<String>,
}

/// `$HOME` first, then the platform lookup.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}

/// Returns the path to the config file (~/.conneqt/config.toml).
fn config_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".conneqt").join("config.toml"))
}

/// Loads the configuration file if it exists.
///
/// Returns `Ok(None)` if the file doesn't exist.
/// Returns `Err` if the file exists but fails to parse.
pub fn load_config() -> Result<Option<Config>> {
    let Some(path) = config_path() else {
        return Ok(None);
    };

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&content)?;

    tracing::debug!(
        target: "conneqt::config",
        path = %path.display(),
        "Loaded configuration file"
    );

    Ok(Some(config))
}

/// Applies configuration file settings to environment variables.
///
/// Only sets environment variables that are not already set, preserving
/// the precedence: CLI > ENV > config file.
pub fn apply_config_to_env(config: &Config) {
    let apply = |key: &str, value: Option<String>| {
        if std::env::var(key).is_err() {
            if let Some(value) = value {
                std::env::set_var(key, value);
            }
        }
    };

    apply(ENV_GOOGLE_TOKEN, config.sync.google_token.clone());
    apply(ENV_PAGE_SIZE, config.sync.page_size.map(|v| v.to_string()));
    apply(ENV_DATA_DIR, config.storage.data_dir.clone());
}

/// Data directory for the JSON stores.
///
/// `CONNEQT_DATA_DIR` wins; otherwise `~/.conneqt/data`.
pub fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(ENV_DATA_DIR) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".conneqt")
        .join("data")
}

/// The Google access token, or an actionable error when unset.
pub fn google_token() -> Result<String> {
    let raw = std::env::var(ENV_GOOGLE_TOKEN).unwrap_or_default();
    let token = raw.trim();
    if token.is_empty() {
        anyhow::bail!(
            "No Google access token configured. Set {ENV_GOOGLE_TOKEN} or add \
             google_token under [sync] in ~/.conneqt/config.toml."
        );
    }
    Ok(token.to_string())
}

/// Contact page size from the environment, else the library default.
pub fn page_size() -> u32 {
    std::env::var(ENV_PAGE_SIZE)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(conneqt_people::google::DEFAULT_PAGE_SIZE)
}
