//! Startup settings, read from an optional `restaurant.toml`.
//!
//! ```toml
//! invoice_log = "invoices.txt"
//! title = "Restaurant Ordering System"
//! welcome = "Namaste! Welcome to our Restaurant"
//! ```
//!
//! Every key is optional. A missing file means all defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Name of the settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "restaurant.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// File every checked-out invoice is appended to.
    pub invoice_log: PathBuf,
    /// Window title shown above the form.
    pub title: String,
    /// Greeting shown under the title.
    pub welcome: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            invoice_log: PathBuf::from("invoices.txt"),
            title: "Restaurant Ordering System".to_string(),
            welcome: "Namaste! Welcome to our Restaurant".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl AppConfig {
    /// Loads settings from `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "Settings loaded");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.invoice_log, PathBuf::from("invoices.txt"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = AppConfig::from_toml("invoice_log = \"/tmp/bills.txt\"\n").unwrap();
        assert_eq!(config.invoice_log, PathBuf::from("/tmp/bills.txt"));
        assert_eq!(config.title, AppConfig::default().title);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "currency = \"usd\"\n").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
