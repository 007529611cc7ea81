//! Runtime configuration: where to post forms and where to write logs.

use std::fs;
use std::path::{Path, PathBuf};

use crate::client::DEFAULT_ENDPOINT;

/// Environment variable that overrides the collection endpoint.
pub const ENDPOINT_ENV: &str = "EZCONTACT_ENDPOINT";

/// Errors that can occur while resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// The log directory could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL contact forms are posted to.
    pub endpoint: String,
    /// Directory the log file lives in.
    pub log_dir: PathBuf,
}

impl Config {
    /// Resolves configuration from the environment and the XDG data directory.
    ///
    /// The log directory (`~/.local/share/ezcontact/`) is created if it does
    /// not already exist.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn from_env() -> Result<Self, ConfigError> {
        let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
        Self::resolve(std::env::var(ENDPOINT_ENV).ok(), &data_dir)
    }

    /// Builds a configuration rooted at `data_dir`, with an optional endpoint override.
    ///
    /// A blank override is ignored.
    pub fn resolve(endpoint: Option<String>, data_dir: &Path) -> Result<Self, ConfigError> {
        let endpoint = endpoint
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let log_dir = data_dir.join("ezcontact");
        fs::create_dir_all(&log_dir)?;
        Ok(Self { endpoint, log_dir })
    }

    /// File name of the application log inside [`Config::log_dir`].
    pub fn log_file_name(&self) -> &'static str {
        "ezcontact.log"
    }

    /// Full path of the application log.
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(self.log_file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_fixed_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::resolve(None, dir.path()).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn override_replaces_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            Config::resolve(Some(" http://localhost:8080/contact ".into()), dir.path()).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/contact");
    }

    #[test]
    fn blank_override_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::resolve(Some("   ".into()), dir.path()).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn creates_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::resolve(None, dir.path()).unwrap();
        assert!(config.log_dir.is_dir());
        assert_eq!(config.log_path(), dir.path().join("ezcontact").join("ezcontact.log"));
    }

    #[test]
    fn unwritable_data_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        fs::write(&file, b"").unwrap();
        let err = Config::resolve(None, &file).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
