//! Runtime configuration from the environment.

use std::path::PathBuf;

/// Overrides the data directory.
pub const DATA_DIR_ENV: &str = "CALOTRACK_DATA_DIR";
/// Overrides the log filter (`tracing_subscriber::EnvFilter` syntax).
pub const LOG_ENV: &str = "CALOTRACK_LOG";
/// Log filter used when [`LOG_ENV`] is unset.
pub const DEFAULT_LOG_FILTER: &str = "calotrack=info";

/// Errors resolving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The platform does not provide a data directory and none was configured.
    #[error("could not determine XDG data directory; set CALOTRACK_DATA_DIR")]
    NoDataDir,
}

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the activity file and the log file.
    pub data_dir: PathBuf,
    /// Filter directive for the tracing subscriber.
    pub log_filter: String,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// The data directory defaults to `~/.local/share/calotrack/` (XDG).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`, which maps variable names to values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = match lookup(DATA_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .ok_or(ConfigError::NoDataDir)?
                .join("calotrack"),
        };
        let log_filter = lookup(LOG_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Ok(Self {
            data_dir,
            log_filter,
        })
    }

    /// Path of the log file.
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("calotrack.log")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn data_dir_override() {
        let config = Config::from_lookup(lookup(&[(DATA_DIR_ENV, "/tmp/cal")])).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/cal"));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/cal/calotrack.log"));
    }

    #[test]
    fn log_filter_defaults() {
        let config = Config::from_lookup(lookup(&[(DATA_DIR_ENV, "/tmp/cal")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn log_filter_override() {
        let config = Config::from_lookup(lookup(&[
            (DATA_DIR_ENV, "/tmp/cal"),
            (LOG_ENV, "calotrack=debug"),
        ]))
        .unwrap();
        assert_eq!(config.log_filter, "calotrack=debug");
    }

    #[test]
    fn blank_values_ignored() {
        let config = Config::from_lookup(lookup(&[(DATA_DIR_ENV, "/tmp/cal"), (LOG_ENV, "  ")]))
            .unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);

        // Falls back to the platform directory, when there is one.
        if let Ok(config) = Config::from_lookup(lookup(&[(DATA_DIR_ENV, "")])) {
            assert!(config.data_dir.ends_with("calotrack"));
        }
    }
}
