use crate::config::ConfigError;
use crate::storage::StorageError;

/// Errors that end the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Startup configuration could not be resolved.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Terminal, event, or log file I/O failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored activities could not be read or written.
    #[error("activity storage error: {0}")]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_names_override_variable() {
        let err = AppError::from(ConfigError::NoDataDir);
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("CALOTRACK_DATA_DIR"));
    }

    #[test]
    fn io_error_converts() {
        let err: AppError = std::io::Error::other("tty gone").into();
        assert_eq!(err.to_string(), "terminal I/O error: tty gone");
    }
}
