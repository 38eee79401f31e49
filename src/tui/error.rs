use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Errors that can stop the application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration could not be loaded or named an unusable strategy.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The log file could not be opened.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),
}
