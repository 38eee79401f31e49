//! Log output setup. The terminal belongs to the TUI, so logs go to a file.

use std::fs::{self, OpenOptions};
use std::path::Path;

use env_logger::{Env, Target};

/// Errors that can occur while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file could not be opened.
    #[error("could not open log file: {0}")]
    Io(#[from] std::io::Error),

    /// A logger was already installed.
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

/// Appends log records to `log_file`, filtered by `RUST_LOG` (default `info`).
#[mutants::skip]
pub fn init(log_file: &Path) -> Result<(), LoggingError> {
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    // The global logger can be installed once per test binary, so every
    // assertion about `init` lives in this one test.
    #[test]
    fn init_creates_file_then_refuses_second_logger() {
        let dir = tempdir().unwrap();
        let log_file = dir.path().join("nested").join("bookdesk.log");

        init(&log_file).unwrap();
        assert!(log_file.exists());

        let second = init(&dir.path().join("other.log"));
        assert!(matches!(second, Err(LoggingError::AlreadyInitialized(_))));
    }
}
