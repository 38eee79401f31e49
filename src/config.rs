//! Runtime configuration: `config.toml` plus `BOOKDESK_*` environment overrides.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::receipt::ReceiptExporter;
use crate::submit::{RemoteClient, Strategy, StrategyKind, SubmitError};

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/bookings";

/// Font family looked up in the fonts directory when none is configured.
pub const DEFAULT_FONT_FAMILY: &str = "LiberationSans";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    /// The config file is not valid TOML for [`Config`].
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// An unknown strategy name was given.
    #[error("unknown strategy {0:?} (expected \"local\" or \"remote\")")]
    UnknownStrategy(String),

    /// The configured strategy could not be constructed.
    #[error("could not set up submission: {0}")]
    Strategy(#[from] SubmitError),
}

/// Application settings. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which submission strategy the form uses.
    pub strategy: StrategyKind,
    /// Booking API endpoint for the remote strategy.
    pub endpoint: String,
    /// Directory the PDF receipt is written to.
    pub output_dir: PathBuf,
    /// Directory containing the receipt font files.
    pub fonts_dir: PathBuf,
    /// Font family name, e.g. `LiberationSans` for `LiberationSans-Regular.ttf`.
    pub font_family: String,
    /// File that log output is appended to.
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let data = dirs::data_dir()
            .map(|d| d.join("bookdesk"))
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            strategy: StrategyKind::default(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            output_dir: home,
            fonts_dir: PathBuf::from("./fonts"),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            log_file: data.join("bookdesk.log"),
        }
    }
}

/// Returns `~/.config/bookdesk/config.toml` (or the platform equivalent).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("bookdesk").join("config.toml"))
}

impl Config {
    /// Loads the default config file, if present, then applies environment overrides.
    #[mutants::skip]
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match default_config_path() {
            Some(path) => Self::from_path(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Reads a config file. A missing file yields the defaults.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parses config from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `BOOKDESK_*` overrides looked up through `lookup`.
    ///
    /// Recognized keys: `BOOKDESK_STRATEGY`, `BOOKDESK_ENDPOINT`,
    /// `BOOKDESK_OUTPUT_DIR`, `BOOKDESK_FONTS_DIR`, `BOOKDESK_FONT_FAMILY`,
    /// `BOOKDESK_LOG_FILE`. Empty values are ignored.
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(strategy) = get("BOOKDESK_STRATEGY") {
            self.strategy = strategy.parse().map_err(ConfigError::UnknownStrategy)?;
        }
        if let Some(endpoint) = get("BOOKDESK_ENDPOINT") {
            self.endpoint = endpoint;
        }
        if let Some(dir) = get("BOOKDESK_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(dir) = get("BOOKDESK_FONTS_DIR") {
            self.fonts_dir = PathBuf::from(dir);
        }
        if let Some(family) = get("BOOKDESK_FONT_FAMILY") {
            self.font_family = family;
        }
        if let Some(file) = get("BOOKDESK_LOG_FILE") {
            self.log_file = PathBuf::from(file);
        }
        Ok(())
    }

    /// Builds the configured submission strategy.
    pub fn strategy(&self) -> Result<Strategy, ConfigError> {
        Ok(match self.strategy {
            StrategyKind::Local => Strategy::LocalExport(ReceiptExporter::new(
                &self.output_dir,
                &self.fonts_dir,
                &self.font_family,
            )),
            StrategyKind::Remote => Strategy::RemoteSubmit(RemoteClient::new(&self.endpoint)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tempfile::tempdir;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    mod parsing {
        use super::*;

        #[test]
        fn empty_file_gives_defaults() {
            let config = Config::from_toml_str("").unwrap();
            assert_eq!(config, Config::default());
            assert_eq!(config.strategy, StrategyKind::Local);
            assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        }

        #[test]
        fn reads_all_keys() {
            let config = Config::from_toml_str(
                r#"
                strategy = "remote"
                endpoint = "https://bookings.example.com/api"
                output_dir = "/srv/receipts"
                fonts_dir = "/usr/share/fonts/liberation"
                font_family = "LiberationSerif"
                log_file = "/var/log/bookdesk.log"
                "#,
            )
            .unwrap();
            assert_eq!(config.strategy, StrategyKind::Remote);
            assert_eq!(config.endpoint, "https://bookings.example.com/api");
            assert_eq!(config.output_dir, PathBuf::from("/srv/receipts"));
            assert_eq!(config.fonts_dir, PathBuf::from("/usr/share/fonts/liberation"));
            assert_eq!(config.font_family, "LiberationSerif");
            assert_eq!(config.log_file, PathBuf::from("/var/log/bookdesk.log"));
        }

        #[test]
        fn unknown_strategy_is_parse_error() {
            let err = Config::from_toml_str(r#"strategy = "fax""#).unwrap_err();
            assert!(matches!(err, ConfigError::Parse(_)));
        }

        #[test]
        fn missing_file_gives_defaults() {
            let dir = tempdir().unwrap();
            let config = Config::from_path(&dir.path().join("absent.toml")).unwrap();
            assert_eq!(config, Config::default());
        }

        #[test]
        fn reads_file_from_disk() {
            let dir = tempdir().unwrap();
            let path = dir.path().join("config.toml");
            fs::write(&path, "strategy = \"remote\"\n").unwrap();
            let config = Config::from_path(&path).unwrap();
            assert_eq!(config.strategy, StrategyKind::Remote);
        }

        #[test]
        fn directory_path_is_io_error() {
            let dir = tempdir().unwrap();
            let err = Config::from_path(dir.path()).unwrap_err();
            assert!(matches!(err, ConfigError::Io { .. }));
        }
    }

    mod overrides {
        use super::*;

        #[test]
        fn env_values_replace_file_values() {
            let mut config = Config::default();
            config
                .apply_overrides(env(&[
                    ("BOOKDESK_STRATEGY", "remote"),
                    ("BOOKDESK_ENDPOINT", "http://10.0.0.5/bookings"),
                    ("BOOKDESK_OUTPUT_DIR", "/tmp/out"),
                ]))
                .unwrap();
            assert_eq!(config.strategy, StrategyKind::Remote);
            assert_eq!(config.endpoint, "http://10.0.0.5/bookings");
            assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
            assert_eq!(config.fonts_dir, PathBuf::from("./fonts"));
        }

        #[test]
        fn empty_values_are_ignored() {
            let mut config = Config::default();
            config
                .apply_overrides(env(&[("BOOKDESK_ENDPOINT", "")]))
                .unwrap();
            assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        }

        #[test]
        fn unknown_strategy_is_rejected() {
            let mut config = Config::default();
            let err = config
                .apply_overrides(env(&[("BOOKDESK_STRATEGY", "carrier-pigeon")]))
                .unwrap_err();
            assert!(matches!(err, ConfigError::UnknownStrategy(ref s) if s == "carrier-pigeon"));
        }
    }

    mod strategy {
        use super::*;

        #[test]
        fn local_builds_exporter_in_output_dir() {
            let config = Config {
                output_dir: PathBuf::from("/srv/receipts"),
                ..Config::default()
            };
            let strategy = config.strategy().unwrap();
            assert_eq!(strategy.kind(), StrategyKind::Local);
            assert_eq!(strategy.target(), "/srv/receipts/booking-confirmation.pdf");
        }

        #[test]
        fn remote_builds_client_for_endpoint() {
            let config = Config {
                strategy: StrategyKind::Remote,
                endpoint: "http://10.0.0.5/bookings".into(),
                ..Config::default()
            };
            let strategy = config.strategy().unwrap();
            assert_eq!(strategy.kind(), StrategyKind::Remote);
            assert_eq!(strategy.target(), "http://10.0.0.5/bookings");
        }
    }
}
