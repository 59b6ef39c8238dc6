// src/core/config.rs

use crate::core::common::OxirowError;
use crate::logging::LogFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::level_filters::LevelFilter;

/// Settings for the `oxirow` inspection tool.
///
/// Every field has a default, so a TOML file only needs the keys it changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub sort_by_key: bool,
    pub show_hash: bool,
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Builder for [`Config`].
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    sort_by_key: Option<bool>,
    show_hash: Option<bool>,
    log_level: Option<String>,
    log_format: Option<LogFormat>,
}

impl ConfigBuilder {
    /// Creates a new ConfigBuilder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts rows by key before printing
    pub fn sort_by_key(mut self, enabled: bool) -> Self {
        self.sort_by_key = Some(enabled);
        self
    }

    /// Prints each row's hash code next to it
    pub fn show_hash(mut self, enabled: bool) -> Self {
        self.show_hash = Some(enabled);
        self
    }

    /// Sets the log level directive (`error`, `warn`, `info`, `debug`, `trace`, `off`)
    pub fn log_level<S: Into<String>>(mut self, level: S) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn log_format(mut self, format: LogFormat) -> Self {
        self.log_format = Some(format);
        self
    }

    /// Builds the Config instance with validation
    pub fn build(self) -> Result<Config, OxirowError> {
        let defaults = Config::default();
        let config = Config {
            sort_by_key: self.sort_by_key.unwrap_or(defaults.sort_by_key),
            show_hash: self.show_hash.unwrap_or(defaults.show_hash),
            log_level: self.log_level.unwrap_or(defaults.log_level),
            log_format: self.log_format.unwrap_or(defaults.log_format),
        };

        config.validate()?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sort_by_key: false,
            show_hash: false,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Creates a new ConfigBuilder for fluent configuration
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), OxirowError> {
        self.level_filter().map(|_| ())
    }

    /// Parses `log_level` into a tracing filter.
    ///
    /// # Errors
    ///
    /// Returns `OxirowError::Configuration` if the level is not recognised.
    pub fn level_filter(&self) -> Result<LevelFilter, OxirowError> {
        self.log_level.parse::<LevelFilter>().map_err(|e| {
            OxirowError::Configuration(format!("invalid log_level '{}': {}", self.log_level, e))
        })
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `OxirowError::Configuration` if parsing or validation fails, and
    /// `OxirowError::Io` for any other read failure.
    pub fn load_from_file(path: &Path) -> Result<Self, OxirowError> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config: Self = toml::from_str(&contents).map_err(|e| {
                    OxirowError::Configuration(format!(
                        "Failed to parse config file '{}': {}",
                        path.display(),
                        e
                    ))
                })?;

                config.validate()?;
                tracing::debug!(path = %path.display(), "loaded configuration");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(OxirowError::Io(e)),
        }
    }

    /// Loads configuration from an optional TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `OxirowError::Configuration` if the file exists but cannot be parsed.
    pub fn load_or_default(optional_path: Option<&Path>) -> Result<Self, OxirowError> {
        match optional_path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.sort_by_key);
        assert!(!config.show_hash);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::INFO);
    }

    #[test]
    fn test_config_builder() {
        let config = Config::builder()
            .sort_by_key(true)
            .show_hash(true)
            .log_level("debug")
            .log_format(LogFormat::Json)
            .build()
            .unwrap();

        assert!(config.sort_by_key);
        assert!(config.show_hash);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::DEBUG);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_config_validation() {
        let result = Config::builder().log_level("loud").build();
        assert!(matches!(result, Err(OxirowError::Configuration(_))));

        let result = Config::builder().log_level("off").build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_load_from_existing_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = r#"
            sort_by_key = true
            show_hash = true
            log_level = "warn"
            log_format = "compact"
        "#;
        writeln!(temp_file, "{}", config_content).unwrap();

        let config = Config::load_from_file(temp_file.path()).unwrap();
        assert!(config.sort_by_key);
        assert!(config.show_hash);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::WARN);
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_load_from_file_uses_defaults_for_missing_fields() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "show_hash = true").unwrap();

        let config = Config::load_from_file(temp_file.path()).unwrap();
        assert!(config.show_hash);
        assert!(!config.sort_by_key);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_load_from_non_existent_file_returns_default() {
        let non_existent_path = Path::new("/this/file/does/not/exist.toml");
        let config = Config::load_from_file(non_existent_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_malformed_file_returns_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "this is not valid toml content").unwrap();

        let result = Config::load_from_file(temp_file.path());
        assert!(matches!(result, Err(OxirowError::Configuration(_))));
    }

    #[test]
    fn test_load_with_invalid_level_returns_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "log_level = \"chatty\"").unwrap();

        let result = Config::load_from_file(temp_file.path());
        assert!(matches!(result, Err(OxirowError::Configuration(_))));
    }

    #[test]
    fn test_load_or_default() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }
}
