//! Application settings configuration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{default_config_path, ConfigError, Result};
use crate::emit::OutputFormat;

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Catalog file to read instead of the built-in sample catalog.
    pub products_file: Option<PathBuf>,
    /// How to render the command plan.
    pub format: OutputFormat,
    /// Whether to print the banner before the commands.
    pub header: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            products_file: None,
            format: OutputFormat::Curl,
            header: true,
        }
    }
}

impl Settings {
    /// Load settings.
    ///
    /// With an explicit path the file must exist. Otherwise the default
    /// location is tried and a missing file yields default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if no
    /// explicit path is given and the configuration directory is unknown.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = default_config_path()?;
                match Self::load_from(&path) {
                    Err(ConfigError::ReadError(e)) if e.kind() == io::ErrorKind::NotFound => {
                        debug!(path = %path.display(), "No config file, using defaults");
                        Ok(Self::default())
                    }
                    other => other,
                }
            }
        }
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let settings = Self::parse(&contents)?;
        info!(path = %path.display(), "Loaded config file");
        Ok(settings)
    }

    /// Parse settings from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.products_file.is_none());
        assert_eq!(settings.format, OutputFormat::Curl);
        assert!(settings.header);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(Settings::parse("").unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_full_settings() {
        let settings = Settings::parse(
            r#"
            products_file = "/tmp/products.json"
            format = "json"
            header = false
            "#,
        )
        .unwrap();

        assert_eq!(settings.products_file, Some(PathBuf::from("/tmp/products.json")));
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(!settings.header);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = Settings::parse("format = \"yaml\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "header = false").unwrap();

        let settings = Settings::load(Some(file.path())).unwrap();
        assert!(!settings.header);
        assert_eq!(settings.format, OutputFormat::Curl);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(Some(&dir.path().join("config.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }

    #[test]
    fn test_settings_serialization() {
        let settings = Settings {
            products_file: Some(PathBuf::from("catalog.json")),
            format: OutputFormat::Json,
            header: false,
        };

        let toml_str = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed, settings);
    }
}
