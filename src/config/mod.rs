//! Configuration management for catseed.
//!
//! Settings are read from `config.toml` in the platform configuration
//! directory, or from a file given on the command line.

mod settings;

use std::path::PathBuf;

use thiserror::Error;

pub use settings::Settings;

/// Application name used for config and data directories.
pub const APP_NAME: &str = "catseed";

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// The config file could not be read.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The config file is not valid TOML or has invalid values.
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// The default config file location.
///
/// - Linux: `~/.config/catseed/config.toml`
/// - macOS: `~/Library/Application Support/catseed/config.toml`
/// - Windows: `C:\Users\<User>\AppData\Roaming\catseed\config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let base_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base_dir.join(APP_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_structure() {
        let path = default_config_path().unwrap();
        assert!(path.ends_with("catseed/config.toml"));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::NoConfigDir.to_string(),
            "Could not determine configuration directory"
        );
    }
}
