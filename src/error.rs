//! Centralized error types for catseed.
//!
//! Categorization and rendering cannot fail; errors come from the shell
//! around them: reading configuration, loading a catalog file and writing
//! the output.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Catalog loading errors.
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// IO errors while writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Use --config to pass a config file."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file exists and is readable.".to_string()
                }
                ConfigError::ParseError(err) => {
                    format!("Configuration file is invalid: {}", err.message())
                }
            },
            AppError::Catalog(e) => match e {
                CatalogError::ReadError(_) => {
                    "Could not read the products file. Please check the path.".to_string()
                }
                CatalogError::ParseError(err) => {
                    format!("Products file is not valid product JSON: {}", err)
                }
                CatalogError::MissingData(msg) => {
                    format!("Products file holds an API response without products: {}", msg)
                }
                CatalogError::UnexpectedFormat(_) => e.to_string(),
            },
            AppError::Io(_) => "Could not write output.".to_string(),
        }
    }

    /// Get a suggested action for the user.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::ParseError(_)) => {
                Some("Valid keys are products_file, format (\"curl\" or \"json\") and header.")
            }
            AppError::Catalog(CatalogError::ParseError(_))
            | AppError::Catalog(CatalogError::UnexpectedFormat(_)) => Some(
                "Expected a JSON array of {\"id\", \"name\", \"customAttributes\"} objects or a {\"data\": [...]} response.",
            ),
            _ => None,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Io(_) => 74,
            _ => 1,
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
