//! Product catalog input.
//!
//! Products come either from the built-in sample catalog or from a JSON file
//! exported from the store backend. The file may hold a bare array of
//! products or the backend's `{"success": .., "data": [..]}` response
//! envelope.

mod product;
mod sample;

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, instrument};

pub use product::Product;
pub use sample::sample_products;

/// Errors that can occur when loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The catalog file is not valid product JSON.
    #[error("Failed to parse catalog file: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The file is a response envelope without a `data` array.
    #[error("Catalog response has no product data: {0}")]
    MissingData(String),

    /// The top-level JSON value is neither an array nor an object.
    #[error("Unexpected catalog format: expected an array or a response object, got {0}")]
    UnexpectedFormat(&'static str),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// The backend's standard response wrapper.
#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<Vec<Product>>,
    #[serde(default)]
    message: Option<String>,
}

/// Load a catalog from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON, or does
/// not contain a product list.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_products(path: &Path) -> Result<Vec<Product>> {
    let contents = fs::read_to_string(path)?;
    let products = parse_products(&contents)?;
    info!(count = products.len(), "Loaded catalog file");
    Ok(products)
}

/// Parse a catalog from JSON text.
pub fn parse_products(json: &str) -> Result<Vec<Product>> {
    let value: Value = serde_json::from_str(json)?;

    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(_) => {
            let envelope: ResponseEnvelope = serde_json::from_value(value)?;
            debug!(success = envelope.success, "Parsed response envelope");
            envelope.data.ok_or_else(|| {
                CatalogError::MissingData(
                    envelope
                        .message
                        .unwrap_or_else(|| "no message".to_string()),
                )
            })
        }
        Value::Null => Err(CatalogError::UnexpectedFormat("null")),
        Value::Bool(_) => Err(CatalogError::UnexpectedFormat("a boolean")),
        Value::Number(_) => Err(CatalogError::UnexpectedFormat("a number")),
        Value::String(_) => Err(CatalogError::UnexpectedFormat("a string")),
    }
}
